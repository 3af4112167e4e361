use chrono::DateTime;
use serde::Serialize;

use crate::models::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Thumb,
    CoverSmall,
    CoverBig,
    ScreenshotMed,
    ScreenshotBig,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Thumb => "thumb",
            ImageSize::CoverSmall => "cover_small",
            ImageSize::CoverBig => "cover_big",
            ImageSize::ScreenshotMed => "screenshot_med",
            ImageSize::ScreenshotBig => "screenshot_big",
        }
    }
}

pub fn format_image_url(url: &str, size: ImageSize) -> String {
    if url.is_empty() {
        return String::new();
    }

    let sized = url.replacen("t_thumb", &format!("t_{}", size.as_str()), 1);

    match sized.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => sized,
    }
}

// Upstream records carry thumbnail-size, protocol-relative image URLs;
// swap in the display variants before they leave the proxy.
pub fn present_games(mut games: Vec<Game>) -> Vec<Game> {
    for game in &mut games {
        if let Some(cover) = game.cover.as_mut() {
            cover.url = format_image_url(&cover.url, ImageSize::CoverBig);
        }

        if let Some(screenshots) = game.screenshots.as_mut() {
            for screenshot in screenshots {
                screenshot.url = format_image_url(&screenshot.url, ImageSize::ScreenshotBig);
            }
        }
    }

    games
}

pub fn format_release_date(timestamp: Option<i64>) -> String {
    match timestamp.and_then(|t| DateTime::from_timestamp(t, 0)) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "TBA".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeUntil {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub is_past: bool,
}

pub fn time_until(release: i64, now: i64) -> TimeUntil {
    let difference = release - now;

    if difference <= 0 {
        return TimeUntil {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            is_past: true,
        };
    }

    TimeUntil {
        days: difference / 86_400,
        hours: difference % 86_400 / 3_600,
        minutes: difference % 3_600 / 60,
        seconds: difference % 60,
        is_past: false,
    }
}
