use std::time::Duration;

use chrono::Utc;
use clap::Parser;

use catalog::utils::{format_release_date, time_until};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Release instant as a unix timestamp
    release: i64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    println!("Release: {}", format_release_date(Some(args.release)));

    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        ticker.tick().await;

        let left = time_until(args.release, Utc::now().timestamp());

        if left.is_past {
            println!("Released!");
            break;
        }

        println!(
            "{}d {:02}h {:02}m {:02}s",
            left.days, left.hours, left.minutes, left.seconds
        );
    }
}
