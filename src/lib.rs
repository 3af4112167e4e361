//! # Gamewatch
//!
//! Release tracker for upcoming, recently-released, and trending games.
//!
//! ## Overall Layout
//!
//! - `catalog`: IGDB access. Owns the Twitch token lifecycle, the three
//!   fixed query shapes, and the pure display helpers (image sizing,
//!   release dates, countdown decomposition).
//! - `server`: the axum web service. Three proxy endpoints plus `/health`,
//!   with a 300s in-process response cache in front of the catalog.
//! - `tester`: terminal countdown against a release timestamp, ticking
//!   once per second the way the site's countdown cards do.
//!
//! ## Notes
//!
//! - The catalog credentials never leave the backend; browsers only ever
//!   see this service's endpoints.
//! - All shared state is the token cache and the response cache. Both swap
//!   whole entries under a lock, so no request can observe a half-written
//!   token or game list.

pub use server::start_server;
