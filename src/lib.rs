//! Starlore - Astronomy fact explorer
//!
//! "The heavens declare the glory of God" - Psalm 19:1
//!
//! Starlore fetches Astronomy Picture of the Day entries from NASA's public
//! REST API for randomly sampled historical dates and presents them as a
//! cyclable deck of facts in the terminal.
//!
//! ## Modules
//!
//! - **apod**: APOD client, date sampling, fan-out aggregation, fallback data
//! - **config**: CLI arguments and environment variable handling
//! - **view**: fact deck state and the terminal session

pub mod apod;
pub mod config;
pub mod view;

pub use apod::{ApodClient, ApodClientConfig, ApodError, FactRecord, FactSource};
pub use config::Args;
pub use view::{FactDeck, FetchMode};
