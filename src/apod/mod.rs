//! APOD data-access layer
//!
//! Everything between the terminal view and NASA's Astronomy Picture of the
//! Day endpoint:
//!
//! - **record**: the normalized `FactRecord` and upstream payload validation
//! - **dates**: random and recent query-date sampling
//! - **client**: the HTTP client for single-record fetches
//! - **fetch**: partial-failure-tolerant fan-out aggregation
//! - **fallback**: the static dataset used when every fetch fails

pub mod client;
pub mod dates;
pub mod fallback;
pub mod fetch;
pub mod record;

pub use client::{ApodClient, ApodClientConfig, ApodError};
pub use dates::{random_dates, recent_dates, APOD_EPOCH};
pub use fallback::fallback_facts;
pub use fetch::{fetch_batch, fetch_random, fetch_recent, FactSource};
pub use record::{ApodPayload, FactRecord, PayloadError, FALLBACK_DATE};
