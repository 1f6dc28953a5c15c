//! Query-date sampling
//!
//! APOD is parameterized by calendar date, so a batch fetch starts from a
//! batch of dates. Random sampling interpolates linearly over elapsed
//! milliseconds between the APOD epoch and now; duplicates within one batch
//! are permitted.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::Rng;

/// The first Astronomy Picture of the Day was published on this date.
pub const APOD_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1995, 6, 16) {
    Some(d) => d,
    None => panic!("invalid APOD epoch"),
};

/// ISO calendar-date format used by the APOD endpoint
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sample `count` random dates between the APOD epoch and now, inclusive.
///
/// Sampling is uniform over elapsed time, not calendar-uniform, and the
/// same date can appear more than once in a batch.
pub fn random_dates(count: usize) -> Vec<String> {
    random_dates_until(count, Utc::now())
}

/// Sample `count` random dates between the APOD epoch and `end`, inclusive.
pub fn random_dates_until(count: usize, end: DateTime<Utc>) -> Vec<String> {
    let start = APOD_EPOCH
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(end);
    let span_ms = (end - start).num_milliseconds().max(0);

    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let offset_ms = rng.gen_range(0..=span_ms);
            let sampled = start + Duration::milliseconds(offset_ms);
            sampled.format(DATE_FORMAT).to_string()
        })
        .collect()
}

/// The `count` most recent calendar dates, today first.
pub fn recent_dates(count: usize) -> Vec<String> {
    recent_dates_from(count, Utc::now())
}

/// The `count` calendar dates ending at `today`, newest first.
pub fn recent_dates_from(count: usize, today: DateTime<Utc>) -> Vec<String> {
    (0..count)
        .map(|i| {
            let date = today - Duration::days(i as i64);
            date.format(DATE_FORMAT).to_string()
        })
        .collect()
}
