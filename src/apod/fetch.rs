//! Partial-failure-tolerant fan-out aggregation
//!
//! One fetch cycle issues every single-record fetch concurrently and joins
//! them with a settle-all barrier: each attempt runs to its own final
//! outcome, successes are collected in attempt-start order, and only the
//! zero-success case escalates. Individual failures are logged and excluded.

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use super::client::ApodError;
use super::dates::{random_dates, recent_dates};
use super::record::FactRecord;

/// A source of single-date fact records.
///
/// `ApodClient` is the production implementation; tests substitute scripted
/// sources to exercise the aggregator without a transport.
#[async_trait]
pub trait FactSource {
    /// Fetch the fact record for one ISO `YYYY-MM-DD` date.
    async fn fetch_by_date(&self, date: &str) -> Result<FactRecord, ApodError>;
}

/// Fetch every date concurrently, keeping whichever attempts succeed.
///
/// Survivor order is attempt-start order, not completion order. Fails only
/// when zero attempts succeeded.
pub async fn fetch_batch<S>(source: &S, dates: &[String]) -> Result<Vec<FactRecord>, ApodError>
where
    S: FactSource + Sync,
{
    let attempts = dates.iter().map(|date| source.fetch_by_date(date));
    let outcomes = join_all(attempts).await;

    let mut records = Vec::with_capacity(outcomes.len());
    for (date, outcome) in dates.iter().zip(outcomes) {
        match outcome {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(date = %date, error = %e, "APOD fetch attempt failed, excluding");
            }
        }
    }

    if records.is_empty() {
        return Err(ApodError::AllSourcesUnavailable);
    }

    debug!(
        requested = dates.len(),
        fetched = records.len(),
        "APOD batch fetch completed"
    );

    Ok(records)
}

/// Obtain up to `count` records for random historical dates.
pub async fn fetch_random<S>(source: &S, count: usize) -> Result<Vec<FactRecord>, ApodError>
where
    S: FactSource + Sync,
{
    fetch_batch(source, &random_dates(count)).await
}

/// Obtain up to `count` records for the most recent dates, newest first.
pub async fn fetch_recent<S>(source: &S, count: usize) -> Result<Vec<FactRecord>, ApodError>
where
    S: FactSource + Sync,
{
    fetch_batch(source, &recent_dates(count)).await
}
