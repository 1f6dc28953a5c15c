//! Fact deck state
//!
//! Owns whichever record sequence is current (live or fallback), a cyclic
//! pointer over it, and the advisory shown when live aggregation failed.
//! One fetch cycle per load; the sequence is replaced wholesale, never
//! mutated in place.

use tracing::{info, warn};

use crate::apod::{fallback_facts, fetch_random, fetch_recent, FactRecord, FactSource};

/// Advisory shown when every live fetch attempt failed
pub const ADVISORY_MESSAGE: &str = "Failed to fetch from NASA API. Showing fallback data.";

/// How query dates for a fetch cycle are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Random historical dates since the APOD epoch
    Random,
    /// The most recent calendar dates, newest first
    Recent,
}

/// The main view's state: current records, cyclic index, advisory.
#[derive(Debug, Clone)]
pub struct FactDeck {
    facts: Vec<FactRecord>,
    current: usize,
    advisory: Option<String>,
}

impl FactDeck {
    /// Run one fetch cycle against `source` and build the deck.
    ///
    /// Total aggregation failure is not fatal: the deck degrades to the
    /// fallback dataset and carries the advisory message.
    pub async fn load<S>(source: &S, count: usize, mode: FetchMode) -> Self
    where
        S: FactSource + Sync,
    {
        let outcome = match mode {
            FetchMode::Random => fetch_random(source, count).await,
            FetchMode::Recent => fetch_recent(source, count).await,
        };

        match outcome {
            Ok(facts) => {
                info!(count = facts.len(), "Fact deck loaded from live data");
                Self {
                    facts,
                    current: 0,
                    advisory: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Live fetch failed entirely, using fallback data");
                Self {
                    facts: fallback_facts(),
                    current: 0,
                    advisory: Some(ADVISORY_MESSAGE.to_string()),
                }
            }
        }
    }

    /// Build a deck directly from records (no fetch cycle).
    pub fn from_records(facts: Vec<FactRecord>) -> Self {
        Self {
            facts,
            current: 0,
            advisory: None,
        }
    }

    /// Advance the cyclic pointer to the next fact.
    pub fn next(&mut self) {
        if !self.facts.is_empty() {
            self.current = (self.current + 1) % self.facts.len();
        }
    }

    /// The record the pointer currently rests on.
    pub fn current_fact(&self) -> Option<&FactRecord> {
        self.facts.get(self.current)
    }

    /// Zero-based pointer position
    pub fn position(&self) -> usize {
        self.current
    }

    /// Number of records in the deck
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the deck holds no records
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Advisory message set when live aggregation failed
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Whether the deck is showing the fallback dataset
    pub fn is_fallback(&self) -> bool {
        self.advisory.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apod::ApodError;
    use async_trait::async_trait;

    struct AlwaysFails;

    #[async_trait]
    impl FactSource for AlwaysFails {
        async fn fetch_by_date(&self, _date: &str) -> Result<FactRecord, ApodError> {
            Err(ApodError::Network("unreachable".to_string()))
        }
    }

    struct AlwaysSucceeds;

    #[async_trait]
    impl FactSource for AlwaysSucceeds {
        async fn fetch_by_date(&self, date: &str) -> Result<FactRecord, ApodError> {
            Ok(FactRecord {
                fact: format!("fact for {date}"),
                image: "https://apod.nasa.gov/x.jpg".to_string(),
                title: "x".to_string(),
                date: date.to_string(),
                copyright: None,
            })
        }
    }

    #[tokio::test]
    async fn test_load_live_has_no_advisory() {
        let deck = FactDeck::load(&AlwaysSucceeds, 5, FetchMode::Random).await;
        assert_eq!(deck.len(), 5);
        assert!(deck.advisory().is_none());
        assert!(!deck.is_fallback());
    }

    #[tokio::test]
    async fn test_load_total_failure_degrades_to_fallback() {
        let deck = FactDeck::load(&AlwaysFails, 5, FetchMode::Random).await;
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.advisory(), Some(ADVISORY_MESSAGE));
        assert!(deck.is_fallback());
        assert!(deck.current_fact().unwrap().is_fallback());
    }

    #[test]
    fn test_next_wraps_around() {
        let mut deck = FactDeck::from_records(fallback_facts());
        for expected in [1, 2, 3, 4, 0, 1] {
            deck.next();
            assert_eq!(deck.position(), expected);
        }
    }

    #[test]
    fn test_next_on_empty_deck_is_noop() {
        let mut deck = FactDeck::from_records(Vec::new());
        deck.next();
        assert_eq!(deck.position(), 0);
        assert!(deck.current_fact().is_none());
    }
}
