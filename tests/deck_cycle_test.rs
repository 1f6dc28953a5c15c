//! End-to-end fact deck integration tests
//!
//! Drives one fetch cycle against scripted sources and exercises the
//! cyclic index, indicators, and advisory behavior of the deck.

use async_trait::async_trait;

use starlore::apod::{fallback_facts, ApodError, FactRecord, FactSource};
use starlore::view::{FactDeck, FetchMode, ADVISORY_MESSAGE};

/// Source that succeeds for every date.
struct LiveSource;

#[async_trait]
impl FactSource for LiveSource {
    async fn fetch_by_date(&self, date: &str) -> Result<FactRecord, ApodError> {
        Ok(FactRecord {
            fact: format!("On {date} the sky did something remarkable."),
            image: format!("https://apod.nasa.gov/{date}.jpg"),
            title: format!("Entry {date}"),
            date: date.to_string(),
            copyright: Some("Example Observatory".to_string()),
        })
    }
}

/// Source where the transport fails for every date.
struct DeadSource;

#[async_trait]
impl FactSource for DeadSource {
    async fn fetch_by_date(&self, _date: &str) -> Result<FactRecord, ApodError> {
        Err(ApodError::Network("dns resolution failed".to_string()))
    }
}

#[tokio::test]
async fn test_live_cycle_shows_five_and_wraps() {
    let mut deck = FactDeck::load(&LiveSource, 5, FetchMode::Random).await;

    assert_eq!(deck.len(), 5);
    assert!(deck.advisory().is_none());

    // Index cycles 0 -> 1 -> 2 -> 3 -> 4 -> 0 on repeated "next" actions.
    let mut seen = vec![deck.position()];
    for _ in 0..5 {
        deck.next();
        seen.push(deck.position());
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 0]);
}

#[tokio::test]
async fn test_dead_transport_degrades_to_fallback_with_advisory() {
    let mut deck = FactDeck::load(&DeadSource, 5, FetchMode::Random).await;

    assert_eq!(deck.advisory(), Some(ADVISORY_MESSAGE));
    assert!(deck.is_fallback());

    // Exactly the fallback records, in their fixed order.
    let expected = fallback_facts();
    assert_eq!(deck.len(), expected.len());
    for record in &expected {
        assert_eq!(deck.current_fact(), Some(record));
        deck.next();
    }
    // Wrapped back to the first record.
    assert_eq!(deck.current_fact(), Some(&expected[0]));
}

#[tokio::test]
async fn test_recent_mode_loads_newest_first() {
    let deck = FactDeck::load(&LiveSource, 3, FetchMode::Recent).await;

    assert_eq!(deck.len(), 3);
    // Recent mode starts from today; the first record carries today's date.
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(deck.current_fact().unwrap().date, today);
}

#[tokio::test]
async fn test_single_fact_deck_cycles_onto_itself() {
    let mut deck = FactDeck::load(&LiveSource, 1, FetchMode::Random).await;

    assert_eq!(deck.len(), 1);
    let first = deck.current_fact().cloned();
    deck.next();
    assert_eq!(deck.current_fact().cloned(), first);
}
