//! Static fallback dataset
//!
//! Used when the fan-out aggregator fails entirely. Pure data, no I/O; the
//! same five records in the same order on every call.

use super::record::{FactRecord, FALLBACK_DATE};

/// Image locator used by fallback records (no network dependency)
const PLACEHOLDER_IMAGE: &str = "/api/placeholder/800/450";

/// The always-available fact records shown when no live data can be fetched.
pub fn fallback_facts() -> Vec<FactRecord> {
    let entries = [
        (
            "A neutron star is so dense that a teaspoon of its material would weigh about 4 billion tons on Earth.",
            "Neutron Star Density",
        ),
        (
            "The largest known star, UY Scuti, is around 1,700 times larger than our Sun.",
            "UY Scuti",
        ),
        (
            "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
            "Speed of Light",
        ),
        (
            "The Milky Way galaxy is estimated to contain 100-400 billion stars.",
            "Milky Way Galaxy",
        ),
        (
            "Saturn's rings are mostly made up of ice particles, with a small amount of rocky debris and dust.",
            "Saturn's Rings",
        ),
    ];

    entries
        .into_iter()
        .map(|(fact, title)| FactRecord {
            fact: fact.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            title: title.to_string(),
            date: FALLBACK_DATE.to_string(),
            copyright: None,
        })
        .collect()
}
