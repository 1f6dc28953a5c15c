//! Fact records and upstream payload validation
//!
//! The APOD endpoint returns a loosely shaped JSON object; `ApodPayload`
//! captures it as-is and `FactRecord::from_payload` performs the explicit
//! validation step that turns it into display data or a tagged failure.

use serde::{Deserialize, Serialize};

/// Date marker carried by fallback records instead of a calendar date.
pub const FALLBACK_DATE: &str = "fallback";

/// Raw APOD response body.
///
/// Every field is optional: the API omits `copyright` for public-domain
/// entries and `hdurl` for video entries, and validation is our job anyway.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodPayload {
    #[serde(default)]
    pub explanation: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub hdurl: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub copyright: Option<String>,
}

/// The normalized unit of display data produced from one upstream entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactRecord {
    /// The fact text (APOD explanation)
    pub fact: String,
    /// Image locator, preferring the high-definition variant
    pub image: String,
    /// Entry title
    pub title: String,
    /// ISO date of the entry, or `"fallback"` for fallback records
    pub date: String,
    /// Attribution, when the entry is not public domain
    pub copyright: Option<String>,
}

impl FactRecord {
    /// Validate an upstream payload into a fact record.
    ///
    /// Requires a non-empty explanation and at least one image locator.
    /// The high-definition URL wins when both are present.
    pub fn from_payload(payload: ApodPayload) -> Result<Self, PayloadError> {
        let fact = payload
            .explanation
            .filter(|s| !s.is_empty())
            .ok_or(PayloadError::MissingExplanation)?;

        let image = [payload.hdurl, payload.url]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .ok_or(PayloadError::MissingImage)?;

        Ok(Self {
            fact,
            image,
            title: payload.title.unwrap_or_default(),
            date: payload.date.unwrap_or_default(),
            copyright: payload.copyright,
        })
    }

    /// Whether this record came from the fallback dataset
    pub fn is_fallback(&self) -> bool {
        self.date == FALLBACK_DATE
    }
}

/// Errors from payload validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("payload has no explanation text")]
    MissingExplanation,

    #[error("payload has no image locator")]
    MissingImage,
}
