//! Movie-like search records and the envelope the generator publishes.
//!
//! Field names follow the JSON shape returned by the public JustWatch proxy
//! so mock responses are interchangeable with real ones on the client side.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// `source` value stamped on envelopes produced by the mock generator.
pub const GENERATOR_SOURCE: &str = "mock-generator";

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Whether a record describes a feature film or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovieKind {
    Movie,
    Show,
}

impl MovieKind {
    /// Prefix of the record identifier (`tm123`, `ts456`).
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Movie => "tm",
            Self::Show => "ts",
        }
    }

    /// Path segment used in the canonical URL.
    pub fn url_segment(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Show => "tv-show",
        }
    }

    /// Plausible runtime in minutes for this kind.
    pub fn runtime_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Movie => 85..=150,
            Self::Show => 25..=60,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A streaming offer attached to a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "type")]
    pub offer_type: String,
    pub name: String,
    pub url: String,
}

/// One search hit as returned by the movies endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Kind-prefixed identifier, e.g. `tm81237`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MovieKind,
    pub url: String,
    pub title: String,
    pub year: i32,
    /// Runtime in minutes.
    pub runtime: u32,
    /// Always three poster URLs (small, medium, large).
    pub photo_url: Vec<String>,
    pub backdrops: Vec<String>,
    #[serde(rename = "tmdbId")]
    pub tmdb_id: u32,
    #[serde(rename = "imdbId")]
    pub imdb_id: String,
    /// Normalized audience rating in `[0, 1)`.
    pub rating: f64,
    /// Critic score percentage, when known.
    pub tomatometer: Option<u8>,
    #[serde(rename = "isCertifiedFresh")]
    pub is_certified_fresh: Option<bool>,
    pub offers: Vec<Offer>,
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Upstream-compatible result block (`{ok, error_code, description}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub ok: bool,
    pub error_code: u16,
    pub description: Vec<MovieRecord>,
}

/// Payload the generator writes into the mock environment and returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    pub source: String,
    pub query: String,
    pub results: SearchResults,
}

impl SearchEnvelope {
    /// Wrap freshly synthesized records as a successful generator response.
    pub fn generated(query: impl Into<String>, records: Vec<MovieRecord>) -> Self {
        Self {
            source: GENERATOR_SOURCE.to_string(),
            query: query.into(),
            results: SearchResults {
                ok: true,
                error_code: 200,
                description: records,
            },
        }
    }
}
