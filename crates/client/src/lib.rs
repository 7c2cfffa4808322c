//! Client for the movie search endpoints.
//!
//! Talks to either the proxy (real mode) or the mock server replaying the
//! generated environment (mock mode) and normalizes whatever comes back into
//! [`MovieSummary`] items.

pub mod config;
pub mod error;
pub mod search;

pub use config::{ApiMode, ClientConfig};
pub use error::ClientError;
pub use reelmock_core::normalize::{MovieSummary, PhotoUrl};
pub use search::SearchClient;
