//! Domain core for the reelmock workspace.
//!
//! Holds everything that does not touch the network or the filesystem:
//! movie record types, the mock response synthesizer, the typed mock-server
//! environment schema, the movies-route upsert engine, and normalization of
//! search responses for clients.

pub mod environment;
pub mod error;
pub mod movie;
pub mod normalize;
pub mod synth;
pub mod upsert;
