//! reelmock HTTP services.
//!
//! Two binaries share this library:
//!
//! - `reelmock-generator` synthesizes mock movie results and writes them into
//!   the mock-server environment file.
//! - `reelmock-proxy` forwards movie searches to the public upstream API.
//!
//! Config, state, error handling, routes and the router builder live here so
//! integration tests exercise the same stack as the binaries.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
pub mod upstream;
