use std::sync::Arc;

use reelmock_store::EnvironmentStore;

use crate::config::ServerConfig;
use crate::upstream::UpstreamClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Serialized access to the mock-server environment file.
    pub store: Arc<EnvironmentStore>,
    /// Client for the public search API (proxy service).
    pub upstream: Arc<UpstreamClient>,
}
