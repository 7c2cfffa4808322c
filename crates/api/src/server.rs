//! Process bootstrap shared by both binaries.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use reelmock_store::EnvironmentStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Service, ServerConfig};
use crate::router::build_app_router;
use crate::state::AppState;
use crate::upstream::UpstreamClient;

/// Load `.env`, install tracing, read config, and serve `service` until a
/// shutdown signal arrives.
pub async fn run(service: Service) {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelmock_api=debug,reelmock_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env(service);
    tracing::info!(
        service = service.name(),
        host = %config.host,
        port = %config.port,
        env_path = %config.env_path.display(),
        upstream = %config.upstream_base_url,
        "Loaded server configuration",
    );

    // --- App state ---
    let upstream = UpstreamClient::new(
        config.upstream_base_url.clone(),
        Duration::from_secs(config.upstream_timeout_secs),
    )
    .expect("Failed to build upstream HTTP client");

    let state = AppState {
        config: Arc::new(config.clone()),
        store: Arc::new(EnvironmentStore::new(config.env_path.clone())),
        upstream: Arc::new(upstream),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, service = service.name(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Resolve once the process is asked to stop, naming the signal received.
///
/// Ctrl-C everywhere, SIGTERM as well on Unix. In-flight requests (including
/// a generator write holding the store lock) finish before `serve` returns.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Shutdown requested, draining connections");
}
