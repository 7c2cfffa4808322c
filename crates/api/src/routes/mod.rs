pub mod health;
pub mod movies;

use axum::Router;

use crate::config::Service;
use crate::state::AppState;

/// Build the route tree for `service`.
///
/// ```text
/// generator:
///   GET  /health        environment file readability + mtime
///   GET  /api/movies    synthesize results, upsert into environment file
///   POST /mocks         append a route to the environment file
///
/// proxy:
///   GET  /health        liveness
///   GET  /api/movies    forward to the upstream search API
/// ```
pub fn service_routes(service: Service) -> Router<AppState> {
    match service {
        Service::Generator => Router::new()
            .merge(health::environment_router())
            .merge(movies::generator_router()),
        Service::Proxy => Router::new()
            .merge(health::liveness_router())
            .merge(movies::proxy_router()),
    }
}
