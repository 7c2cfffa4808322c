//! `reelmock-proxy` -- pass-through proxy to the public movie search API.
//!
//! Serves `GET /api/movies?q=...` by forwarding to
//! `{UPSTREAM_BASE_URL}/justwatch`.

use reelmock_api::config::Service;

#[tokio::main]
async fn main() {
    reelmock_api::server::run(Service::Proxy).await;
}
