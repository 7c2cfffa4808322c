//! `reelmock-generator` -- mock movie data generator.
//!
//! Serves `GET /api/movies`, which synthesizes search results and writes them
//! into the mock-server environment file at `MOCK_ENV_PATH`. See
//! [`reelmock_api::config::ServerConfig::from_env`] for all variables.

use reelmock_api::config::Service;

#[tokio::main]
async fn main() {
    reelmock_api::server::run(Service::Generator).await;
}
