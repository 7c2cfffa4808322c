//! `reelmock-search [--generate] <query...>`
//!
//! Prints the normalized search hits for a query. With `--generate` the mock
//! generator is asked to refresh its data first.

use reelmock_client::{ApiMode, ClientConfig, SearchClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelmock_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut generate = false;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--generate" => generate = true,
            _ => words.push(arg),
        }
    }
    let query = words.join(" ");

    let config = ClientConfig::from_env();
    let client = SearchClient::new(&config).expect("Failed to build HTTP client");

    if config.mode == ApiMode::Mock {
        let available = client.generator_available().await;
        tracing::info!(available, "Mock generator health");
    }

    if generate && client.trigger_generation(&query).await.is_err() {
        std::process::exit(1);
    }

    let movies = client.search(&query).await;
    if movies.is_empty() {
        println!("No results.");
        return;
    }

    for movie in &movies {
        let year = movie.year.map(|y| format!(" ({y})")).unwrap_or_default();
        match movie.poster() {
            Some(poster) => println!("{}{year}  {poster}", movie.title),
            None => println!("{}{year}", movie.title),
        }
    }
}
