pub mod generator;
pub mod proxy;

use serde::Deserialize;

/// `?q=` query string shared by both movies endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    pub q: Option<String>,
}
