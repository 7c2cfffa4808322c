use std::str::FromStr;

/// Which back end the client is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// The proxy in front of the public search API.
    Real,
    /// The mock server replaying generated data.
    Mock,
}

impl ApiMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Mock => "mock",
        }
    }
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "real" => Ok(Self::Real),
            "mock" => Ok(Self::Mock),
            other => Err(format!("unknown API mode '{other}' (expected 'real' or 'mock')")),
        }
    }
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the `/movies` search is appended to.
    pub api_base_url: String,
    pub mode: ApiMode,
    /// Generator service used for the health probe and generation trigger.
    pub mock_generator_base_url: String,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `API_BASE_URL`            | `http://localhost:4001/api` |
    /// | `API_MODE`                | `real`                      |
    /// | `MOCK_GENERATOR_BASE_URL` | `http://localhost:5500`     |
    /// | `CLIENT_TIMEOUT_SECS`     | `10`                        |
    ///
    /// Panics if `API_MODE` or `CLIENT_TIMEOUT_SECS` is invalid.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4001/api".into());

        let mode: ApiMode = std::env::var("API_MODE")
            .unwrap_or_else(|_| "real".into())
            .parse()
            .unwrap_or_else(|e| panic!("API_MODE is invalid: {e}"));

        let mock_generator_base_url = std::env::var("MOCK_GENERATOR_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5500".into());

        let timeout_secs: u64 = std::env::var("CLIENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("CLIENT_TIMEOUT_SECS must be a valid u64");

        Self {
            api_base_url,
            mode,
            mock_generator_base_url,
            timeout_secs,
        }
    }
}
