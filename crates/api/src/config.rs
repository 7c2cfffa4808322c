use std::path::PathBuf;

/// Which of the two services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Mock data generator writing the environment file.
    Generator,
    /// Pass-through proxy to the upstream search API.
    Proxy,
}

impl Service {
    /// Port used when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Generator => 5500,
            Self::Proxy => 4001,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Proxy => "proxy",
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: Service,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default depends on [`Service`]).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Mock-server environment file the generator rewrites.
    pub env_path: PathBuf,
    /// Base URL of the public search API the proxy forwards to.
    pub upstream_base_url: String,
    /// Client-side timeout for upstream calls in seconds (default: `10`).
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                                  |
    /// |-------------------------|------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                |
    /// | `PORT`                  | `5500` generator, `4001` proxy           |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                     |
    /// | `MOCK_ENV_PATH`         | `./apps/mockoon-server/environment.json` |
    /// | `UPSTREAM_BASE_URL`     | `https://imdb.iamidiotareyoutoo.com`     |
    /// | `UPSTREAM_TIMEOUT_SECS` | `10`                                     |
    ///
    /// Panics if a numeric variable does not parse.
    pub fn from_env(service: Service) -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .map(|v| v.parse().expect("PORT must be a valid u16"))
            .unwrap_or_else(|_| service.default_port());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let env_path = std::env::var("MOCK_ENV_PATH")
            .unwrap_or_else(|_| "./apps/mockoon-server/environment.json".into())
            .into();

        let upstream_base_url = std::env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "https://imdb.iamidiotareyoutoo.com".into());

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        Self {
            service,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            env_path,
            upstream_base_url,
            upstream_timeout_secs,
        }
    }
}
