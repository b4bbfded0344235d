use std::str::FromStr;

use nexa_gemini::GeminiConfig;

/// Default request body ceiling: 50 MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// Defaults target a local development checkout with the portal front end on
/// the Vite dev server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins.
    pub cors_origins: Vec<String>,
    /// Requests running longer than this answer 408.
    pub request_timeout_secs: u64,
    /// Largest accepted request body. Staff pictures arrive inline as data
    /// URIs, so this sits well above axum's 2 MiB default.
    pub max_body_bytes: usize,
    /// Grace period for closing the database pool once the listener stops.
    pub shutdown_timeout_secs: u64,
    /// SQLite URL; the file is created on first start.
    pub database_url: String,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `90`                    |
    /// | `MAX_BODY_BYTES`        | `52428800` (50 MiB)     |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `DATABASE_URL`          | `sqlite://nexa.db`      |
    ///
    /// Gemini variables are documented on [`GeminiConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parse("PORT", 3000),
            cors_origins: parse_origins(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 90),
            max_body_bytes: env_parse("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
            shutdown_timeout_secs: env_parse("SHUTDOWN_TIMEOUT_SECS", 30),
            database_url: env_or("DATABASE_URL", "sqlite://nexa.db"),
            gemini: GeminiConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a valid {}", std::any::type_name::<T>())),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
