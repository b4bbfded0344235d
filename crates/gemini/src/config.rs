/// Default model used for distribution analysis.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default public endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default bound on a single completion request, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Empty disables outbound calls.
    pub api_key: String,
    /// Model name, e.g. `gemini-3-flash-preview`.
    pub model: String,
    /// Scheme + host of the API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables.
    ///
    /// | Env Var               | Default                                      |
    /// |-----------------------|----------------------------------------------|
    /// | `GEMINI_API_KEY`      | empty (every analysis returns the fallback)  |
    /// | `GEMINI_MODEL`        | `gemini-3-flash-preview`                     |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com`  |
    /// | `GEMINI_TIMEOUT_SECS` | `60`                                         |
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_TIMEOUT_SECS` is set but is not a valid `u64`.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GEMINI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            model,
            base_url,
            timeout_secs,
        }
    }

    /// Configuration pointing at an arbitrary endpoint, with default model
    /// and timeout.
    pub fn with_endpoint(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
