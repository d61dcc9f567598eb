/// Environment variable holding the backend base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// Client configuration loaded from environment variables.
///
/// The same base URL is used for API calls and for resolving the relative
/// image paths the backend returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, always ending with `/`.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build a config from an explicit base URL.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing(API_BASE_URL_VAR));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                var: API_BASE_URL_VAR,
                value: trimmed.to_string(),
            });
        }
        Ok(Self {
            api_base_url: format!("{}/", trimmed.trim_end_matches('/')),
        })
    }

    /// Load configuration from the environment.
    ///
    /// | Env Var        | Default |
    /// |----------------|---------|
    /// | `API_BASE_URL` | --      |
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(API_BASE_URL_VAR)
            .map_err(|_| ConfigError::Missing(API_BASE_URL_VAR))?;
        Self::new(&raw)
    }
}
