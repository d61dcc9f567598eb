use myron_client::config::{ClientConfig, ConfigError};

use crate::controller::DeletePolicy;

/// Admin console configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub client: ClientConfig,
    pub delete_policy: DeletePolicy,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `API_BASE_URL`         | --      |
    /// | `IGNORE_DELETE_ERRORS` | `true`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        let client = ClientConfig::from_env()?;

        let ignore_delete_errors = std::env::var("IGNORE_DELETE_ERRORS")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        Ok(Self {
            client,
            delete_policy: DeletePolicy {
                ignore_delete_errors,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
