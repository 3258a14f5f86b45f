use crate::{ConfigError, ConfigErrorResult, DEFAULT_PAGINATION_HEADER, DEFAULT_REMOTE_BASE_URL};

use serde::Deserialize;

/// Where the mirrored users come from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// API root; `/users` and `/users/{id}` are appended
    pub base_url: String,
    /// Response header carrying the total page count
    pub pagination_header: String,
    /// Optional bearer token sent with every request
    pub token: Option<String>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_REMOTE_BASE_URL),
            pagination_header: String::from(DEFAULT_PAGINATION_HEADER),
            token: None,
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::remote(format!(
                "remote.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.pagination_header.trim().is_empty() {
            return Err(ConfigError::remote(
                "remote.pagination_header cannot be empty",
            ));
        }

        Ok(())
    }
}
