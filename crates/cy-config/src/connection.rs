//! Remote API connection settings.

use serde::{Deserialize, Serialize};

/// Default name of the environment variable holding the password.
fn default_password_env() -> String {
    "CYODA_PASSWORD".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// API base URL, e.g. `https://my-namespace.cyoda.net/api`. No default:
    /// commands fail unless this or `--host` names an instance.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Login user name.
    #[serde(default)]
    pub username: String,

    /// Name of the environment variable consulted first for the password.
    #[serde(default = "default_password_env")]
    pub password_env: String,

    /// Single-line password file, consulted when the variable is unset.
    #[serde(default)]
    pub password_file: Option<String>,

    /// Per-request timeout. Unset means requests may block indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            username: String::new(),
            password_env: default_password_env(),
            password_file: None,
            request_timeout_secs: None,
        }
    }
}

impl ConnectionConfig {
    /// Configured API URL without a trailing slash, if one is set.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.api_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    #[must_use]
    pub fn has_username(&self) -> bool {
        !self.username.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_no_instance() {
        let config = ConnectionConfig::default();
        assert!(config.api_url.is_none());
        assert!(config.base_url().is_none());
        assert_eq!(config.password_env, "CYODA_PASSWORD");
        assert!(config.password_file.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(!config.has_username());
    }

    #[test]
    fn base_url_strips_trailing_slashes() {
        let config = ConnectionConfig {
            api_url: Some("https://dev.cyoda.net/api//".into()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), Some("https://dev.cyoda.net/api"));
    }

    #[test]
    fn blank_api_url_counts_as_unset() {
        let config = ConnectionConfig {
            api_url: Some("   ".into()),
            ..Default::default()
        };
        assert!(config.base_url().is_none());
    }
}
