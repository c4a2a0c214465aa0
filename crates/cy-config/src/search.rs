//! Snapshot search polling settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    5
}

const fn default_interval_millis() -> u64 {
    10
}

const fn default_page_size() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Give up polling once this many seconds have elapsed.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Pause between status polls, in milliseconds.
    #[serde(default = "default_interval_millis")]
    pub interval_millis: u64,

    /// Default page size for result and entity listings.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            interval_millis: default_interval_millis(),
            page_size: default_page_size(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_millis)
    }
}
