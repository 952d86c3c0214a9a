//! Upstream dataset configuration.

use serde::{Deserialize, Serialize};

/// Default upstream endpoint: the current-legislators JSON dataset.
const DEFAULT_URL: &str =
    "https://theunitedstates.io/congress-legislators/legislators-current.json";

/// Default HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// URL of the upstream legislators JSON document.
    #[serde(default = "default_url")]
    pub url: String,

    /// HTTP request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_current_legislators() {
        let config = UpstreamConfig::default();
        assert!(config.url.ends_with("legislators-current.json"));
        assert_eq!(config.timeout_secs, 10);
    }
}
