//! Database configuration.
//!
//! The mirror lives in a local libSQL file by default. Remote sqld is
//! supported by setting `url` + `auth_token`; when both are present the
//! remote connection wins over the local path.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "capitol.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file path (`:memory:` is accepted for tests).
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://capitol.example.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote connection is fully configured.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}
