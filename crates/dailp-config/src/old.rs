use std::env;

use serde::{Deserialize, Serialize};

/// Connection settings for the Online Linguistic Database instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OldConfig {
    /// Base URL of the instance, without a trailing slash
    pub url: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl OldConfig {
    pub fn new() -> Self {
        let url = env::var("OLD_URL").unwrap_or_else(|_| "http://127.0.0.1:61001/chrold".to_string());
        let username = env::var("OLD_USERNAME").unwrap_or_else(|_| "jdunham".to_string());
        let password = env::var("OLD_PASSWORD").unwrap_or_else(|_| "abc123XYZ!".to_string());

        Self {
            url: url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }
}

impl Default for OldConfig {
    fn default() -> Self {
        Self::new()
    }
}
