//! # Client configuration (`feedesk.toml`)
//!
//! Defines the TOML configuration file for the FeeDesk client (filename:
//! [`FeeDeskConfig::filename`] = `"feedesk.toml"`). The only tunable today
//! is the REST backend base URL; a missing or empty file is equivalent to
//! the default configuration.
//!
//! ```toml
//! [api]
//! base_url = "https://feesmanagementbackend.onrender.com/api"
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `feedesk.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeDeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://feesmanagementbackend.onrender.com/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl FeeDeskConfig {
    /// Create a config with the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "feedesk.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = FeeDeskConfig::from_toml("").unwrap();
        assert_eq!(config, FeeDeskConfig::default());
        assert!(config.api.base_url.ends_with("/api"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FeeDeskConfig::new("http://localhost:5000/api".to_string());
        let text = config.to_toml().unwrap();
        let loaded = FeeDeskConfig::from_toml(&text).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:5000/api");
    }
}
