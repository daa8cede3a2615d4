//! CLI configuration file support
//!
//! Loads configuration from ~/.config/drivedocs/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Session defaults, overridable by flags and environment variables
    #[serde(default)]
    pub session: SessionConfig,
    /// Endpoint overrides
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

/// Session default values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    pub server: Option<String>,
    pub database: Option<String>,
    pub session_id: Option<String>,
    pub username: Option<String>,
    /// Selected vehicle id
    pub device: Option<String>,
}

/// Endpoint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL of the document endpoints
    pub docs_url: Option<String>,
}

impl CliConfig {
    /// Load configuration from default path
    pub fn load() -> Self {
        Self::load_from_path(Self::default_path())
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: Option<PathBuf>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("drivedocs").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = CliConfig::load_from_path(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(config.session.server.is_none());
        assert!(config.endpoints.docs_url.is_none());
    }

    #[test]
    fn parses_session_section() {
        let config: CliConfig = toml::from_str(
            r#"
            [session]
            server = "my.fleet.example"
            database = "acme"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.server.as_deref(), Some("my.fleet.example"));
        assert_eq!(config.session.database.as_deref(), Some("acme"));
    }
}
