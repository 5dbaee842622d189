use super::error::ConfigError;
use super::http::HttpSettings;
use crate::infrastructure::http::Credentials;
use std::path::Path;

/// Application configuration loaded from zmportal.toml
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub http: HttpSettings,
    /// Credentials used to refine discovery, from `[auth]` or the environment
    pub credentials: Option<Credentials>,
}

impl AppConfig {
    /// Load configuration from a file path (or default path if None)
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_config(path)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        super::loader::parse_config(content, Path::new("<inline>"))
    }
}
