use super::defaults::{
    DEFAULT_ACCEPT_INVALID_CERTS, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
use serde::Deserialize;
use std::time::Duration;

/// HTTP client settings shared by every probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Accept self-signed certificates; common on LAN installs
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            accept_invalid_certs: DEFAULT_ACCEPT_INVALID_CERTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(crate) struct RawHttpSettings {
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub accept_invalid_certs: Option<bool>,
    pub user_agent: Option<String>,
}
