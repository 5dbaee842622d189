//! Application constants
//!
//! Well-known ZoneMinder paths and configuration defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/zmportal.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Path prefix most ZoneMinder packages install the web UI under
pub const ZM_PREFIX: &str = "/zm";

/// API root, relative to the portal
pub const API_PATH: &str = "/api";

/// Version endpoint used as the primary probe, relative to the API root
pub const VERSION_PATH: &str = "/host/getVersion.json";

/// Login endpoint used as the fallback probe and for authentication
pub const LOGIN_PATH: &str = "/host/login.json";

/// Streaming CGI script, relative to the portal
pub const DEFAULT_CGI_PATH: &str = "/cgi-bin/nph-zms";

/// Server configuration key holding the streaming CGI path
pub const ZMS_PATH_CONFIG_KEY: &str = "ZM_PATH_ZMS";

/// Environment variable for the login username
pub const USERNAME_ENV: &str = "ZM_USERNAME";

/// Environment variable for the login password
pub const PASSWORD_ENV: &str = "ZM_PASSWORD";
