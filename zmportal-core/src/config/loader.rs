use super::error::ConfigError;
use super::http::{HttpSettings, RawHttpSettings};
use crate::constants::{CONFIG_PATH, ENV_PATH, PASSWORD_ENV, USERNAME_ENV};
use crate::infrastructure::http::Credentials;
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub http: RawHttpSettings,
    pub auth: Option<RawAuth>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawAuth {
    pub username: String,
    pub password: Option<String>,
    /// Environment variable holding the password, defaults to `ZM_PASSWORD`
    pub password_env: Option<String>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate configuration from a file path.
///
/// A missing file at the default path yields the built-in defaults; a
/// missing file at an explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<super::AppConfig, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_config(path),
        None => match read_config(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                validate_and_build(RawConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<super::AppConfig, ConfigError> {
    debug!(path = %path.display(), "Reading configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_config(&content, path)
}

pub(super) fn parse_config(content: &str, path: &Path) -> Result<super::AppConfig, ConfigError> {
    let parsed: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawConfig) -> Result<super::AppConfig, ConfigError> {
    let defaults = HttpSettings::default();
    let raw = parsed.http;

    let timeout_secs = raw.timeout_secs.unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            field: "timeout_secs",
        });
    }
    let connect_timeout_secs = raw
        .connect_timeout_secs
        .unwrap_or(defaults.connect_timeout_secs);
    if connect_timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            field: "connect_timeout_secs",
        });
    }

    let http = HttpSettings {
        timeout_secs,
        connect_timeout_secs,
        accept_invalid_certs: raw
            .accept_invalid_certs
            .unwrap_or(defaults.accept_invalid_certs),
        user_agent: raw.user_agent.unwrap_or(defaults.user_agent),
    };

    let credentials = match parsed.auth {
        Some(auth) => Some(credentials_from_auth(auth)?),
        None => credentials_from_env(),
    };

    Ok(super::AppConfig { http, credentials })
}

fn credentials_from_auth(auth: RawAuth) -> Result<Credentials, ConfigError> {
    let username = expand(&auth.username);
    if let Some(password) = auth.password {
        return Ok(Credentials::new(username, expand(&password)));
    }

    let env_var = auth.password_env.unwrap_or_else(|| PASSWORD_ENV.to_string());
    match env::var(&env_var) {
        Ok(password) => Ok(Credentials::new(username, password)),
        Err(_) => Err(ConfigError::MissingPassword { env_var }),
    }
}

fn credentials_from_env() -> Option<Credentials> {
    let username = env::var(USERNAME_ENV).ok().filter(|u| !u.is_empty())?;
    match env::var(PASSWORD_ENV) {
        Ok(password) => Some(Credentials::new(username, password)),
        Err(_) => {
            warn!(
                env_var = USERNAME_ENV,
                "Username set in environment without a password, ignoring"
            );
            None
        }
    }
}

fn expand(value: &str) -> String {
    shellexpand::env(value)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| value.to_string())
}
