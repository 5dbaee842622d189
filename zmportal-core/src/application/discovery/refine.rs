//! Credential-based refinement
//!
//! After a candidate is accepted, a login lets us ask the server where its
//! streaming CGI really lives (`ZM_PATH_ZMS`). Nothing here can fail the
//! discovery call; every problem degrades to keeping the default URL.

use super::candidates::Candidate;
use crate::constants::ZMS_PATH_CONFIG_KEY;
use crate::infrastructure::http::{Authenticator, Credentials};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Outcome of the refinement step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZmsOverride {
    /// Server reported path, exactly as returned
    Override(String),
    KeepDefault,
}

/// Log in and look up the server's streaming CGI path.
pub async fn lookup_zms_path(
    authenticator: &dyn Authenticator,
    api_url: &str,
    credentials: &Credentials,
    cancel: &CancellationToken,
) -> ZmsOverride {
    let session = match authenticator.login(api_url, credentials, cancel).await {
        Ok(session) => session,
        Err(e) => {
            warn!(api = api_url, error = %e, "Login failed, keeping default CGI path");
            return ZmsOverride::KeepDefault;
        }
    };

    match authenticator
        .config_value(api_url, &session, ZMS_PATH_CONFIG_KEY, cancel)
        .await
    {
        Ok(Some(path)) if !path.is_empty() => {
            debug!(api = api_url, path = %path, "Server reported CGI path");
            ZmsOverride::Override(path)
        }
        Ok(_) => {
            debug!(
                api = api_url,
                key = ZMS_PATH_CONFIG_KEY,
                "No usable config value, keeping default CGI path"
            );
            ZmsOverride::KeepDefault
        }
        Err(e) => {
            warn!(
                api = api_url,
                key = ZMS_PATH_CONFIG_KEY,
                error = %e,
                "Config lookup failed, keeping default CGI path"
            );
            ZmsOverride::KeepDefault
        }
    }
}

/// Turn a server reported CGI path into a URL for the candidate.
///
/// Absolute URLs are used verbatim. Paths are relative to the web server
/// root, so they are joined to the candidate origin rather than the portal.
pub fn cgi_url_for(candidate: &Candidate, reported: &str) -> String {
    let lower = reported.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return reported.to_string();
    }
    format!("{}/{}", candidate.origin(), reported.trim_start_matches('/'))
}
