//! Candidate probing
//!
//! A candidate is accepted when its API answers the version endpoint with
//! 2xx or 401 (the API exists but wants a login). Any other failure gets
//! a second chance against the login endpoint.

use crate::constants::{LOGIN_PATH, VERSION_PATH};
use crate::infrastructure::http::{ApiClient, HttpError, HttpResponse};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Which endpoint proved the API exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeRoute {
    Version,
    AuthRequired,
    Login,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(ProbeRoute),
    Failed(HttpError),
    Cancelled,
}

/// Probe one API base, version endpoint first, login endpoint second.
pub async fn probe(client: &dyn ApiClient, cancel: &CancellationToken) -> ProbeOutcome {
    let primary = match client.get(VERSION_PATH, cancel).await {
        Ok(response) => {
            log_version(client.base_url(), &response);
            return ProbeOutcome::Found(ProbeRoute::Version);
        }
        Err(HttpError::Status { status: 401, .. }) => {
            debug!(api = client.base_url(), "Version endpoint requires authentication");
            return ProbeOutcome::Found(ProbeRoute::AuthRequired);
        }
        Err(HttpError::Cancelled) => return ProbeOutcome::Cancelled,
        Err(e) => e,
    };

    debug!(
        api = client.base_url(),
        error = %primary,
        "Version probe failed, trying login endpoint"
    );

    match client.post_form(LOGIN_PATH, &[], cancel).await {
        Ok(_) => ProbeOutcome::Found(ProbeRoute::Login),
        Err(HttpError::Cancelled) => ProbeOutcome::Cancelled,
        Err(e) => {
            debug!(api = client.base_url(), error = %e, "Login probe failed");
            ProbeOutcome::Failed(e)
        }
    }
}

fn log_version(api: &str, response: &HttpResponse) {
    if let Some(version) = response.str_field("version") {
        debug!(
            api,
            version,
            api_version = response.str_field("apiversion").unwrap_or("unknown"),
            "ZoneMinder version reported"
        );
    }
}
