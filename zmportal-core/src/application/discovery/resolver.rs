//! Discovery Resolver
//!
//! Walks the candidates strictly in order, one request at a time, and stops
//! at the first API that answers. Cancellation is checked before the first
//! probe, between candidates, and inside every request.

use super::candidates::{Candidate, candidates};
use super::probe::{ProbeOutcome, probe};
use super::refine::{ZmsOverride, cgi_url_for, lookup_zms_path};
use super::types::{DiscoveryError, DiscoveryOptions, DiscoveryResult};
use crate::infrastructure::http::{Authenticator, ClientFactory, Credentials};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[cfg(feature = "reqwest-client")]
use crate::config::HttpSettings;
#[cfg(feature = "reqwest-client")]
use crate::infrastructure::http::{ReqwestClientFactory, ZmAuthenticator};

/// Resolves a host string to ZoneMinder portal, API and CGI URLs.
///
/// Holds no per-call state; concurrent `discover` calls are independent.
#[derive(Clone)]
pub struct DiscoveryResolver {
    factory: Arc<dyn ClientFactory>,
    authenticator: Arc<dyn Authenticator>,
}

impl DiscoveryResolver {
    pub fn new(factory: Arc<dyn ClientFactory>, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            factory,
            authenticator,
        }
    }

    /// Resolver backed by reqwest and the ZoneMinder login API
    #[cfg(feature = "reqwest-client")]
    pub fn from_settings(settings: &HttpSettings) -> Self {
        let factory: Arc<dyn ClientFactory> = Arc::new(ReqwestClientFactory::new(settings));
        let authenticator = Arc::new(ZmAuthenticator::new(factory.clone()));
        Self::new(factory, authenticator)
    }

    /// Discover the server behind `input`.
    ///
    /// With `credentials`, a successful probe is followed by a login to
    /// read the server's own CGI path; failures there keep the default.
    ///
    /// # Errors
    ///
    /// - [`DiscoveryError::Cancelled`] if `options.cancel` fires at any point
    /// - [`DiscoveryError::ApiNotFound`] if no candidate answers
    pub async fn discover(
        &self,
        input: &str,
        credentials: Option<&Credentials>,
        options: &DiscoveryOptions,
    ) -> Result<DiscoveryResult, DiscoveryError> {
        let cancel = options.cancel.clone().unwrap_or_default();
        if cancel.is_cancelled() {
            info!(input, "Discovery cancelled before start");
            return Err(DiscoveryError::Cancelled);
        }

        let candidates = candidates(input);
        info!(
            input,
            candidates = candidates.len(),
            refine = credentials.is_some(),
            "Starting server discovery"
        );

        let Some(candidate) = self.first_reachable(&candidates, &cancel).await? else {
            warn!(input, attempts = candidates.len(), "No ZoneMinder API found");
            return Err(DiscoveryError::api_not_found(input, candidates.len()));
        };

        let mut result = DiscoveryResult {
            portal_url: candidate.portal_url(),
            api_url: candidate.api_url(),
            cgi_url: candidate.default_cgi_url(),
        };

        if let Some(credentials) = credentials {
            let lookup = lookup_zms_path(
                self.authenticator.as_ref(),
                &result.api_url,
                credentials,
                &cancel,
            )
            .await;
            if cancel.is_cancelled() {
                info!(input, "Discovery cancelled during refinement");
                return Err(DiscoveryError::Cancelled);
            }
            if let ZmsOverride::Override(path) = lookup {
                result.cgi_url = cgi_url_for(candidate, &path);
            }
        }

        info!(
            portal = %result.portal_url,
            api = %result.api_url,
            cgi = %result.cgi_url,
            "Server discovery complete"
        );
        Ok(result)
    }

    async fn first_reachable<'a>(
        &self,
        candidates: &'a [Candidate],
        cancel: &CancellationToken,
    ) -> Result<Option<&'a Candidate>, DiscoveryError> {
        for (index, candidate) in candidates.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(DiscoveryError::Cancelled);
            }

            let api_url = candidate.api_url();
            debug!(attempt = index + 1, candidate = %api_url, "Probing candidate");

            let client = match self.factory.create(&api_url) {
                Ok(client) => client,
                Err(e) => {
                    debug!(candidate = %api_url, error = %e, "Cannot build client, skipping");
                    continue;
                }
            };

            match probe(client.as_ref(), cancel).await {
                ProbeOutcome::Found(route) => {
                    info!(portal = %candidate, ?route, "ZoneMinder API found");
                    return Ok(Some(candidate));
                }
                ProbeOutcome::Failed(e) => {
                    debug!(candidate = %api_url, error = %e, "Candidate rejected");
                }
                ProbeOutcome::Cancelled => {
                    info!(candidate = %api_url, "Discovery cancelled during probe");
                    return Err(DiscoveryError::Cancelled);
                }
            }
        }
        Ok(None)
    }
}

/// Discover a ZoneMinder server with the default reqwest stack.
#[cfg(feature = "reqwest-client")]
pub async fn discover_zoneminder(
    input: &str,
    credentials: Option<&Credentials>,
    options: &DiscoveryOptions,
) -> Result<DiscoveryResult, DiscoveryError> {
    DiscoveryResolver::from_settings(&HttpSettings::default())
        .discover(input, credentials, options)
        .await
}
