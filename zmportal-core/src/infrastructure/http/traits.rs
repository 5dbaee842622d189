//! Collaborator traits

use super::types::{AuthSession, Credentials, HttpError, HttpResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// A client bound to a single base URL.
///
/// Paths are relative to the base URL. Responses outside the 2xx range
/// reject with [`HttpError::Status`]; a request that observes `cancel`
/// rejects with [`HttpError::Cancelled`].
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Base URL this client is bound to
    fn base_url(&self) -> &str;

    /// Issue a GET request
    async fn get(&self, path: &str, cancel: &CancellationToken)
    -> Result<HttpResponse, HttpError>;

    /// Issue a POST request with a URL-encoded form body
    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError>;
}

/// Builds clients bound to candidate base URLs
pub trait ClientFactory: Send + Sync {
    fn create(&self, base_url: &str) -> Result<Arc<dyn ApiClient>, HttpError>;
}

/// Login and server configuration lookups
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in against an API root and return the session to use for
    /// subsequent requests
    async fn login(
        &self,
        api_url: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<AuthSession, HttpError>;

    /// Fetch a single named configuration value from the server
    async fn config_value(
        &self,
        api_url: &str,
        session: &AuthSession,
        key: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, HttpError>;
}
