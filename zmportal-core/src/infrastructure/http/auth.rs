//! ZoneMinder login and configuration lookups

use super::traits::{Authenticator, ClientFactory};
use super::types::{AuthSession, Credentials, HttpError, HttpResponse};
use crate::constants::LOGIN_PATH;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// [`Authenticator`] speaking the ZoneMinder REST API.
///
/// Login posts the credentials to `host/login.json`; configuration values
/// are read from `configs/viewByName/<KEY>.json`.
#[derive(Clone)]
pub struct ZmAuthenticator {
    factory: Arc<dyn ClientFactory>,
}

impl ZmAuthenticator {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

#[async_trait]
impl Authenticator for ZmAuthenticator {
    async fn login(
        &self,
        api_url: &str,
        credentials: &Credentials,
        cancel: &CancellationToken,
    ) -> Result<AuthSession, HttpError> {
        let client = self.factory.create(api_url)?;
        debug!(api = api_url, user = %credentials.username, "Logging in");

        let form = [
            ("user", credentials.username.as_str()),
            ("pass", credentials.password.as_str()),
        ];
        let response = client.post_form(LOGIN_PATH, &form, cancel).await?;
        session_from_login(&response)
    }

    async fn config_value(
        &self,
        api_url: &str,
        session: &AuthSession,
        key: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<String>, HttpError> {
        let client = self.factory.create(api_url)?;
        let path = format!("/configs/viewByName/{key}.json?{}", session.query());
        let response = client.get(&path, cancel).await?;

        let value = response
            .body
            .as_ref()
            .and_then(|body| body.get("config"))
            .and_then(|config| config.get("Value"))
            .and_then(|value| value.as_str())
            .map(str::to_string);
        debug!(key, found = value.is_some(), "Config lookup finished");
        Ok(value)
    }
}

/// Extract the session from a login response.
///
/// Token auth servers return `access_token`; servers running legacy hash
/// auth only return a `credentials` query string.
fn session_from_login(response: &HttpResponse) -> Result<AuthSession, HttpError> {
    if let Some(token) = response.str_field("access_token").filter(|t| !t.is_empty()) {
        return Ok(AuthSession::Token(token.to_string()));
    }
    if let Some(credentials) = response.str_field("credentials").filter(|c| !c.is_empty()) {
        return Ok(AuthSession::Legacy(credentials.to_string()));
    }
    Err(HttpError::status(
        response.status,
        "login response carried neither access_token nor credentials",
    ))
}
