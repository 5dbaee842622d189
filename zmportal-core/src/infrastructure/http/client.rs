//! Reqwest-backed client factory

use super::traits::{ApiClient, ClientFactory};
use super::types::{HttpError, HttpResponse};
use crate::config::HttpSettings;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

/// Builds [`ReqwestApiClient`]s sharing one connection pool.
#[derive(Clone)]
pub struct ReqwestClientFactory {
    // A failed build is kept so every candidate reports it instead of
    // aborting discovery with an untyped error.
    http: Result<Client, String>,
}

impl ReqwestClientFactory {
    pub fn new(settings: &HttpSettings) -> Self {
        let http = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .user_agent(settings.user_agent.clone())
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| {
                warn!(error = %e, "Failed to initialise HTTP client");
                e.to_string()
            });
        Self { http }
    }
}

impl Default for ReqwestClientFactory {
    fn default() -> Self {
        Self::new(&HttpSettings::default())
    }
}

impl ClientFactory for ReqwestClientFactory {
    fn create(&self, base_url: &str) -> Result<Arc<dyn ApiClient>, HttpError> {
        let http = self
            .http
            .as_ref()
            .map_err(|reason| HttpError::invalid_url(base_url, reason.clone()))?;

        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HttpError::invalid_url(base_url, "unsupported scheme"));
        }

        Ok(Arc::new(ReqwestApiClient {
            base_url: base_url.to_string(),
            http: http.clone(),
        }))
    }
}

/// Client bound to one base URL
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    base_url: String,
    http: Client,
}

impl ReqwestApiClient {
    /// Build URL from base and path
    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError> {
        if cancel.is_cancelled() {
            return Err(HttpError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(HttpError::Cancelled),
            result = exchange(request, url) => result,
        }
    }
}

async fn exchange(request: RequestBuilder, url: &str) -> Result<HttpResponse, HttpError> {
    let response = request
        .send()
        .await
        .map_err(|e| HttpError::transport(url, transport_reason(&e)))?;
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| HttpError::transport(url, transport_reason(&e)))?;
    trace!(url, status, bytes = text.len(), "Received response");

    if (200..300).contains(&status) {
        Ok(HttpResponse::from_text(status, &text))
    } else {
        Err(HttpError::status(status, text))
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url(path);
        self.execute(self.http.get(&url), &url, cancel).await
    }

    async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        cancel: &CancellationToken,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url(path);
        self.execute(self.http.post(&url).form(form), &url, cancel)
            .await
    }
}

fn transport_reason(error: &reqwest::Error) -> String {
    if error.is_connect() {
        format!("connection failed: {error}")
    } else if error.is_timeout() {
        format!("timed out: {error}")
    } else {
        error.to_string()
    }
}
