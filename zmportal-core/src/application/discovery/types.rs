//! Discovery Types
//!
//! Result, error and option types shared by the discovery resolver.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Resolved endpoints of a ZoneMinder server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResult {
    /// Root of the web UI, no trailing slash
    pub portal_url: String,
    /// REST API root, always `portal_url` + `/api`
    pub api_url: String,
    /// Streaming CGI endpoint
    pub cgi_url: String,
}

/// Options for a single discovery call.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Aborts the call; checked before the first probe and wired into
    /// every request
    pub cancel: Option<CancellationToken>,
}

impl DiscoveryOptions {
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }
}

/// Machine-readable discovery failure code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Cancelled,
    ApiNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Cancelled => "CANCELLED",
            ErrorCode::ApiNotFound => "API_NOT_FOUND",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by discovery.
///
/// Transport and HTTP failures during probing never surface here; they
/// only ever mean "try the next candidate".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("discovery was cancelled")]
    Cancelled,
    #[error("no ZoneMinder API found for '{input}' after {attempts} candidates")]
    ApiNotFound { input: String, attempts: usize },
}

impl DiscoveryError {
    pub fn api_not_found(input: impl Into<String>, attempts: usize) -> Self {
        Self::ApiNotFound {
            input: input.into(),
            attempts,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DiscoveryError::Cancelled => ErrorCode::Cancelled,
            DiscoveryError::ApiNotFound { .. } => ErrorCode::ApiNotFound,
        }
    }

    /// Short message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            DiscoveryError::Cancelled => "Server discovery was cancelled.".to_string(),
            DiscoveryError::ApiNotFound { input, .. } => format!(
                "Could not find a ZoneMinder server at '{input}'. Check the address and that the API is enabled."
            ),
        }
    }
}
