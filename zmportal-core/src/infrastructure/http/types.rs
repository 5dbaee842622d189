//! HTTP types - Response, Error and credential types

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Response from a successful (2xx) request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Parsed JSON body; `None` when the body is empty or not JSON
    pub body: Option<Value>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }

    /// Parse a raw body loosely, ignoring anything that is not JSON
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = if text.trim().is_empty() {
            None
        } else {
            serde_json::from_str(text).ok()
        };
        Self { status, body }
    }

    /// Read a string field from the top level of the body
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.body.as_ref()?.get(key)?.as_str()
    }
}

/// HTTP collaborator errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("server returned HTTP {status}")]
    Status { status: u16, body: String },
    #[error("request to '{url}' failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("cannot build client for '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request cancelled")]
    Cancelled,
}

impl HttpError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// HTTP status, when a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, HttpError::Cancelled)
    }
}

/// Login credentials supplied by the caller
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Session obtained from a successful login
#[derive(Clone, PartialEq, Eq)]
pub enum AuthSession {
    /// Token authentication (`access_token`)
    Token(String),
    /// Legacy hash authentication; holds the server supplied query string,
    /// e.g. `auth=0123abcd`
    Legacy(String),
}

impl AuthSession {
    /// Render the session as a URL query fragment
    pub fn query(&self) -> String {
        match self {
            AuthSession::Token(token) => format!("token={token}"),
            AuthSession::Legacy(credentials) => credentials.clone(),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthSession::Token(_) => f.write_str("AuthSession::Token(***)"),
            AuthSession::Legacy(_) => f.write_str("AuthSession::Legacy(***)"),
        }
    }
}
