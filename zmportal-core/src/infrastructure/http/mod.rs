//! HTTP collaborators for discovery
//!
//! The resolver never talks to the network directly. It asks a
//! [`ClientFactory`] for an [`ApiClient`] bound to a candidate base URL and
//! delegates login and configuration lookups to an [`Authenticator`].
//!
//! # Structure
//! - `types` - Response, error and credential types
//! - `traits` - ApiClient, ClientFactory, Authenticator traits
//! - `client` - reqwest-backed client factory
//! - `auth` - ZoneMinder login and config lookup

pub mod auth;
#[cfg(feature = "reqwest-client")]
pub mod client;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use auth::ZmAuthenticator;
#[cfg(feature = "reqwest-client")]
pub use client::{ReqwestApiClient, ReqwestClientFactory};
pub use traits::{ApiClient, Authenticator, ClientFactory};
pub use types::{AuthSession, Credentials, HttpError, HttpResponse};
