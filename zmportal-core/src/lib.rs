//! ZoneMinder server discovery.
//!
//! Turns a loosely typed host string ("zm.example.com", "http://10.0.0.5/",
//! ...) into the three URLs a client needs to talk to a ZoneMinder server:
//! the web portal, the REST API root and the streaming CGI endpoint.
//!
//! # Structure
//! - `application::discovery` - candidate generation, probing, refinement
//! - `infrastructure::http` - collaborator traits and reqwest implementations
//! - `config` - TOML configuration and credential loading
//!
//! # Example
//!
//! ```ignore
//! use zmportal_core::{discover_zoneminder, DiscoveryOptions};
//!
//! let result = discover_zoneminder("zm.example.com", None, &DiscoveryOptions::default()).await?;
//! println!("API at {}", result.api_url);
//! ```

pub mod application;
pub mod config;
pub mod constants;
pub mod infrastructure;

pub use application::discovery::{
    self, Candidate, DiscoveryError, DiscoveryOptions, DiscoveryResolver, DiscoveryResult,
    ErrorCode, Scheme,
};
#[cfg(feature = "reqwest-client")]
pub use application::discovery::discover_zoneminder;
pub use config::{AppConfig, ConfigError, HttpSettings};
pub use infrastructure::http::{
    ApiClient, AuthSession, Authenticator, ClientFactory, Credentials, HttpError, HttpResponse,
    ZmAuthenticator,
};
#[cfg(feature = "reqwest-client")]
pub use infrastructure::http::{ReqwestApiClient, ReqwestClientFactory};
