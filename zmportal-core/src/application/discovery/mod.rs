//! ZoneMinder Server Discovery Module
//!
//! Infers a server's portal, API and streaming URLs from whatever the user
//! typed into an "add server" form.
//!
//! # Architecture
//!
//! - **Candidates** (`candidates.rs`): scheme and prefix combinations in probe order
//! - **Probe** (`probe.rs`): version endpoint with login endpoint fallback
//! - **Refine** (`refine.rs`): optional authenticated CGI path lookup
//! - **Resolver** (`resolver.rs`): the sequential probe loop
//! - **Types** (`types.rs`): result, options and error types
//!
//! # Probe order
//!
//! For `zm.example.com` the candidates are tried as:
//!
//! ```text
//! https://zm.example.com/zm/api
//! https://zm.example.com/api
//! http://zm.example.com/zm/api
//! http://zm.example.com/api
//! ```
//!
//! An explicit scheme (`http://zm.example.com`) drops the other scheme.
//!
//! # Usage
//!
//! ```ignore
//! use zmportal_core::discovery::{DiscoveryOptions, DiscoveryResolver};
//! use tokio_util::sync::CancellationToken;
//!
//! let resolver = DiscoveryResolver::from_settings(&HttpSettings::default());
//! let cancel = CancellationToken::new();
//! let result = resolver
//!     .discover("zm.example.com", Some(&credentials), &DiscoveryOptions::with_cancel(cancel))
//!     .await?;
//! ```

pub mod candidates;
pub mod probe;
pub mod refine;
pub mod resolver;
pub mod types;

// Re-export commonly used items
pub use candidates::{Candidate, Scheme, candidates, parse_input};
pub use probe::{ProbeOutcome, ProbeRoute};
pub use refine::ZmsOverride;
#[cfg(feature = "reqwest-client")]
pub use resolver::discover_zoneminder;
pub use resolver::DiscoveryResolver;
pub use types::{DiscoveryError, DiscoveryOptions, DiscoveryResult, ErrorCode};
