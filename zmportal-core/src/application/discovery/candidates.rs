//! Candidate generation
//!
//! Expands a user supplied host string into the ordered list of
//! (scheme, prefix) combinations discovery probes. HTTPS is tried before
//! HTTP unless the input names a scheme, and the `/zm` prefix is tried
//! before the bare host within each scheme.

use crate::constants::{API_PATH, DEFAULT_CGI_PATH, ZM_PREFIX};
use std::fmt;

/// Prefixes in probe order
static PREFIXES: [&str; 2] = [ZM_PREFIX, ""];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Https,
    Http,
}

impl Scheme {
    /// Schemes tried when the input carries none, in priority order
    pub const FALLBACK_ORDER: [Scheme; 2] = [Scheme::Https, Scheme::Http];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Https => "https",
            Scheme::Http => "http",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "https" => Some(Scheme::Https),
            "http" => Some(Scheme::Http),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input split into the schemes to try and the host portion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub schemes: Vec<Scheme>,
    /// Host with any path the user typed, no leading or trailing slashes
    pub host: String,
}

/// Normalize a host string.
///
/// An explicit scheme restricts discovery to that scheme; an unsupported
/// one leaves no schemes to try.
pub fn parse_input(input: &str) -> ParsedInput {
    let input = input.trim();

    let (schemes, rest) = match input.split_once("://") {
        Some((scheme, rest)) => (Scheme::parse(scheme).into_iter().collect(), rest),
        None => (Scheme::FALLBACK_ORDER.to_vec(), input),
    };

    ParsedInput {
        schemes,
        host: rest.trim_matches('/').to_string(),
    }
}

/// One probe attempt: a scheme and path prefix applied to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub scheme: Scheme,
    pub host: String,
    pub prefix: &'static str,
}

impl Candidate {
    /// Root of the web UI, e.g. `https://zm.example.com/zm`
    pub fn portal_url(&self) -> String {
        format!("{}://{}{}", self.scheme, self.host, self.prefix)
    }

    pub fn api_url(&self) -> String {
        format!("{}{}", self.portal_url(), API_PATH)
    }

    /// Default streaming endpoint, used until the server reports its own
    pub fn default_cgi_url(&self) -> String {
        format!("{}{}", self.portal_url(), DEFAULT_CGI_PATH)
    }

    /// Scheme and authority only, without any path
    pub fn origin(&self) -> String {
        let authority = self
            .host
            .split_once('/')
            .map_or(self.host.as_str(), |(authority, _)| authority);
        format!("{}://{}", self.scheme, authority)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.portal_url())
    }
}

/// Build the candidates for an input in probe order: schemes outer,
/// prefixes inner.
pub fn candidates(input: &str) -> Vec<Candidate> {
    let parsed = parse_input(input);
    if parsed.host.is_empty() {
        return Vec::new();
    }

    parsed
        .schemes
        .iter()
        .flat_map(|&scheme| {
            let host = parsed.host.clone();
            PREFIXES.iter().map(move |&prefix| Candidate {
                scheme,
                host: host.clone(),
                prefix,
            })
        })
        .collect()
}
