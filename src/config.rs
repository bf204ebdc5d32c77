//! Endpoint and environment configuration.
//!
//! The endpoint (scheme, host, port, API version prefix) is fixed when the
//! client is constructed. Two runtime knobs are read from the process
//! environment on every call rather than cached, so behavior can be changed
//! live without restarting the host service:
//!
//! - [`DEBUG_ENV`] — truthy values enable logging of request and response
//!   bodies.
//! - [`PAGE_SIZE_ENV`] — overrides the `per_page` hint appended to
//!   first-page list requests. Unparseable values fall back to the default.

use serde::Deserialize;

/// Environment variable enabling wire-traffic debug output.
pub const DEBUG_ENV: &str = "RECURLY_DEBUG";

/// Environment variable overriding the page-size hint.
pub const PAGE_SIZE_ENV: &str = "RECURLY_PAGE_SIZE";

/// Page size requested when the environment does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 200;

const PER_PAGE: &str = "per_page=";

/// API endpoint configuration.
///
/// Produces the base URL `https://{host}:{port}/{version}` every request is
/// built on. The defaults target the production v2 API.
///
/// # Examples
///
/// ```
/// use recurly_client::config::Endpoint;
///
/// assert_eq!(Endpoint::default().base_url(), "https://api.recurly.com:443/v2");
///
/// let staging = Endpoint::new("api.staging.example.com", 8443, "v2");
/// assert_eq!(staging.base_url(), "https://api.staging.example.com:8443/v2");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// API host name.
    #[serde(default = "default_host")]
    pub host: String,

    /// API port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// API version prefix, without slashes.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), version: default_version() }
    }
}

impl Endpoint {
    /// Creates an endpoint for a non-default host, port, or version.
    pub fn new<H: Into<String>, V: Into<String>>(host: H, port: u16, version: V) -> Self {
        Self { host: host.into(), port, version: version.into() }
    }

    /// Returns the base URL all resource paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}:{}/{}", self.host, self.port, self.version)
    }
}

fn default_host() -> String {
    "api.recurly.com".to_owned()
}

fn default_port() -> u16 {
    443
}

fn default_version() -> String {
    "v2".to_owned()
}

/// Whether wire-traffic debug output is enabled right now.
///
/// Reads [`DEBUG_ENV`] on every call.
#[must_use]
pub fn debug_enabled() -> bool {
    parse_debug(std::env::var(DEBUG_ENV).ok().as_deref())
}

/// The page size to request on first-page list GETs.
///
/// Reads [`PAGE_SIZE_ENV`] on every call; unset or unparseable values fall
/// back to [`DEFAULT_PAGE_SIZE`].
#[must_use]
pub fn page_size() -> u32 {
    parse_page_size(std::env::var(PAGE_SIZE_ENV).ok().as_deref())
}

/// The `per_page=N` query fragment for first-page list GETs.
#[must_use]
pub fn page_size_param() -> String {
    format!("{PER_PAGE}{}", page_size())
}

fn parse_debug(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}

fn parse_page_size(value: Option<&str>) -> u32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PAGE_SIZE)
}
