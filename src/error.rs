//! Error types for the Recurly client.
//!
//! All fallible operations in this crate return [`Result`], whose error type
//! is [`RecurlyError`]. The taxonomy mirrors the phases of a call:
//!
//! - [`RecurlyError::Encoding`]: the request payload could not be serialized
//!   to XML. Raised before any network I/O.
//! - [`RecurlyError::Decoding`]: the response body could not be parsed into
//!   the expected type. Raised after a successful transport exchange.
//! - [`RecurlyError::Api`]: the server answered with a status of 300 or
//!   above. Carries the status code and the raw response body.
//! - [`RecurlyError::Http`]: the underlying HTTP exchange failed (connection
//!   refused, TLS failure, timeout).
//! - [`RecurlyError::Transport`]: the transport was in a state where no
//!   exchange could be attempted, e.g. the client was never opened.
//!
//! None of these are retried by the library. The single recoverable case is
//! the absent-resource convention on
//! [`RecurlyClient::get_optional`](crate::client::RecurlyClient::get_optional),
//! which converts a narrow class of [`Api`](RecurlyError::Api) errors into
//! `Ok(None)`.

use thiserror::Error;

/// Result type alias for Recurly client operations.
pub type Result<T> = std::result::Result<T, RecurlyError>;

/// Errors produced by the Recurly client.
///
/// A fatal error aborts the in-progress call entirely; pagination results
/// already fetched for that call are discarded rather than returned
/// partially.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum RecurlyError {
    /// The request payload could not be serialized to the wire XML format.
    #[error("unable to serialize payload as XML: {0}")]
    Encoding(String),

    /// The response body could not be parsed into the requested type.
    #[error("unable to parse API response: {0}")]
    Decoding(String),

    /// The API answered with a non-success status code.
    ///
    /// `message` is the raw response body text, which Recurly uses to carry
    /// its error description.
    #[error("Recurly error status [{status}]: {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body text.
        message: String,
    },

    /// The HTTP exchange itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The transport could not attempt the exchange at all.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl RecurlyError {
    /// Whether this is an [`Api`](Self::Api) error whose body contains the
    /// given phrase.
    ///
    /// Used for the absent-resource convention: certain lookups report "not
    /// found" only through free-text in the error body.
    pub(crate) fn api_message_contains(&self, phrase: &str) -> bool {
        matches!(self, Self::Api { message, .. } if message.contains(phrase))
    }
}
