//! API key handling and per-call credential resolution.
//!
//! Recurly authenticates with HTTP Basic auth where the private API key is
//! the whole token. Two credential scopes coexist: a library-wide default
//! key supplied when the client is constructed, and an optional call-scoped
//! key passed explicitly to each executor method. The call-scoped key, when
//! present, wins for exactly that call — there is no hidden override slot,
//! so concurrent calls from independent tasks can never observe each
//! other's credentials.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// A Recurly private API key.
///
/// The secret is encoded into its Basic-auth form eagerly at construction
/// and the clear text is kept only to compare keys in tests. `Debug` output
/// is redacted; the key never appears in logs.
///
/// # Examples
///
/// ```
/// use recurly_client::auth::ApiKey;
///
/// let key = ApiKey::new("my-secret-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(***)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    token: String,
}

impl ApiKey {
    /// Creates a key from the raw secret string.
    pub fn new<S: AsRef<str>>(secret: S) -> Self {
        Self { token: BASE64.encode(secret.as_ref().as_bytes()) }
    }

    /// Returns the value for the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Basic {}", self.token)
    }

    /// Returns the base64 token without the `Basic ` prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Resolves which key applies to the call in progress.
///
/// Holds the library-wide default; [`resolve`](Self::resolve) prefers the
/// explicit call-scoped override when one is given.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    default: ApiKey,
}

impl CredentialResolver {
    /// Creates a resolver around the library-wide default key.
    #[must_use]
    pub fn new(default: ApiKey) -> Self {
        Self { default }
    }

    /// Returns the call-scoped key if present, otherwise the default.
    #[must_use]
    pub fn resolve<'a>(&'a self, call_key: Option<&'a ApiKey>) -> &'a ApiKey {
        call_key.unwrap_or(&self.default)
    }
}
