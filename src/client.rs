//! HTTP request executor.
//!
//! [`RecurlyClient`] owns the endpoint configuration, the default
//! credential, and the shared transport. Each operation maps onto one
//! authenticated HTTPS exchange (plus follow-up page fetches for list
//! GETs):
//!
//! - [`get`](RecurlyClient::get) — singular GET, first page only
//! - [`get_list`](RecurlyClient::get_list) — GET walking the full page
//!   chain and merging the collections
//! - [`get_optional`](RecurlyClient::get_optional) — singular GET with the
//!   absent-resource conversion
//! - [`create`](RecurlyClient::create) / [`update`](RecurlyClient::update)
//!   — POST/PUT of an encoded payload, one response page decoded
//! - [`delete`](RecurlyClient::delete) — DELETE, optional query
//!   parameters, no response body
//!
//! The transport is opened once before first use and closed at shutdown;
//! exchanges in between run fully in parallel. Every operation takes an
//! optional call-scoped [`ApiKey`] that overrides the default for exactly
//! that call, so concurrent callers with different keys cannot interfere.

use std::sync::{Mutex, MutexGuard};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::auth::{ApiKey, CredentialResolver};
use crate::codec;
use crate::config::{self, Endpoint};
use crate::error::{RecurlyError, Result};
use crate::pagination::{self, PAGINATION_HEADER, Page, ResourceList, merge_pages};
use crate::payload::XmlPayload;

/// Error-body phrase reported when an account has no stored billing info.
///
/// The API signals this case only through free text in a 404 body, so
/// [`RecurlyClient::get_optional`] matches on this substring. The coupling
/// to the server's wording is deliberate and fragile; the v2 API exposes no
/// machine-readable code for it.
pub const BILLING_INFO_NOT_FOUND: &str = "Couldn't find BillingInfo with account_code";

/// Error-body phrase reported when an account has no active redemption.
///
/// Same caveat as [`BILLING_INFO_NOT_FOUND`].
pub const REDEMPTION_NOT_FOUND: &str = "Couldn't find Redemption for Account";

/// Resource path answering recurly.js result tokens.
pub const FETCH_RESOURCE: &str = "/recurly_js/result";

const ACCEPT_XML: &str = "application/xml";
const CONTENT_TYPE_XML: &str = "application/xml; charset=utf-8";

/// Everything outside RFC 3986 unreserved gets percent-encoded.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encodes one untrusted path segment.
///
/// Account codes, plan codes, and UUIDs are caller-supplied and may contain
/// reserved URL characters; they must pass through here before being
/// concatenated into a resource path. Fixed literal segments
/// (`/accounts/`, ...) are never encoded.
///
/// # Examples
///
/// ```
/// use recurly_client::client::path_segment;
///
/// assert_eq!(path_segment("acme-corp"), "acme-corp");
/// assert_eq!(path_segment("AB/12 34"), "AB%2F12%2034");
/// ```
#[must_use]
pub fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT).to_string()
}

/// Executor for authenticated calls against the Recurly v2 API.
///
/// # Examples
///
/// ```no_run
/// use recurly_client::auth::ApiKey;
/// use recurly_client::client::RecurlyClient;
/// use recurly_client::model::Account;
///
/// # async fn example() -> recurly_client::Result<()> {
/// let client = RecurlyClient::new(ApiKey::new("my-api-key"));
/// client.open()?;
///
/// let account: Account = client.get("/accounts/acme", None).await?;
/// println!("state: {:?}", account.state);
///
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RecurlyClient {
    base_url: String,
    credentials: CredentialResolver,
    transport: Mutex<Option<Client>>,
}

impl RecurlyClient {
    /// Creates a client for the default production endpoint.
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_endpoint(api_key, Endpoint::default())
    }

    /// Creates a client for a non-default endpoint.
    #[must_use]
    pub fn with_endpoint(api_key: ApiKey, endpoint: Endpoint) -> Self {
        Self::with_base_url(api_key, endpoint.base_url())
    }

    /// Creates a client for an arbitrary base URL.
    ///
    /// For nonstandard deployments and tests against a local mock server;
    /// production use goes through [`with_endpoint`](Self::with_endpoint).
    #[must_use]
    pub fn with_base_url<S: Into<String>>(api_key: ApiKey, base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: CredentialResolver::new(api_key),
            transport: Mutex::new(None),
        }
    }

    /// Opens the underlying HTTP transport.
    ///
    /// Must be called before the first request. Safe to call again: the
    /// pooled client is replaced. Open/close transitions are serialized;
    /// exchanges already in flight keep their handle to the old pool.
    ///
    /// # Errors
    ///
    /// Returns [`RecurlyError::Http`] if the transport cannot be built.
    pub fn open(&self) -> Result<()> {
        // Redirects are never followed: any status >= 300 must surface as
        // an API error, not a transparently replayed request.
        let client = Client::builder().redirect(reqwest::redirect::Policy::none()).build()?;
        *lock(&self.transport) = Some(client);
        Ok(())
    }

    /// Closes the underlying HTTP transport. Idempotent.
    pub fn close(&self) {
        *lock(&self.transport) = None;
    }

    /// Whether the transport is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        lock(&self.transport).is_some()
    }

    /// Base URL requests are built on.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a single resource.
    ///
    /// Takes the first page only. If the response advertises a next page —
    /// more than one page-worth of results for a singular request — a
    /// warning is logged and the extra pages are ignored.
    ///
    /// # Errors
    ///
    /// [`RecurlyError::Api`] for status ≥ 300, [`RecurlyError::Decoding`]
    /// if the body does not match `T`, transport errors otherwise.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, key: Option<&ApiKey>) -> Result<T> {
        let url = self.build_get_url(path);
        let page = self.execute(Method::GET, &url, key, None, &[]).await?;
        if page.next.is_some() {
            warn!("received multiple result pages when only one was expected");
        }
        codec::decode(&page.body)
    }

    /// Fetches a list resource across its whole page chain.
    ///
    /// The page-size hint is appended to the first request only; follow-up
    /// requests use the server-supplied next-page URL verbatim. Pages are
    /// fetched sequentially and decoded independently, then merged in
    /// arrival order. Any failure mid-chain fails the whole call and
    /// discards pages already fetched.
    ///
    /// Zero pages yield `Ok(None)` rather than an empty collection
    /// (preserved from the original client's contract).
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), for any page of the chain.
    pub async fn get_list<L>(&self, path: &str, key: Option<&ApiKey>) -> Result<Option<L>>
    where
        L: DeserializeOwned + ResourceList,
    {
        let mut collections = Vec::new();
        let mut next_url = Some(self.build_get_url(path));
        while let Some(url) = next_url {
            let page = self.execute(Method::GET, &url, key, None, &[]).await?;
            next_url = page.next;
            collections.push(codec::decode(&page.body)?);
        }
        Ok(merge_pages(collections))
    }

    /// Fetches a resource that is documented to answer "not found" for
    /// absent state, converting that case to `Ok(None)`.
    ///
    /// The conversion applies only when the API error body contains
    /// `absent_phrase` (see [`BILLING_INFO_NOT_FOUND`] and
    /// [`REDEMPTION_NOT_FOUND`]); every other error propagates.
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get), minus the matched absent case.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        key: Option<&ApiKey>,
        absent_phrase: &str,
    ) -> Result<Option<T>> {
        match self.get(path, key).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.api_message_contains(absent_phrase) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Resolves a recurly.js result token into the resource it produced
    /// (a subscription, billing info, or invoice).
    ///
    /// # Errors
    ///
    /// As [`get`](Self::get).
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        token: &str,
        key: Option<&ApiKey>,
    ) -> Result<T> {
        let path = format!("{FETCH_RESOURCE}/{}", path_segment(token));
        self.get(&path, key).await
    }

    /// Creates a resource: POSTs the payload and decodes one response page.
    ///
    /// # Errors
    ///
    /// [`RecurlyError::Encoding`] if the payload cannot be serialized
    /// (raised before any network I/O); otherwise as [`get`](Self::get).
    pub async fn create<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &XmlPayload,
        key: Option<&ApiKey>,
    ) -> Result<T> {
        self.send_payload(Method::POST, path, payload, key).await
    }

    /// Updates a resource: PUTs the payload and decodes one response page.
    ///
    /// # Errors
    ///
    /// As [`create`](Self::create).
    pub async fn update<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: &XmlPayload,
        key: Option<&ApiKey>,
    ) -> Result<T> {
        self.send_payload(Method::PUT, path, payload, key).await
    }

    /// Deletes a resource.
    ///
    /// Sends no body and expects none back. `query` carries operation
    /// parameters such as a partial-refund `amount_in_cents`.
    ///
    /// # Errors
    ///
    /// [`RecurlyError::Api`] for status ≥ 300, transport errors otherwise.
    pub async fn delete(
        &self,
        path: &str,
        key: Option<&ApiKey>,
        query: &[(&str, &str)],
    ) -> Result<()> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(Method::DELETE, &url, key, None, query).await?;
        Ok(())
    }

    async fn send_payload<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: &XmlPayload,
        key: Option<&ApiKey>,
    ) -> Result<T> {
        let body = codec::encode(payload)?;
        let url = format!("{}{}", self.base_url, path);
        if config::debug_enabled() {
            debug!(%url, %body, "payload for request");
        }
        let page = self.execute(method, &url, key, Some(body), &[]).await?;
        codec::decode(&page.body)
    }

    /// One authenticated exchange: send, classify the status, capture the
    /// body and the next-page link.
    #[instrument(skip(self, key, body, query), fields(method = %method, url = %url))]
    async fn execute(
        &self,
        method: Method,
        url: &str,
        key: Option<&ApiKey>,
        body: Option<String>,
        query: &[(&str, &str)],
    ) -> Result<Page> {
        let client = self.handle()?;
        let credential = self.credentials.resolve(key);
        if config::debug_enabled() {
            debug!("msg to Recurly API");
        }

        let mut request = client
            .request(method, url)
            .header(AUTHORIZATION, credential.authorization())
            .header(ACCEPT, ACCEPT_XML)
            .header(CONTENT_TYPE, CONTENT_TYPE_XML);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let next = response
            .headers()
            .get(PAGINATION_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(pagination::next_link);
        let text = response.text().await?;

        if status >= 300 {
            debug!(status, "Recurly error while calling");
            return Err(RecurlyError::Api { status, message: text });
        }
        if config::debug_enabled() {
            debug!(body = %text, "msg from Recurly API");
        }
        Ok(Page { body: text, next })
    }

    fn handle(&self) -> Result<Client> {
        lock(&self.transport)
            .clone()
            .ok_or_else(|| RecurlyError::Transport("client is not open".into()))
    }

    fn build_get_url(&self, path: &str) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        url.push(if path.contains('?') { '&' } else { '?' });
        url.push_str(&config::page_size_param());
        url
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PAGE_SIZE;

    fn test_client() -> RecurlyClient {
        RecurlyClient::with_endpoint(ApiKey::new("k"), Endpoint::new("api.example.com", 443, "v2"))
    }

    #[test]
    fn path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("AB/12 34"), "AB%2F12%2034");
        assert_eq!(path_segment("a?b&c=d"), "a%3Fb%26c%3Dd");
        assert_eq!(path_segment("100%"), "100%25");
    }

    #[test]
    fn path_segment_leaves_unreserved_characters() {
        assert_eq!(path_segment("acme-corp_1.x~y"), "acme-corp_1.x~y");
    }

    #[test]
    fn get_url_appends_page_size_hint() {
        let client = test_client();
        assert_eq!(
            client.build_get_url("/accounts"),
            format!("https://api.example.com:443/v2/accounts?per_page={DEFAULT_PAGE_SIZE}"),
        );
    }

    #[test]
    fn get_url_respects_existing_query() {
        let client = test_client();
        assert_eq!(
            client.build_get_url("/accounts/acme/subscriptions?state=past_due"),
            format!(
                "https://api.example.com:443/v2/accounts/acme/subscriptions\
                 ?state=past_due&per_page={DEFAULT_PAGE_SIZE}"
            ),
        );
    }

    #[test]
    fn literal_segments_stay_unescaped() {
        let client = test_client();
        let url = client.build_get_url(&format!("/accounts/{}", path_segment("AB/12 34")));
        assert!(url.contains("/accounts/AB%2F12%2034"));
        assert!(url.contains("/v2/accounts/"));
    }

    #[test]
    fn client_starts_closed() {
        let client = test_client();
        assert!(!client.is_open());
        let err = client.handle().unwrap_err();
        assert!(matches!(err, RecurlyError::Transport(_)));
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let client = test_client();
        client.open().unwrap();
        client.open().unwrap();
        assert!(client.is_open());
        client.close();
        client.close();
        assert!(!client.is_open());
    }

    mod properties {
        use percent_encoding::percent_decode_str;
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn encoded_segment_decodes_back(raw in "\\PC{0,40}") {
                let encoded = path_segment(&raw);
                let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
                prop_assert_eq!(decoded.as_ref(), raw.as_str());
            }

            #[test]
            fn encoded_segment_has_no_reserved_characters(raw in "\\PC{0,40}") {
                let encoded = path_segment(&raw);
                prop_assert!(!encoded.contains('/'));
                prop_assert!(!encoded.contains('?'));
                prop_assert!(!encoded.contains('#'));
                prop_assert!(!encoded.contains(' '));
            }
        }
    }
}
