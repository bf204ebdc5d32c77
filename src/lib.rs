//! Typed async client for the Recurly v2 subscription-billing XML API.
//!
//! The crate implements the request-execution layer a resource facade
//! builds on: authenticated HTTPS calls, XML payload (de)serialization,
//! cursor-based pagination aggregation, per-call credential scoping, and
//! typed error translation. Facade methods themselves (`create_account`,
//! `get_plan`, ...) are one-liners over this surface and are left to the
//! caller.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │  Resource facade   │  one method per domain operation (caller-side)
//! └─────────┬──────────┘
//!           │ path + payload + target type + optional per-call key
//! ┌─────────▼──────────┐     ┌───────────────────┐
//! │  RecurlyClient     │─────│  Payload codec    │  XML ⇄ typed results
//! │  (executor)        │     └───────────────────┘
//! │                    │     ┌───────────────────┐
//! │  auth · paging ────┼─────│  Pagination       │  Link: rel="next"
//! └─────────┬──────────┘     └───────────────────┘
//!           │ HTTPS + Basic auth + application/xml
//! ┌─────────▼──────────┐
//! │  api.recurly.com   │
//! └────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! use recurly_client::auth::ApiKey;
//! use recurly_client::client::RecurlyClient;
//! use recurly_client::model::{Account, Accounts};
//! use recurly_client::payload::XmlPayload;
//!
//! # async fn example() -> recurly_client::Result<()> {
//! let client = RecurlyClient::new(ApiKey::new("my-api-key"));
//! client.open()?;
//!
//! // Create an account.
//! let mut payload = XmlPayload::new("account");
//! payload.put_str("account_code", "acme");
//! payload.put_str("email", "billing@acme.example");
//! let created: Account = client.create(Account::RESOURCE, &payload, None).await?;
//!
//! // List every account, transparently walking the page chain.
//! let all: Option<Accounts> = client.get_list(Account::RESOURCE, None).await?;
//!
//! // Use a different key for one call, e.g. another tenant's subdomain.
//! let tenant_key = ApiKey::new("tenant-key");
//! let tenant: Account = client.get("/accounts/acme", Some(&tenant_key)).await?;
//!
//! client.close();
//! # Ok(())
//! # }
//! ```
//!
//! # Module organization
//!
//! - [`client`]: the HTTP request executor
//! - [`auth`]: API keys and per-call credential resolution
//! - [`payload`] / [`codec`]: ordered request payloads and the XML codec
//! - [`pagination`]: `Link`-header cursors and page merging
//! - [`model`]: typed resource results
//! - [`config`]: endpoint and environment configuration
//! - [`error`]: error taxonomy
//!
//! # Concurrency
//!
//! Open the client once, issue calls from as many tasks as needed, close it
//! at shutdown. Credentials are scoped per call through an explicit
//! parameter, so concurrent calls with different keys never observe each
//! other's credential. There is no request queue, no retry, and no timeout
//! policy beyond the transport default.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod payload;

pub use auth::ApiKey;
pub use client::{BILLING_INFO_NOT_FOUND, FETCH_RESOURCE, REDEMPTION_NOT_FOUND, RecurlyClient};
pub use config::Endpoint;
pub use error::{RecurlyError, Result};
pub use payload::XmlPayload;
