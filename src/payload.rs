//! Request payload representation.
//!
//! Create and update calls send an XML document whose outer element names
//! the resource being written (`<account>`, `<subscription>`, ...). The
//! payload is an insertion-ordered list of named values so the emitted
//! document keeps the order the caller built it in.

use chrono::{DateTime, Utc};

/// A value that can appear in a request payload.
///
/// Wire conventions are fixed: integers are embedded as decimal text,
/// timestamps as ISO-8601 with a `Z` suffix, booleans as `true`/`false`.
/// Monetary amounts are integer minor-unit counts (cents) and therefore use
/// [`Value::Int`] — floating point never reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text content.
    Str(String),
    /// Decimal integer content. Also used for amounts in cents.
    Int(i64),
    /// `true` / `false` content.
    Bool(bool),
    /// ISO-8601 timestamp content.
    Timestamp(DateTime<Utc>),
    /// A nested element with children of its own.
    Nested(XmlPayload),
}

/// An ordered request payload tagged with its root element name.
///
/// The root name becomes the outer XML tag exactly as given; no generic
/// wrapper name ever appears in the transmitted document.
///
/// # Examples
///
/// ```
/// use recurly_client::payload::XmlPayload;
///
/// let mut account = XmlPayload::new("account");
/// account.put_str("account_code", "acme-corp");
/// account.put_str("email", "billing@acme.example");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct XmlPayload {
    root: String,
    entries: Vec<(String, Value)>,
}

impl XmlPayload {
    /// Creates an empty payload whose outer element is `root`.
    pub fn new<S: Into<String>>(root: S) -> Self {
        Self { root: root.into(), entries: Vec::new() }
    }

    /// The root element name.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Appends a raw value.
    pub fn put<S: Into<String>>(&mut self, name: S, value: Value) -> &mut Self {
        self.entries.push((name.into(), value));
        self
    }

    /// Appends a text value.
    pub fn put_str<S: Into<String>, V: Into<String>>(&mut self, name: S, value: V) -> &mut Self {
        self.put(name, Value::Str(value.into()))
    }

    /// Appends an integer value. Use this for amounts in cents.
    pub fn put_int<S: Into<String>>(&mut self, name: S, value: i64) -> &mut Self {
        self.put(name, Value::Int(value))
    }

    /// Appends a boolean value.
    pub fn put_bool<S: Into<String>>(&mut self, name: S, value: bool) -> &mut Self {
        self.put(name, Value::Bool(value))
    }

    /// Appends a timestamp value.
    pub fn put_timestamp<S: Into<String>>(&mut self, name: S, value: DateTime<Utc>) -> &mut Self {
        self.put(name, Value::Timestamp(value))
    }

    /// Appends a nested payload. Its own root name becomes the element name.
    pub fn put_nested(&mut self, nested: XmlPayload) -> &mut Self {
        let name = nested.root.clone();
        self.put(name, Value::Nested(nested))
    }
}
