//! XML payload codec.
//!
//! [`encode`] turns an [`XmlPayload`] into the wire document; [`decode`]
//! parses a response body into a typed result. Both halves are pure — no
//! network I/O — and each response page is decoded independently.

use chrono::SecondsFormat;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::de::DeserializeOwned;

use crate::error::{RecurlyError, Result};
use crate::payload::{Value, XmlPayload};

/// Serializes a payload to its XML document.
///
/// The payload's root name becomes the outer tag and entries are written in
/// insertion order. Text content is escaped.
///
/// # Errors
///
/// Returns [`RecurlyError::Encoding`] if the document cannot be written.
///
/// # Examples
///
/// ```
/// use recurly_client::codec::encode;
/// use recurly_client::payload::XmlPayload;
///
/// let mut account = XmlPayload::new("account");
/// account.put_str("account_code", "acme");
/// let xml = encode(&account)?;
/// assert_eq!(xml, "<account><account_code>acme</account_code></account>");
/// # Ok::<(), recurly_client::RecurlyError>(())
/// ```
pub fn encode(payload: &XmlPayload) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, payload.root(), payload.entries())?;
    String::from_utf8(writer.into_inner()).map_err(encoding_err)
}

/// Deserializes one XML document into the requested type.
///
/// # Errors
///
/// Returns [`RecurlyError::Decoding`] if the document is malformed or does
/// not match the expected shape.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    quick_xml::de::from_str(body).map_err(|e| RecurlyError::Decoding(e.to_string()))
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    entries: &[(String, Value)],
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(encoding_err)?;
    for (child, value) in entries {
        match value {
            Value::Str(text) => write_text(writer, child, text)?,
            Value::Int(n) => write_text(writer, child, &n.to_string())?,
            Value::Bool(b) => write_text(writer, child, if *b { "true" } else { "false" })?,
            Value::Timestamp(ts) => {
                write_text(writer, child, &ts.to_rfc3339_opts(SecondsFormat::Secs, true))?;
            }
            Value::Nested(nested) => write_element(writer, child, nested.entries())?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(encoding_err)?;
    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(encoding_err)?;
    writer.write_event(Event::Text(BytesText::new(text))).map_err(encoding_err)?;
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(encoding_err)?;
    Ok(())
}

fn encoding_err<E: std::fmt::Display>(err: E) -> RecurlyError {
    RecurlyError::Encoding(err.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::Deserialize;

    use super::*;

    #[test]
    fn encodes_root_from_payload_name() {
        let mut payload = XmlPayload::new("billing_info");
        payload.put_str("first_name", "Ada");
        let xml = encode(&payload).unwrap();
        assert!(xml.starts_with("<billing_info>"));
        assert!(xml.ends_with("</billing_info>"));
        assert!(!xml.contains("XmlPayload"));
    }

    #[test]
    fn escapes_text_content() {
        let mut payload = XmlPayload::new("account");
        payload.put_str("company_name", "Smith & Sons <Ltd>");
        let xml = encode(&payload).unwrap();
        assert!(xml.contains("Smith &amp; Sons &lt;Ltd&gt;"));
    }

    #[test]
    fn encodes_integers_as_decimal_text() {
        let mut payload = XmlPayload::new("transaction");
        payload.put_int("amount_in_cents", 12_345);
        let xml = encode(&payload).unwrap();
        assert!(xml.contains("<amount_in_cents>12345</amount_in_cents>"));
    }

    #[test]
    fn encodes_timestamps_as_iso_8601_z() {
        let created = Utc.with_ymd_and_hms(2015, 11, 25, 0, 35, 16).unwrap();
        let mut payload = XmlPayload::new("coupon");
        payload.put_timestamp("redeem_by_date", created);
        let xml = encode(&payload).unwrap();
        assert!(xml.contains("<redeem_by_date>2015-11-25T00:35:16Z</redeem_by_date>"));
    }

    #[test]
    fn encodes_nested_payloads() {
        let mut add_ons = XmlPayload::new("subscription_add_ons");
        let mut add_on = XmlPayload::new("subscription_add_on");
        add_on.put_str("add_on_code", "seats");
        add_on.put_int("quantity", 3);
        add_ons.put_nested(add_on);

        let mut subscription = XmlPayload::new("subscription");
        subscription.put_str("plan_code", "gold");
        subscription.put_nested(add_ons);

        let xml = encode(&subscription).unwrap();
        assert_eq!(
            xml,
            "<subscription><plan_code>gold</plan_code><subscription_add_ons>\
             <subscription_add_on><add_on_code>seats</add_on_code>\
             <quantity>3</quantity></subscription_add_on>\
             </subscription_add_ons></subscription>"
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Probe {
        code: String,
        count: Option<i64>,
        active: Option<bool>,
    }

    #[test]
    fn decodes_typed_fields_from_text() {
        let probe: Probe = decode(
            "<probe><code>x1</code><count type=\"integer\">7</count>\
             <active type=\"boolean\">true</active></probe>",
        )
        .unwrap();
        assert_eq!(probe, Probe { code: "x1".into(), count: Some(7), active: Some(true) });
    }

    #[test]
    fn decode_rejects_malformed_documents() {
        let result: Result<Probe> = decode("<probe><code>unterminated</probe>");
        assert!(matches!(result, Err(RecurlyError::Decoding(_))));
    }

    #[test]
    fn decode_rejects_mismatched_shapes() {
        let result: Result<Probe> = decode("<probe><count>not-a-number</count></probe>");
        assert!(matches!(result, Err(RecurlyError::Decoding(_))));
    }
}
