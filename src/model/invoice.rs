//! Invoice resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// An invoice raised against an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "invoice")]
pub struct Invoice {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Invoice UUID.
    pub uuid: Option<String>,
    /// Sequential invoice number.
    pub invoice_number: Option<i64>,
    /// Collection state (`open`, `collected`, `failed`, `past_due`).
    pub state: Option<String>,
    /// Code of the invoiced account.
    pub account_code: Option<String>,
    /// Subtotal in cents, before tax.
    pub subtotal_in_cents: Option<i64>,
    /// Tax in cents.
    pub tax_in_cents: Option<i64>,
    /// Total in cents.
    pub total_in_cents: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Resource path for invoices.
    pub const RESOURCE: &'static str = "/invoices";
}

/// A page-spanning collection of invoices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "invoices")]
pub struct Invoices {
    /// The invoices on this page (or, after merging, on all pages).
    #[serde(rename = "invoice")]
    pub invoices: Vec<Invoice>,
}

impl ResourceList for Invoices {
    type Item = Invoice;

    fn items(&self) -> &[Invoice] {
        &self.invoices
    }

    fn items_mut(&mut self) -> &mut Vec<Invoice> {
        &mut self.invoices
    }

    fn into_items(self) -> Vec<Invoice> {
        self.invoices
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::codec::{decode, encode};
    use crate::payload::XmlPayload;

    #[test]
    fn invoice_round_trip() {
        let created = Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap();
        let mut payload = XmlPayload::new("invoice");
        payload.put_str("uuid", "af59e0dcb3f2d2abd2f8a32e02d0dd32");
        payload.put_int("invoice_number", 1405);
        payload.put_str("state", "collected");
        payload.put_str("account_code", "acme");
        payload.put_int("subtotal_in_cents", 9900);
        payload.put_int("tax_in_cents", 792);
        payload.put_int("total_in_cents", 10_692);
        payload.put_str("currency", "USD");
        payload.put_timestamp("created_at", created);

        let decoded: Invoice = decode(&encode(&payload).unwrap()).unwrap();
        let expected = Invoice {
            uuid: Some("af59e0dcb3f2d2abd2f8a32e02d0dd32".into()),
            invoice_number: Some(1405),
            state: Some("collected".into()),
            account_code: Some("acme".into()),
            subtotal_in_cents: Some(9900),
            tax_in_cents: Some(792),
            total_in_cents: Some(10_692),
            currency: Some("USD".into()),
            created_at: Some(created),
            ..Invoice::default()
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn amounts_stay_integral_cents() {
        // 10692 cents, never 106.92 of anything.
        let invoice: Invoice =
            decode("<invoice><total_in_cents type=\"integer\">10692</total_in_cents></invoice>")
                .unwrap();
        assert_eq!(invoice.total_in_cents, Some(10_692));
    }
}
