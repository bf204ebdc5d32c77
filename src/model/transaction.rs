//! Transaction resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "transaction")]
pub struct Transaction {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Transaction UUID.
    pub uuid: Option<String>,
    /// Gateway action (`purchase`, `refund`, `verify`).
    pub action: Option<String>,
    /// Amount in cents.
    pub amount_in_cents: Option<i64>,
    /// Tax portion in cents.
    pub tax_in_cents: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Gateway status (`success`, `declined`, `void`).
    pub status: Option<String>,
    /// Gateway reference.
    pub reference: Option<String>,
    /// Whether this ran against the test gateway.
    pub test: Option<bool>,
    /// Whether the transaction can still be voided.
    pub voidable: Option<bool>,
    /// Whether the transaction can be refunded.
    pub refundable: Option<bool>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Resource path for transactions.
    pub const RESOURCE: &'static str = "/transactions";

    /// Query parameter naming the partial-refund amount on DELETE.
    pub const REFUND_AMOUNT_PARAM: &'static str = "amount_in_cents";
}

/// A page-spanning collection of transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "transactions")]
pub struct Transactions {
    /// The transactions on this page (or, after merging, on all pages).
    #[serde(rename = "transaction")]
    pub transactions: Vec<Transaction>,
}

impl ResourceList for Transactions {
    type Item = Transaction;

    fn items(&self) -> &[Transaction] {
        &self.transactions
    }

    fn items_mut(&mut self) -> &mut Vec<Transaction> {
        &mut self.transactions
    }

    fn into_items(self) -> Vec<Transaction> {
        self.transactions
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::codec::{decode, encode};
    use crate::payload::XmlPayload;

    #[test]
    fn transaction_round_trip() {
        let created = Utc.with_ymd_and_hms(2024, 2, 2, 8, 15, 0).unwrap();
        let mut payload = XmlPayload::new("transaction");
        payload.put_str("uuid", "a13acd8fe4294916b79aec87b7ea441f");
        payload.put_str("action", "purchase");
        payload.put_int("amount_in_cents", 4999);
        payload.put_str("currency", "EUR");
        payload.put_str("status", "success");
        payload.put_bool("test", false);
        payload.put_bool("voidable", true);
        payload.put_bool("refundable", true);
        payload.put_timestamp("created_at", created);

        let decoded: Transaction = decode(&encode(&payload).unwrap()).unwrap();
        let expected = Transaction {
            uuid: Some("a13acd8fe4294916b79aec87b7ea441f".into()),
            action: Some("purchase".into()),
            amount_in_cents: Some(4999),
            currency: Some("EUR".into()),
            status: Some("success".into()),
            test: Some(false),
            voidable: Some(true),
            refundable: Some(true),
            created_at: Some(created),
            ..Transaction::default()
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn decodes_transaction_booleans() {
        let xml = "<transaction>\
                   <test type=\"boolean\">true</test>\
                   <voidable type=\"boolean\">false</voidable>\
                   </transaction>";
        let transaction: Transaction = decode(xml).unwrap();
        assert_eq!(transaction.test, Some(true));
        assert_eq!(transaction.voidable, Some(false));
    }
}
