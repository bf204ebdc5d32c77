//! Account and billing-info resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A customer account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "account")]
pub struct Account {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Unique account code chosen at creation.
    pub account_code: Option<String>,
    /// Account state (`active`, `closed`).
    pub state: Option<String>,
    /// Login username.
    pub username: Option<String>,
    /// Billing contact email address.
    pub email: Option<String>,
    /// Contact first name.
    pub first_name: Option<String>,
    /// Contact last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company_name: Option<String>,
    /// Preferred locale for hosted pages.
    pub accept_language: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Resource path for accounts.
    pub const RESOURCE: &'static str = "/accounts";
}

/// A page-spanning collection of accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "accounts")]
pub struct Accounts {
    /// The accounts on this page (or, after merging, on all pages).
    #[serde(rename = "account")]
    pub accounts: Vec<Account>,
}

impl ResourceList for Accounts {
    type Item = Account;

    fn items(&self) -> &[Account] {
        &self.accounts
    }

    fn items_mut(&mut self) -> &mut Vec<Account> {
        &mut self.accounts
    }

    fn into_items(self) -> Vec<Account> {
        self.accounts
    }
}

/// Stored billing information for an account.
///
/// Lives under `/accounts/{code}/billing_info`. Accounts without stored
/// billing information answer 404 with a recognizable message; see
/// [`BILLING_INFO_NOT_FOUND`](crate::client::BILLING_INFO_NOT_FOUND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "billing_info")]
pub struct BillingInfo {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Cardholder first name.
    pub first_name: Option<String>,
    /// Cardholder last name.
    pub last_name: Option<String>,
    /// Street address, first line.
    pub address1: Option<String>,
    /// Street address, second line.
    pub address2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// Two-letter country code.
    pub country: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// VAT registration number.
    pub vat_number: Option<String>,
    /// Card brand reported by the gateway.
    pub card_type: Option<String>,
    /// First six digits of the stored card.
    pub first_six: Option<String>,
    /// Last four digits of the stored card.
    pub last_four: Option<String>,
    /// Card expiration month.
    pub month: Option<i32>,
    /// Card expiration year.
    pub year: Option<i32>,
}

impl BillingInfo {
    /// Resource path fragment, appended to an account path.
    pub const RESOURCE: &'static str = "/billing_info";
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::codec::{decode, encode};
    use crate::payload::XmlPayload;

    #[test]
    fn decodes_account_with_wire_attributes() {
        let xml = "<account href=\"https://api.recurly.com/v2/accounts/acme\">\
                   <account_code>acme</account_code>\
                   <state>active</state>\
                   <email>billing@acme.example</email>\
                   <created_at type=\"datetime\">2015-11-25T00:35:16Z</created_at>\
                   </account>";
        let account: Account = decode(xml).unwrap();
        assert_eq!(account.href.as_deref(), Some("https://api.recurly.com/v2/accounts/acme"));
        assert_eq!(account.account_code.as_deref(), Some("acme"));
        assert_eq!(account.state.as_deref(), Some("active"));
        assert_eq!(
            account.created_at,
            Some(Utc.with_ymd_and_hms(2015, 11, 25, 0, 35, 16).unwrap()),
        );
    }

    #[test]
    fn decodes_account_list_wrapper() {
        let xml = "<accounts type=\"array\">\
                   <account><account_code>a1</account_code></account>\
                   <account><account_code>a2</account_code></account>\
                   </accounts>";
        let accounts: Accounts = decode(xml).unwrap();
        assert_eq!(accounts.accounts.len(), 2);
        assert_eq!(accounts.accounts[1].account_code.as_deref(), Some("a2"));
    }

    #[test]
    fn account_round_trip() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let mut payload = XmlPayload::new("account");
        payload.put_str("account_code", "acme");
        payload.put_str("email", "billing@acme.example");
        payload.put_str("first_name", "Ada");
        payload.put_timestamp("created_at", created);

        let decoded: Account = decode(&encode(&payload).unwrap()).unwrap();
        let expected = Account {
            account_code: Some("acme".into()),
            email: Some("billing@acme.example".into()),
            first_name: Some("Ada".into()),
            created_at: Some(created),
            ..Account::default()
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn billing_info_round_trip() {
        let mut payload = XmlPayload::new("billing_info");
        payload.put_str("first_name", "Ada");
        payload.put_str("last_name", "Lovelace");
        payload.put_str("address1", "12 Analytical Way");
        payload.put_str("city", "London");
        payload.put_str("country", "GB");
        payload.put_int("month", 12);
        payload.put_int("year", 2030);

        let decoded: BillingInfo = decode(&encode(&payload).unwrap()).unwrap();
        let expected = BillingInfo {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            address1: Some("12 Analytical Way".into()),
            city: Some("London".into()),
            country: Some("GB".into()),
            month: Some(12),
            year: Some(2030),
            ..BillingInfo::default()
        };
        assert_eq!(decoded, expected);
    }
}
