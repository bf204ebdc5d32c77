//! Plan and plan add-on resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A subscription plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "plan")]
pub struct Plan {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Unique plan code.
    pub plan_code: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Plan description.
    pub description: Option<String>,
    /// Length of one billing interval.
    pub plan_interval_length: Option<i32>,
    /// Unit of the billing interval (`days`, `months`).
    pub plan_interval_unit: Option<String>,
    /// Length of the trial interval.
    pub trial_interval_length: Option<i32>,
    /// Unit of the trial interval.
    pub trial_interval_unit: Option<String>,
    /// One-time setup fee in cents.
    pub setup_fee_in_cents: Option<i64>,
    /// Per-unit price in cents.
    pub unit_amount_in_cents: Option<i64>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Plan {
    /// Resource path for plans.
    pub const RESOURCE: &'static str = "/plans";
}

/// A page-spanning collection of plans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "plans")]
pub struct Plans {
    /// The plans on this page (or, after merging, on all pages).
    #[serde(rename = "plan")]
    pub plans: Vec<Plan>,
}

impl ResourceList for Plans {
    type Item = Plan;

    fn items(&self) -> &[Plan] {
        &self.plans
    }

    fn items_mut(&mut self) -> &mut Vec<Plan> {
        &mut self.plans
    }

    fn into_items(self) -> Vec<Plan> {
        self.plans
    }
}

/// An add-on purchasable with a plan.
///
/// Lives under `/plans/{plan_code}/add_ons`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "add_on")]
pub struct AddOn {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Unique add-on code.
    pub add_on_code: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Whether hosted pages show a quantity field.
    pub display_quantity_on_hosted_page: Option<bool>,
    /// Default quantity applied at subscription time.
    pub default_quantity: Option<i32>,
    /// Per-unit price in cents.
    pub unit_amount_in_cents: Option<i64>,
}

impl AddOn {
    /// Resource path fragment, appended to a plan path.
    pub const RESOURCE: &'static str = "/add_ons";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};
    use crate::payload::XmlPayload;

    #[test]
    fn plan_round_trip() {
        let mut payload = XmlPayload::new("plan");
        payload.put_str("plan_code", "gold");
        payload.put_str("name", "Gold plan");
        payload.put_int("plan_interval_length", 1);
        payload.put_str("plan_interval_unit", "months");
        payload.put_int("setup_fee_in_cents", 600);
        payload.put_int("unit_amount_in_cents", 1200);

        let decoded: Plan = decode(&encode(&payload).unwrap()).unwrap();
        let expected = Plan {
            plan_code: Some("gold".into()),
            name: Some("Gold plan".into()),
            plan_interval_length: Some(1),
            plan_interval_unit: Some("months".into()),
            setup_fee_in_cents: Some(600),
            unit_amount_in_cents: Some(1200),
            ..Plan::default()
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn add_on_round_trip() {
        let mut payload = XmlPayload::new("add_on");
        payload.put_str("add_on_code", "extra-ips");
        payload.put_str("name", "Extra IP addresses");
        payload.put_bool("display_quantity_on_hosted_page", true);
        payload.put_int("default_quantity", 1);
        payload.put_int("unit_amount_in_cents", 200);

        let decoded: AddOn = decode(&encode(&payload).unwrap()).unwrap();
        let expected = AddOn {
            add_on_code: Some("extra-ips".into()),
            name: Some("Extra IP addresses".into()),
            display_quantity_on_hosted_page: Some(true),
            default_quantity: Some(1),
            unit_amount_in_cents: Some(200),
            ..AddOn::default()
        };
        assert_eq!(decoded, expected);
    }

    #[test]
    fn decodes_plan_list_wrapper() {
        let xml = "<plans type=\"array\">\
                   <plan><plan_code>bronze</plan_code></plan>\
                   <plan><plan_code>silver</plan_code></plan>\
                   <plan><plan_code>gold</plan_code></plan>\
                   </plans>";
        let plans: Plans = decode(xml).unwrap();
        let codes: Vec<_> =
            plans.plans.iter().filter_map(|p| p.plan_code.as_deref()).collect();
        assert_eq!(codes, vec!["bronze", "silver", "gold"]);
    }
}
