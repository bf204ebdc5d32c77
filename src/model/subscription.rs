//! Subscription resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A subscription of an account to a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "subscription")]
pub struct Subscription {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Subscription UUID.
    pub uuid: Option<String>,
    /// Lifecycle state (`active`, `canceled`, `expired`, ...).
    pub state: Option<String>,
    /// Code of the subscribed plan.
    pub plan_code: Option<String>,
    /// Per-unit price in cents.
    pub unit_amount_in_cents: Option<i64>,
    /// Number of units subscribed.
    pub quantity: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Activation timestamp.
    pub activated_at: Option<DateTime<Utc>>,
    /// Cancellation timestamp, if canceled.
    pub canceled_at: Option<DateTime<Utc>>,
    /// Expiry timestamp, if expired.
    pub expires_at: Option<DateTime<Utc>>,
    /// Start of the current billing period.
    pub current_period_started_at: Option<DateTime<Utc>>,
    /// End of the current billing period.
    pub current_period_ends_at: Option<DateTime<Utc>>,
    /// Add-ons attached to the subscription.
    pub subscription_add_ons: Option<SubscriptionAddOns>,
}

impl Subscription {
    /// Resource path for subscriptions.
    pub const RESOURCE: &'static str = "/subscriptions";
}

/// Wrapper element for a subscription's add-ons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "subscription_add_ons")]
pub struct SubscriptionAddOns {
    /// The attached add-ons.
    #[serde(rename = "subscription_add_on")]
    pub add_ons: Vec<SubscriptionAddOn>,
}

/// One add-on attached to a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "subscription_add_on")]
pub struct SubscriptionAddOn {
    /// Code of the plan add-on.
    pub add_on_code: Option<String>,
    /// Per-unit price in cents.
    pub unit_amount_in_cents: Option<i64>,
    /// Number of units.
    pub quantity: Option<i64>,
}

/// A page-spanning collection of subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "subscriptions")]
pub struct Subscriptions {
    /// The subscriptions on this page (or, after merging, on all pages).
    #[serde(rename = "subscription")]
    pub subscriptions: Vec<Subscription>,
}

impl ResourceList for Subscriptions {
    type Item = Subscription;

    fn items(&self) -> &[Subscription] {
        &self.subscriptions
    }

    fn items_mut(&mut self) -> &mut Vec<Subscription> {
        &mut self.subscriptions
    }

    fn into_items(self) -> Vec<Subscription> {
        self.subscriptions
    }
}
