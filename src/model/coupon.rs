//! Coupon and redemption resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A discount coupon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "coupon")]
pub struct Coupon {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Unique coupon code.
    pub coupon_code: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Coupon state (`redeemable`, `expired`, `inactive`).
    pub state: Option<String>,
    /// Discount type (`percent` or `dollars`).
    pub discount_type: Option<String>,
    /// Percentage discount, when `discount_type` is `percent`.
    pub discount_percent: Option<i32>,
    /// Fixed discount in cents, when `discount_type` is `dollars`.
    pub discount_in_cents: Option<i64>,
    /// Last date the coupon can be redeemed.
    pub redeem_by_date: Option<DateTime<Utc>>,
    /// Whether the coupon may only be redeemed once per account.
    pub single_use: Option<bool>,
    /// Maximum number of redemptions across all accounts.
    pub max_redemptions: Option<i32>,
}

impl Coupon {
    /// Resource path for coupons.
    pub const RESOURCE: &'static str = "/coupons";
}

/// Payload shape answered when a coupon is redeemed.
///
/// The wire root element is `redemption`, same as [`Redemption`]; this type
/// carries the redeem-call response, which only names the account and
/// currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "redemption")]
pub struct CouponRedeem {
    /// Code of the redeeming account.
    pub account_code: Option<String>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
}

impl CouponRedeem {
    /// Resource path fragment, appended to a coupon path.
    pub const RESOURCE: &'static str = "/redeem";
}

/// An active or past redemption of a coupon by an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "redemption")]
pub struct Redemption {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Redemption UUID.
    pub uuid: Option<String>,
    /// Code of the redeemed coupon.
    pub coupon_code: Option<String>,
    /// Whether the redemption was single-use.
    pub single_use: Option<bool>,
    /// Total discount granted so far, in cents.
    pub total_discounted_in_cents: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Redemption state (`active`, `inactive`).
    pub state: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Redemption {
    /// Resource path fragment, appended to an account path.
    pub const RESOURCE: &'static str = "/redemption";
}

/// A page-spanning collection of redemptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "redemptions")]
pub struct Redemptions {
    /// The redemptions on this page (or, after merging, on all pages).
    #[serde(rename = "redemption")]
    pub redemptions: Vec<Redemption>,
}

impl ResourceList for Redemptions {
    type Item = Redemption;

    fn items(&self) -> &[Redemption] {
        &self.redemptions
    }

    fn items_mut(&mut self) -> &mut Vec<Redemption> {
        &mut self.redemptions
    }

    fn into_items(self) -> Vec<Redemption> {
        self.redemptions
    }
}
