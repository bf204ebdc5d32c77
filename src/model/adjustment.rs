//! Adjustment (one-off charge/credit) resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pagination::ResourceList;

/// A one-off charge or credit on an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "adjustment")]
pub struct Adjustment {
    /// Server-assigned resource link.
    #[serde(rename = "@href", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Adjustment UUID.
    pub uuid: Option<String>,
    /// Line-item description.
    pub description: Option<String>,
    /// Accounting code for ledger export.
    pub accounting_code: Option<String>,
    /// Per-unit amount in cents. Negative values are credits.
    pub unit_amount_in_cents: Option<i64>,
    /// Number of units.
    pub quantity: Option<i64>,
    /// Total in cents.
    pub total_in_cents: Option<i64>,
    /// ISO 4217 currency code.
    pub currency: Option<String>,
    /// Whether tax applies.
    pub taxable: Option<bool>,
    /// Service period start.
    pub start_date: Option<DateTime<Utc>>,
    /// Service period end.
    pub end_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl Adjustment {
    /// Resource path for adjustments.
    pub const RESOURCE: &'static str = "/adjustments";
}

/// A page-spanning collection of adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "adjustments")]
pub struct Adjustments {
    /// The adjustments on this page (or, after merging, on all pages).
    #[serde(rename = "adjustment")]
    pub adjustments: Vec<Adjustment>,
}

impl ResourceList for Adjustments {
    type Item = Adjustment;

    fn items(&self) -> &[Adjustment] {
        &self.adjustments
    }

    fn items_mut(&mut self) -> &mut Vec<Adjustment> {
        &mut self.adjustments
    }

    fn into_items(self) -> Vec<Adjustment> {
        self.adjustments
    }
}
