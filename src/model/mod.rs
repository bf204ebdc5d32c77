//! Typed resource models.
//!
//! Representative field sets for the billing resources the API exchanges,
//! not exhaustive schemas. All fields are optional: the API omits elements
//! freely, and create/update payloads are built separately through
//! [`XmlPayload`](crate::payload::XmlPayload), so these types only ever
//! describe what came back off the wire.
//!
//! Wire conventions: element names are `snake_case`; integers travel as
//! decimal text; timestamps as ISO-8601 with `Z` suffix; monetary amounts
//! as integer cents (`i64`), never floating point. Elements may carry
//! `type="..."` and `href="..."` attributes — the former are ignored, the
//! latter captured where the original API exposes them (`href` is
//! server-assigned and excluded from round-trips).
//!
//! List resources come wrapped in a plural element containing repeated
//! singular children (`<accounts><account>..</account>..</accounts>`);
//! each wrapper implements [`ResourceList`](crate::pagination::ResourceList)
//! so the pagination aggregator can merge pages.

pub mod account;
pub mod adjustment;
pub mod coupon;
pub mod currency;
pub mod invoice;
pub mod plan;
pub mod subscription;
pub mod transaction;

pub use account::{Account, Accounts, BillingInfo};
pub use adjustment::{Adjustment, Adjustments};
pub use coupon::{Coupon, CouponRedeem, Redemption, Redemptions};
pub use currency::Currency;
pub use invoice::{Invoice, Invoices};
pub use plan::{AddOn, Plan, Plans};
pub use subscription::{Subscription, SubscriptionAddOn, SubscriptionAddOns, Subscriptions};
pub use transaction::{Transaction, Transactions};
