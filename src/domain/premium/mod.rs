//! Premium domain module.
//!
//! The entitlement and pricing engine: tier catalog, discount
//! resolution, purchase lifecycle, and access decisions.
//!
//! # Module Structure
//!
//! - `tier` / `catalog` - tier levels and their economics
//! - `coupon` / `referral` - discount entities and eligibility rules
//! - `pricing` / `discount` - quote math and the discount resolver
//! - `purchase` / `payment_status` - the payment lifecycle aggregate
//! - `academic` / `access` - frozen snapshots and access verdicts
//! - `entitlement` - the cached view of the latest captured purchase

mod academic;
mod access;
mod catalog;
mod coupon;
mod discount;
mod entitlement;
mod errors;
mod events;
mod payment_status;
mod pricing;
mod purchase;
mod referral;
mod tier;

pub use academic::{canonicalize, AcademicField, AcademicProfile};
pub use access::{
    evaluate_access, AcademicMismatch, AccessDenialReason, AccessVerdict, ContentRequirements,
    UserPremiumStatus,
};
pub use catalog::{Currency, TierConfig};
pub use coupon::{CouponCode, CouponDiscount, DiscountCoupon};
pub use discount::{DiscountRequest, DiscountResolver, ResolvedDiscounts};
pub use entitlement::UserEntitlement;
pub use errors::PremiumError;
pub use events::PremiumEvent;
pub use payment_status::PaymentStatus;
pub use pricing::{upgrade_price, DiscountLineItem, DiscountSource, PriceQuote};
pub use purchase::{PaymentConfirmation, Purchase};
pub use referral::{BenefitSpec, ReferralProgram, ReferralReward};
pub use tier::PremiumTier;
