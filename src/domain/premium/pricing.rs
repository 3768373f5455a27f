//! Pure pricing math: quote assembly and upgrade proration.
//!
//! Everything here is a function of its inputs. Lookups and eligibility
//! live in the discount resolver; this module only composes amounts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

use super::{Currency, PremiumTier, TierConfig};

/// Where a discount line item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSource {
    Coupon,
    Referral,
    Wallet,
}

/// One named, amount-bearing adjustment contributing to a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountLineItem {
    pub source: DiscountSource,
    /// The code that produced the discount, if any.
    pub code: Option<String>,
    pub amount: Money,
    pub description: String,
}

/// The result of a price calculation.
///
/// # Invariants
///
/// - `total_discount` is the sum of `discounts[].amount`
/// - `final_amount = max(0, original_amount - total_discount)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub tier: PremiumTier,
    pub original_amount: Money,
    pub discounts: Vec<DiscountLineItem>,
    pub total_discount: Money,
    pub final_amount: Money,
    pub currency: Currency,
}

impl PriceQuote {
    /// Assembles a quote from an original amount and resolved line items,
    /// enforcing the quote invariants.
    pub fn assemble(
        tier: PremiumTier,
        original_amount: Money,
        discounts: Vec<DiscountLineItem>,
        currency: Currency,
    ) -> Self {
        let total_discount: Money = discounts.iter().map(|d| d.amount).sum();
        let final_amount = original_amount.saturating_sub(total_discount);
        Self {
            tier,
            original_amount,
            discounts,
            total_discount,
            final_amount,
            currency,
        }
    }
}

/// Incremental price for moving from `current` to `target` with
/// `days_remaining` unused days on the current tier.
///
/// Unused time is credited at the current tier's daily rate against the
/// target tier's full price. Proration is time-based only; the feature-set
/// difference is deliberately not priced.
pub fn upgrade_price(current: &TierConfig, target: &TierConfig, days_remaining: u32) -> Money {
    // Credit never exceeds one full period of the current tier.
    let credited_days = days_remaining.min(current.duration_days);
    let remaining_credit = current.price.prorate(credited_days, current.duration_days);
    target.price.saturating_sub(remaining_credit)
}
