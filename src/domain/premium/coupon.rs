//! Discount coupon entity and code value object.
//!
//! Coupons are campaign-managed discounts with a validity window, a tier
//! applicability set, and global plus per-user usage limits. Eligibility
//! failures are soft: an ineligible coupon simply contributes no discount.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Percentage, Timestamp, ValidationError};

use super::PremiumTier;

/// A normalized coupon code.
///
/// Codes are case-insensitive and surrounding whitespace is ignored;
/// the stored form is trimmed uppercase. 3-24 alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CouponCode(String);

impl CouponCode {
    /// Creates a CouponCode from user input, normalizing and validating.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("coupon_code"));
        }
        if normalized.len() < 3 || normalized.len() > 24 {
            return Err(ValidationError::out_of_range(
                "coupon_code_length",
                3,
                24,
                normalized.len() as i64,
            ));
        }
        if !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_format(
                "coupon_code",
                "alphanumeric characters only",
            ));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CouponCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for CouponCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// How a coupon reduces the order amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CouponDiscount {
    /// Percentage of the original amount, optionally capped.
    Percentage {
        value: Percentage,
        max_discount: Option<Money>,
    },
    /// Flat amount off, never exceeding the original amount.
    Fixed { amount: Money },
}

/// A campaign-managed discount coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountCoupon {
    /// Unique normalized code.
    pub code: CouponCode,
    /// Discount rule.
    pub discount: CouponDiscount,
    /// Minimum original amount for the coupon to apply.
    pub min_order_amount: Option<Money>,
    /// Tiers this coupon may be applied to.
    pub applicable_tiers: Vec<PremiumTier>,
    /// Start of validity window.
    pub valid_from: Timestamp,
    /// End of validity window; None = open-ended.
    pub valid_until: Option<Timestamp>,
    /// Global redemption capacity.
    pub max_uses: u32,
    /// Per-user redemption capacity.
    pub max_uses_per_user: u32,
    /// Redemptions so far, counted only on captured payments.
    pub current_uses: u32,
}

impl DiscountCoupon {
    /// True while `now` is inside the validity window.
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        if now.is_before(&self.valid_from) {
            return false;
        }
        match self.valid_until {
            Some(until) => !now.is_after(&until),
            None => true,
        }
    }

    /// True if the coupon may be applied to the given tier.
    pub fn applies_to(&self, tier: PremiumTier) -> bool {
        self.applicable_tiers.contains(&tier)
    }

    /// True if the original amount meets the coupon's minimum.
    pub fn meets_minimum(&self, original: Money) -> bool {
        match self.min_order_amount {
            Some(min) => original >= min,
            None => true,
        }
    }

    /// True while global capacity remains.
    pub fn has_global_capacity(&self) -> bool {
        self.current_uses < self.max_uses
    }

    /// True if a user with `prior_uses` captured redemptions may redeem again.
    pub fn allows_user(&self, prior_uses: u32) -> bool {
        prior_uses < self.max_uses_per_user
    }

    /// Computes the discount against an original amount.
    ///
    /// Percentage discounts are clamped to `max_discount` when set; fixed
    /// discounts never exceed the original amount.
    pub fn discount_amount(&self, original: Money) -> Money {
        match self.discount {
            CouponDiscount::Percentage { value, max_discount } => {
                let raw = original.percent_of(value);
                match max_discount {
                    Some(cap) => raw.min(cap),
                    None => raw,
                }
            }
            CouponDiscount::Fixed { amount } => amount.min(original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(discount: CouponDiscount) -> DiscountCoupon {
        DiscountCoupon {
            code: CouponCode::try_new("STUDENT10").unwrap(),
            discount,
            min_order_amount: None,
            applicable_tiers: vec![PremiumTier::Silver, PremiumTier::Gold],
            valid_from: Timestamp::now().minus_days(1),
            valid_until: Some(Timestamp::now().add_days(30)),
            max_uses: 100,
            max_uses_per_user: 1,
            current_uses: 0,
        }
    }

    // Code normalization

    #[test]
    fn code_normalizes_case_and_whitespace() {
        let code = CouponCode::try_new("  student10 ").unwrap();
        assert_eq!(code.as_str(), "STUDENT10");
    }

    #[test]
    fn code_rejects_empty_input() {
        assert!(CouponCode::try_new("   ").is_err());
    }

    #[test]
    fn code_rejects_special_characters() {
        assert!(CouponCode::try_new("SAVE-10").is_err());
    }

    #[test]
    fn code_rejects_too_short() {
        assert!(CouponCode::try_new("AB").is_err());
    }

    #[test]
    fn normalized_codes_are_equal() {
        assert_eq!(
            CouponCode::try_new("student10").unwrap(),
            CouponCode::try_new("STUDENT10").unwrap()
        );
    }

    // Validity window

    #[test]
    fn valid_inside_window() {
        let c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        assert!(c.is_valid_at(Timestamp::now()));
    }

    #[test]
    fn invalid_before_window_opens() {
        let mut c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        c.valid_from = Timestamp::now().add_days(1);
        assert!(!c.is_valid_at(Timestamp::now()));
    }

    #[test]
    fn invalid_after_window_closes() {
        let mut c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        c.valid_until = Some(Timestamp::now().minus_days(1));
        assert!(!c.is_valid_at(Timestamp::now()));
    }

    #[test]
    fn open_ended_window_stays_valid() {
        let mut c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        c.valid_until = None;
        assert!(c.is_valid_at(Timestamp::now().add_days(10_000)));
    }

    // Eligibility predicates

    #[test]
    fn applies_only_to_listed_tiers() {
        let c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        assert!(c.applies_to(PremiumTier::Silver));
        assert!(!c.applies_to(PremiumTier::Platinum));
    }

    #[test]
    fn minimum_order_amount_is_enforced() {
        let mut c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        c.min_order_amount = Some(Money::from_major(100));
        assert!(!c.meets_minimum(Money::from_major(99)));
        assert!(c.meets_minimum(Money::from_major(100)));
    }

    #[test]
    fn global_capacity_exhausts() {
        let mut c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        c.current_uses = 100;
        assert!(!c.has_global_capacity());
    }

    #[test]
    fn per_user_limit_is_enforced() {
        let c = coupon(CouponDiscount::Fixed { amount: Money::from_major(10) });
        assert!(c.allows_user(0));
        assert!(!c.allows_user(1));
    }

    // Discount computation

    #[test]
    fn percentage_discount_computes_share() {
        let c = coupon(CouponDiscount::Percentage {
            value: Percentage::new(10),
            max_discount: None,
        });
        assert_eq!(c.discount_amount(Money::from_major(99)).minor_units(), 990);
    }

    #[test]
    fn percentage_discount_clamps_to_cap() {
        let c = coupon(CouponDiscount::Percentage {
            value: Percentage::new(50),
            max_discount: Some(Money::from_major(20)),
        });
        // 50% of 99 = 49.50, capped at 20.00
        assert_eq!(c.discount_amount(Money::from_major(99)), Money::from_major(20));
    }

    #[test]
    fn fixed_discount_never_exceeds_original() {
        let c = coupon(CouponDiscount::Fixed { amount: Money::from_major(150) });
        assert_eq!(c.discount_amount(Money::from_major(99)), Money::from_major(99));
    }
}
