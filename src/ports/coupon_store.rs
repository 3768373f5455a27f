//! Coupon store port.
//!
//! Lookup and usage accounting for discount coupons. Coupon codes carry a
//! unique constraint at the record-store level.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::premium::{CouponCode, DiscountCoupon};
use async_trait::async_trait;

/// Store port for discount coupons.
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Find a coupon by its normalized code.
    ///
    /// Returns `None` when the code does not exist. Eligibility (window,
    /// tier, capacity) is the resolver's concern, not the store's.
    async fn find_by_code(&self, code: &CouponCode)
        -> Result<Option<DiscountCoupon>, DomainError>;

    /// Increment the coupon's global use counter by exactly one.
    ///
    /// Must be an atomic increment at the record-store level, not a
    /// read-modify-write, so concurrent redemptions of a scarce code
    /// never lose updates. Called only when a payment is captured.
    async fn increment_uses(&self, code: &CouponCode) -> Result<(), DomainError>;

    /// Number of captured purchases by `user_id` that redeemed `code`.
    ///
    /// Backs the per-user usage limit; pending and failed purchases do
    /// not count.
    async fn captured_uses_by_user(
        &self,
        code: &CouponCode,
        user_id: &UserId,
    ) -> Result<u32, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coupon_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn CouponStore) {}
    }
}
