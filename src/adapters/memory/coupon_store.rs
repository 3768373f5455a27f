//! In-memory coupon store.
//!
//! The usage counter moves under the store's write lock, mirroring the
//! atomic `UPDATE ... SET current_uses = current_uses + 1` a relational
//! adapter would issue. Per-user captured-use counts are tracked the way
//! the SQL adapter derives them from captured purchase rows.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::premium::{CouponCode, DiscountCoupon};
use crate::ports::CouponStore;

/// In-memory [`CouponStore`] keyed by normalized code.
#[derive(Default)]
pub struct InMemoryCouponStore {
    coupons: RwLock<HashMap<String, DiscountCoupon>>,
    user_uses: RwLock<HashMap<(String, String), u32>>,
}

impl InMemoryCouponStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a coupon (admin surface stand-in).
    pub async fn insert(&self, coupon: DiscountCoupon) {
        self.coupons
            .write()
            .await
            .insert(coupon.code.as_str().to_string(), coupon);
    }

    /// Record that a user's captured purchase redeemed a code. The SQL
    /// adapter derives this count from purchase rows instead.
    pub async fn record_captured_use(&self, code: &CouponCode, user_id: &UserId) {
        let mut uses = self.user_uses.write().await;
        *uses
            .entry((code.as_str().to_string(), user_id.to_string()))
            .or_insert(0) += 1;
    }
}

#[async_trait]
impl CouponStore for InMemoryCouponStore {
    async fn find_by_code(
        &self,
        code: &CouponCode,
    ) -> Result<Option<DiscountCoupon>, DomainError> {
        Ok(self.coupons.read().await.get(code.as_str()).cloned())
    }

    async fn increment_uses(&self, code: &CouponCode) -> Result<(), DomainError> {
        let mut coupons = self.coupons.write().await;
        let coupon = coupons.get_mut(code.as_str()).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CouponNotFound,
                format!("no coupon with code {}", code),
            )
        })?;
        coupon.current_uses += 1;
        Ok(())
    }

    async fn captured_uses_by_user(
        &self,
        code: &CouponCode,
        user_id: &UserId,
    ) -> Result<u32, DomainError> {
        Ok(self
            .user_uses
            .read()
            .await
            .get(&(code.as_str().to_string(), user_id.to_string()))
            .copied()
            .unwrap_or(0))
    }
}
