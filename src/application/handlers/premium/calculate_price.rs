//! CalculatePriceHandler - Query handler for previewing a purchase price.

use tracing::warn;

use crate::domain::foundation::{Money, Timestamp, UserId};
use crate::domain::premium::{
    Currency, DiscountRequest, DiscountResolver, PremiumError, PremiumTier, PriceQuote, TierConfig,
};

/// Query to price a prospective purchase.
#[derive(Debug, Clone)]
pub struct CalculatePriceQuery {
    pub user_id: UserId,
    pub tier: PremiumTier,
    pub coupon_code: Option<String>,
    pub referral_code: Option<String>,
    /// Wallet balance the caller opted to apply; never looked up here.
    pub wallet_balance: Option<Money>,
}

/// Handler for price previews.
///
/// Idempotent and side-effect-free: nothing is written and no usage
/// counter moves, so abandoned carts cannot drift coupon accounting.
/// A resolver infrastructure failure degrades to an undiscounted quote
/// rather than failing the preview.
pub struct CalculatePriceHandler {
    resolver: DiscountResolver,
}

impl CalculatePriceHandler {
    pub fn new(resolver: DiscountResolver) -> Self {
        Self { resolver }
    }

    pub async fn handle(&self, query: CalculatePriceQuery) -> Result<PriceQuote, PremiumError> {
        let config = TierConfig::for_tier(query.tier);

        let request = DiscountRequest {
            user_id: query.user_id,
            tier: query.tier,
            original_amount: config.price,
            coupon_code: query.coupon_code,
            referral_code: query.referral_code,
            wallet_balance: query.wallet_balance,
            now: Timestamp::now(),
        };

        let line_items = match self.resolver.resolve(&request).await {
            Ok(resolved) => resolved.line_items,
            Err(err) => {
                warn!(error = %err, tier = %query.tier, "discount resolution failed, quoting undiscounted price");
                vec![]
            }
        };

        Ok(PriceQuote::assemble(
            query.tier,
            config.price,
            line_items,
            Currency::Inr,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, Percentage};
    use crate::domain::premium::{
        CouponCode, CouponDiscount, DiscountCoupon, DiscountSource, ReferralProgram,
    };
    use crate::ports::{CouponStore, ReferralDirectory, ReferralProgramStore};
    use async_trait::async_trait;
    use std::sync::Arc;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockCouponStore {
        coupon: Option<DiscountCoupon>,
        fail: bool,
    }

    #[async_trait]
    impl CouponStore for MockCouponStore {
        async fn find_by_code(
            &self,
            code: &CouponCode,
        ) -> Result<Option<DiscountCoupon>, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::DatabaseError, "Simulated read failure"));
            }
            Ok(self.coupon.clone().filter(|c| c.code == *code))
        }

        async fn increment_uses(&self, _code: &CouponCode) -> Result<(), DomainError> {
            panic!("price preview must not increment coupon usage");
        }

        async fn captured_uses_by_user(
            &self,
            _code: &CouponCode,
            _user_id: &UserId,
        ) -> Result<u32, DomainError> {
            Ok(0)
        }
    }

    struct NoReferrals;

    #[async_trait]
    impl ReferralDirectory for NoReferrals {
        async fn resolve(&self, _code: &str) -> Result<Option<UserId>, DomainError> {
            Ok(None)
        }
    }

    struct NoPrograms;

    #[async_trait]
    impl ReferralProgramStore for NoPrograms {
        async fn active_at(&self, _now: Timestamp) -> Result<Option<ReferralProgram>, DomainError> {
            Ok(None)
        }
    }

    fn handler(coupon: Option<DiscountCoupon>, fail: bool) -> CalculatePriceHandler {
        CalculatePriceHandler::new(DiscountResolver::new(
            Arc::new(MockCouponStore { coupon, fail }),
            Arc::new(NoReferrals),
            Arc::new(NoPrograms),
        ))
    }

    fn ten_percent_coupon() -> DiscountCoupon {
        DiscountCoupon {
            code: CouponCode::try_new("STUDENT10").unwrap(),
            discount: CouponDiscount::Percentage {
                value: Percentage::new(10),
                max_discount: None,
            },
            min_order_amount: None,
            applicable_tiers: vec![PremiumTier::Silver],
            valid_from: Timestamp::now().minus_days(1),
            valid_until: None,
            max_uses: 100,
            max_uses_per_user: 1,
            current_uses: 0,
        }
    }

    fn query(tier: PremiumTier) -> CalculatePriceQuery {
        CalculatePriceQuery {
            user_id: UserId::new("buyer-1").unwrap(),
            tier,
            coupon_code: None,
            referral_code: None,
            wallet_balance: None,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn no_codes_quotes_catalog_price_for_every_tier() {
        let handler = handler(None, false);
        for tier in PremiumTier::all() {
            let quote = handler.handle(query(tier)).await.unwrap();
            assert_eq!(quote.final_amount, TierConfig::for_tier(tier).price);
            assert!(quote.discounts.is_empty());
        }
    }

    #[tokio::test]
    async fn coupon_reduces_quoted_price() {
        let handler = handler(Some(ten_percent_coupon()), false);
        let mut q = query(PremiumTier::Silver);
        q.coupon_code = Some("STUDENT10".to_string());

        let quote = handler.handle(q).await.unwrap();
        assert_eq!(quote.discounts.len(), 1);
        assert_eq!(quote.discounts[0].source, DiscountSource::Coupon);
        assert_eq!(quote.final_amount.minor_units(), 8910);
    }

    #[tokio::test]
    async fn resolver_failure_degrades_to_undiscounted_quote() {
        let handler = handler(Some(ten_percent_coupon()), true);
        let mut q = query(PremiumTier::Silver);
        q.coupon_code = Some("STUDENT10".to_string());

        let quote = handler.handle(q).await.unwrap();
        assert!(quote.discounts.is_empty());
        assert_eq!(quote.final_amount, TierConfig::for_tier(PremiumTier::Silver).price);
    }
}
