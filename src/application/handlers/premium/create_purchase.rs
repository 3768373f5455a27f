//! CreatePurchaseHandler - Command handler for initiating a premium purchase.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{Money, PurchaseId, Timestamp, UserId};
use crate::domain::premium::{
    Currency, DiscountRequest, DiscountResolver, PremiumError, PremiumEvent, PremiumTier,
    PriceQuote, Purchase, TierConfig,
};
use crate::ports::{
    AcademicProfileProvider, EventPublisher, PaymentGateway, PurchaseRepository, SaveResult,
};

/// Command to create a pending purchase.
#[derive(Debug, Clone)]
pub struct CreatePurchaseCommand {
    pub user_id: UserId,
    pub tier: PremiumTier,
    pub coupon_code: Option<String>,
    pub referral_code: Option<String>,
    /// Wallet balance the caller opted to apply.
    pub wallet_balance: Option<Money>,
}

/// Result of successful purchase creation.
#[derive(Debug, Clone)]
pub struct CreatePurchaseResult {
    pub purchase: Purchase,
    pub quote: PriceQuote,
}

/// Handler for creating a pending purchase tied to a gateway order.
///
/// The purchase is recorded before any money moves; the gateway's
/// asynchronous callback later advances it through the confirmation
/// handler. The user's academic profile is a hard precondition because
/// its attributes are frozen onto the purchase.
pub struct CreatePurchaseHandler {
    purchases: Arc<dyn PurchaseRepository>,
    profiles: Arc<dyn AcademicProfileProvider>,
    gateway: Arc<dyn PaymentGateway>,
    events: Arc<dyn EventPublisher>,
    resolver: DiscountResolver,
}

impl CreatePurchaseHandler {
    pub fn new(
        purchases: Arc<dyn PurchaseRepository>,
        profiles: Arc<dyn AcademicProfileProvider>,
        gateway: Arc<dyn PaymentGateway>,
        events: Arc<dyn EventPublisher>,
        resolver: DiscountResolver,
    ) -> Self {
        Self {
            purchases,
            profiles,
            gateway,
            events,
            resolver,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePurchaseCommand,
    ) -> Result<CreatePurchaseResult, PremiumError> {
        let now = Timestamp::now();

        // 1. The academic profile must exist and be complete before it
        //    can be frozen onto the purchase.
        let profile = self
            .profiles
            .fetch(&cmd.user_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?
            .filter(|p| p.is_complete())
            .ok_or_else(|| PremiumError::profile_incomplete(cmd.user_id.clone()))?;

        // 2. Price the order. Unlike a preview, a resolver failure here
        //    fails the request: a purchase must never be created against
        //    an unverified discount.
        let config = TierConfig::for_tier(cmd.tier);
        let resolved = self
            .resolver
            .resolve(&DiscountRequest {
                user_id: cmd.user_id.clone(),
                tier: cmd.tier,
                original_amount: config.price,
                coupon_code: cmd.coupon_code,
                referral_code: cmd.referral_code.clone(),
                wallet_balance: cmd.wallet_balance,
                now,
            })
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        let quote = PriceQuote::assemble(
            cmd.tier,
            config.price,
            resolved.line_items.clone(),
            Currency::Inr,
        );
        if quote.final_amount > quote.original_amount {
            return Err(PremiumError::invalid_amount(quote.final_amount));
        }

        // 3. Register the order with the gateway. The gateway order id is
        //    the idempotency key for the later confirmation.
        let purchase_id = PurchaseId::new();
        let order = self
            .gateway
            .create_order(quote.final_amount, quote.currency, &purchase_id.to_string())
            .await
            .map_err(|e| PremiumError::gateway_failed(e.to_string()))?;

        // 4. Record the pending purchase with the frozen snapshot.
        let purchase = Purchase::create(
            purchase_id,
            cmd.user_id.clone(),
            order.order_id,
            &quote,
            config.duration_days,
            profile,
            resolved.coupon,
            cmd.referral_code,
            resolved.referrer,
            now,
        );

        match self
            .purchases
            .save(&purchase)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?
        {
            SaveResult::Inserted => {}
            SaveResult::DuplicateOrder => {
                return Err(PremiumError::infrastructure(format!(
                    "gateway order {} already recorded",
                    purchase.order_id
                )))
            }
        }

        info!(
            purchase_id = %purchase.id,
            order_id = %purchase.order_id,
            tier = %purchase.tier,
            amount = %purchase.final_amount,
            "pending purchase created"
        );

        self.events
            .publish(PremiumEvent::PurchaseCreated {
                purchase_id: purchase.id,
                user_id: purchase.user_id.clone(),
                order_id: purchase.order_id.clone(),
                tier: purchase.tier,
                final_amount: purchase.final_amount,
                occurred_at: now,
            })
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        Ok(CreatePurchaseResult { purchase, quote })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode, OrderId};
    use crate::domain::premium::{
        AcademicProfile, CouponCode, DiscountCoupon, PaymentStatus, ReferralProgram,
    };
    use crate::ports::{
        CouponStore, GatewayOrder, ReferralDirectory, ReferralProgramStore,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct MockPurchaseRepository {
        saved: Mutex<Vec<Purchase>>,
        fail_save: bool,
    }

    impl MockPurchaseRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<Purchase> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PurchaseRepository for MockPurchaseRepository {
        async fn save(&self, purchase: &Purchase) -> Result<SaveResult, DomainError> {
            if self.fail_save {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated save failure",
                ));
            }
            self.saved.lock().unwrap().push(purchase.clone());
            Ok(SaveResult::Inserted)
        }

        async fn find_by_order_id(
            &self,
            _order_id: &OrderId,
        ) -> Result<Option<Purchase>, DomainError> {
            Ok(None)
        }

        async fn update_if_status(
            &self,
            _purchase: &Purchase,
            _expected: PaymentStatus,
        ) -> Result<crate::ports::CasOutcome, DomainError> {
            Ok(crate::ports::CasOutcome::Applied)
        }

        async fn list_for_user(&self, _user_id: &UserId) -> Result<Vec<Purchase>, DomainError> {
            Ok(vec![])
        }

        async fn latest_active_for_user(
            &self,
            _user_id: &UserId,
            _now: Timestamp,
        ) -> Result<Option<Purchase>, DomainError> {
            Ok(None)
        }
    }

    struct MockProfileProvider {
        profile: Option<AcademicProfile>,
    }

    #[async_trait]
    impl AcademicProfileProvider for MockProfileProvider {
        async fn fetch(&self, _user_id: &UserId) -> Result<Option<AcademicProfile>, DomainError> {
            Ok(self.profile.clone())
        }
    }

    struct MockGateway {
        orders_created: AtomicU32,
        fail: bool,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                orders_created: AtomicU32::new(0),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                orders_created: AtomicU32::new(0),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_order(
            &self,
            amount: Money,
            currency: Currency,
            _receipt: &str,
        ) -> Result<GatewayOrder, DomainError> {
            if self.fail {
                return Err(DomainError::new(ErrorCode::GatewayError, "gateway down"));
            }
            let n = self.orders_created.fetch_add(1, Ordering::SeqCst);
            Ok(GatewayOrder {
                order_id: OrderId::new(format!("order_mock{}", n)).unwrap(),
                amount,
                currency,
            })
        }
    }

    struct MockEventPublisher {
        events: Mutex<Vec<PremiumEvent>>,
    }

    impl MockEventPublisher {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }

        fn published(&self) -> Vec<PremiumEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventPublisher for MockEventPublisher {
        async fn publish(&self, event: PremiumEvent) -> Result<(), DomainError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    struct MockCouponStore {
        coupon: Option<DiscountCoupon>,
    }

    #[async_trait]
    impl CouponStore for MockCouponStore {
        async fn find_by_code(
            &self,
            code: &CouponCode,
        ) -> Result<Option<DiscountCoupon>, DomainError> {
            Ok(self.coupon.clone().filter(|c| c.code == *code))
        }

        async fn increment_uses(&self, _code: &CouponCode) -> Result<(), DomainError> {
            panic!("purchase creation must not increment coupon usage");
        }

        async fn captured_uses_by_user(
            &self,
            _code: &CouponCode,
            _user_id: &UserId,
        ) -> Result<u32, DomainError> {
            Ok(0)
        }
    }

    struct MockReferralDirectory {
        owner: Option<UserId>,
    }

    #[async_trait]
    impl ReferralDirectory for MockReferralDirectory {
        async fn resolve(&self, _code: &str) -> Result<Option<UserId>, DomainError> {
            Ok(self.owner.clone())
        }
    }

    struct NoPrograms;

    #[async_trait]
    impl ReferralProgramStore for NoPrograms {
        async fn active_at(&self, _now: Timestamp) -> Result<Option<ReferralProgram>, DomainError> {
            Ok(None)
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn test_user() -> UserId {
        UserId::new("buyer-1").unwrap()
    }

    fn complete_profile() -> AcademicProfile {
        AcademicProfile {
            university: "GGSIPU".to_string(),
            degree: "B.Tech".to_string(),
            year: "2".to_string(),
            semester: "3".to_string(),
        }
    }

    fn resolver() -> DiscountResolver {
        DiscountResolver::new(
            Arc::new(MockCouponStore { coupon: None }),
            Arc::new(MockReferralDirectory { owner: None }),
            Arc::new(NoPrograms),
        )
    }

    fn command() -> CreatePurchaseCommand {
        CreatePurchaseCommand {
            user_id: test_user(),
            tier: PremiumTier::Silver,
            coupon_code: None,
            referral_code: None,
            wallet_balance: None,
        }
    }

    struct Fixture {
        repo: Arc<MockPurchaseRepository>,
        publisher: Arc<MockEventPublisher>,
        handler: CreatePurchaseHandler,
    }

    fn fixture(profile: Option<AcademicProfile>) -> Fixture {
        let repo = Arc::new(MockPurchaseRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CreatePurchaseHandler::new(
            repo.clone(),
            Arc::new(MockProfileProvider { profile }),
            Arc::new(MockGateway::new()),
            publisher.clone(),
            resolver(),
        );
        Fixture {
            repo,
            publisher,
            handler,
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_pending_purchase_with_gateway_order() {
        let f = fixture(Some(complete_profile()));

        let result = f.handler.handle(command()).await.unwrap();

        assert_eq!(result.purchase.status, PaymentStatus::Pending);
        assert!(result.purchase.order_id.as_str().starts_with("order_"));
        assert_eq!(result.quote.final_amount, Money::from_major(99));
        assert_eq!(f.repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn freezes_academic_snapshot_onto_purchase() {
        let f = fixture(Some(complete_profile()));

        let result = f.handler.handle(command()).await.unwrap();
        assert_eq!(result.purchase.academic, complete_profile());
    }

    #[tokio::test]
    async fn sets_expiry_from_tier_duration() {
        let f = fixture(Some(complete_profile()));

        let result = f.handler.handle(command()).await.unwrap();
        assert_eq!(
            result
                .purchase
                .purchase_date
                .days_until(&result.purchase.expiry_date),
            30
        );
    }

    #[tokio::test]
    async fn publishes_purchase_created_event() {
        let f = fixture(Some(complete_profile()));

        f.handler.handle(command()).await.unwrap();

        let events = f.publisher.published();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "premium.purchase_created.v1");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn fails_without_academic_profile() {
        let f = fixture(None);

        let result = f.handler.handle(command()).await;
        assert!(matches!(result, Err(PremiumError::ProfileIncomplete(_))));
        assert!(f.repo.saved().is_empty());
    }

    #[tokio::test]
    async fn fails_with_incomplete_profile() {
        let mut profile = complete_profile();
        profile.university = String::new();
        let f = fixture(Some(profile));

        let result = f.handler.handle(command()).await;
        assert!(matches!(result, Err(PremiumError::ProfileIncomplete(_))));
    }

    #[tokio::test]
    async fn fails_when_gateway_is_down() {
        let repo = Arc::new(MockPurchaseRepository::new());
        let handler = CreatePurchaseHandler::new(
            repo.clone(),
            Arc::new(MockProfileProvider {
                profile: Some(complete_profile()),
            }),
            Arc::new(MockGateway::failing()),
            Arc::new(MockEventPublisher::new()),
            resolver(),
        );

        let result = handler.handle(command()).await;
        assert!(matches!(result, Err(PremiumError::GatewayFailed { .. })));
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn fails_when_repository_save_fails() {
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = CreatePurchaseHandler::new(
            Arc::new(MockPurchaseRepository::failing()),
            Arc::new(MockProfileProvider {
                profile: Some(complete_profile()),
            }),
            Arc::new(MockGateway::new()),
            publisher.clone(),
            resolver(),
        );

        let result = handler.handle(command()).await;
        assert!(result.is_err());
        assert!(publisher.published().is_empty());
    }
}
