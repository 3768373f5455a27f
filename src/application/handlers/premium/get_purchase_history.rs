//! GetPurchaseHistoryHandler - Query handler for a user's purchase history.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::premium::{PremiumError, Purchase};
use crate::ports::PurchaseRepository;

/// Query for a user's purchase history.
#[derive(Debug, Clone)]
pub struct GetPurchaseHistoryQuery {
    pub user_id: UserId,
}

/// Handler returning all of a user's purchases, most recent first.
///
/// Callers typically sit this behind the `user-purchase-history` cache
/// tag; the confirmation handler invalidates it on capture.
pub struct GetPurchaseHistoryHandler {
    purchases: Arc<dyn PurchaseRepository>,
}

impl GetPurchaseHistoryHandler {
    pub fn new(purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { purchases }
    }

    pub async fn handle(
        &self,
        query: GetPurchaseHistoryQuery,
    ) -> Result<Vec<Purchase>, PremiumError> {
        self.purchases
            .list_for_user(&query.user_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, OrderId, PurchaseId, Timestamp};
    use crate::domain::premium::{
        AcademicProfile, Currency, PaymentStatus, PremiumTier, PriceQuote, TierConfig,
    };
    use crate::ports::{CasOutcome, SaveResult};
    use async_trait::async_trait;

    struct MockPurchaseRepository {
        purchases: Vec<Purchase>,
    }

    #[async_trait]
    impl PurchaseRepository for MockPurchaseRepository {
        async fn save(&self, _purchase: &Purchase) -> Result<SaveResult, DomainError> {
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
        ) -> Result<CasOutcome, DomainError> {
            Ok(CasOutcome::Applied)
        }

        async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError> {
            Ok(self
                .purchases
                .iter()
                .filter(|p| p.user_id == *user_id)
                .cloned()
                .collect())
        }

        async fn latest_active_for_user(
            &self,
            _user_id: &UserId,
            _now: Timestamp,
        ) -> Result<Option<Purchase>, DomainError> {
            Ok(None)
        }
    }

    fn purchase_for(user: &str) -> Purchase {
        let config = TierConfig::for_tier(PremiumTier::Silver);
        let quote = PriceQuote::assemble(
            PremiumTier::Silver,
            config.price,
            vec![],
            Currency::Inr,
        );
        Purchase::create(
            PurchaseId::new(),
            UserId::new(user).unwrap(),
            OrderId::new(format!("order_{}", user)).unwrap(),
            &quote,
            config.duration_days,
            AcademicProfile {
                university: "GGSIPU".to_string(),
                degree: "B.Tech".to_string(),
                year: "2".to_string(),
                semester: "3".to_string(),
            },
            None,
            None,
            None,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn returns_only_the_users_purchases() {
        let handler = GetPurchaseHistoryHandler::new(Arc::new(MockPurchaseRepository {
            purchases: vec![purchase_for("alice"), purchase_for("bob")],
        }));

        let history = handler
            .handle(GetPurchaseHistoryQuery {
                user_id: UserId::new("alice").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_id, UserId::new("alice").unwrap());
    }

    #[tokio::test]
    async fn empty_history_for_new_user() {
        let handler =
            GetPurchaseHistoryHandler::new(Arc::new(MockPurchaseRepository { purchases: vec![] }));

        let history = handler
            .handle(GetPurchaseHistoryQuery {
                user_id: UserId::new("nobody").unwrap(),
            })
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}
