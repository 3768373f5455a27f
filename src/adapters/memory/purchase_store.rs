//! In-memory purchase repository.
//!
//! Reference implementation of [`PurchaseRepository`] used by tests and
//! local development. Mirrors the guarantees a relational adapter gets
//! from the database: a unique index on the gateway order id and a
//! conditional UPDATE on the status column.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OrderId, Timestamp, UserId};
use crate::domain::premium::{PaymentStatus, Purchase};
use crate::ports::{CasOutcome, PurchaseRepository, SaveResult};

/// In-memory [`PurchaseRepository`] keyed by gateway order id.
#[derive(Default)]
pub struct InMemoryPurchaseStore {
    rows: RwLock<HashMap<String, Purchase>>,
}

impl InMemoryPurchaseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseStore {
    async fn save(&self, purchase: &Purchase) -> Result<SaveResult, DomainError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(purchase.order_id.as_str()) {
            return Ok(SaveResult::DuplicateOrder);
        }
        rows.insert(purchase.order_id.as_str().to_string(), purchase.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<Purchase>, DomainError> {
        Ok(self.rows.read().await.get(order_id.as_str()).cloned())
    }

    async fn update_if_status(
        &self,
        purchase: &Purchase,
        expected: PaymentStatus,
    ) -> Result<CasOutcome, DomainError> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(purchase.order_id.as_str()) {
            Some(stored) if stored.status == expected => {
                *stored = purchase.clone();
                Ok(CasOutcome::Applied)
            }
            Some(_) => Ok(CasOutcome::Conflict),
            None => Err(DomainError::new(
                crate::domain::foundation::ErrorCode::PurchaseNotFound,
                format!("no purchase row for order {}", purchase.order_id),
            )),
        }
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError> {
        let rows = self.rows.read().await;
        let mut purchases: Vec<Purchase> = rows
            .values()
            .filter(|p| p.user_id == *user_id)
            .cloned()
            .collect();
        purchases.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        Ok(purchases)
    }

    async fn latest_active_for_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Option<Purchase>, DomainError> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|p| p.user_id == *user_id && p.is_active_at(now))
            .max_by_key(|p| p.expiry_date)
            .cloned())
    }
}
