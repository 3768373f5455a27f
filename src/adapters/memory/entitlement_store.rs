//! In-memory entitlement store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::premium::{PremiumTier, UserEntitlement};
use crate::ports::EntitlementStore;

/// In-memory [`EntitlementStore`] keyed by user.
#[derive(Default)]
pub struct InMemoryEntitlementStore {
    entitlements: RwLock<HashMap<String, UserEntitlement>>,
}

impl InMemoryEntitlementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntitlementStore for InMemoryEntitlementStore {
    async fn get(&self, user_id: &UserId) -> Result<UserEntitlement, DomainError> {
        Ok(self
            .entitlements
            .read()
            .await
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_else(UserEntitlement::none))
    }

    async fn activate(
        &self,
        user_id: &UserId,
        tier: PremiumTier,
        expiry_date: Timestamp,
    ) -> Result<(), DomainError> {
        self.entitlements.write().await.insert(
            user_id.as_str().to_string(),
            UserEntitlement::active(tier, expiry_date),
        );
        Ok(())
    }
}
