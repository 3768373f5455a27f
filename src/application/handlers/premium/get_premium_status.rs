//! GetPremiumStatusHandler - Query handler for the user's premium standing.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::premium::{PremiumError, UserPremiumStatus};
use crate::ports::EntitlementStore;

/// Query for a user's current premium status.
#[derive(Debug, Clone)]
pub struct GetPremiumStatusQuery {
    pub user_id: UserId,
}

/// Handler returning the derived status view.
///
/// This is the most frequently called query; callers typically sit it
/// behind the `user-premium-status` cache tag.
pub struct GetPremiumStatusHandler {
    entitlements: Arc<dyn EntitlementStore>,
}

impl GetPremiumStatusHandler {
    pub fn new(entitlements: Arc<dyn EntitlementStore>) -> Self {
        Self { entitlements }
    }

    pub async fn handle(
        &self,
        query: GetPremiumStatusQuery,
    ) -> Result<UserPremiumStatus, PremiumError> {
        let entitlement = self
            .entitlements
            .get(&query.user_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        Ok(UserPremiumStatus::from_entitlement(
            &entitlement,
            Timestamp::now(),
        ))
    }
}
