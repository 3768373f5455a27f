//! CheckContentAccessHandler - Query handler for content access checks.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::premium::{
    evaluate_access, AccessDenialReason, AccessVerdict, ContentRequirements, UserEntitlement,
    UserPremiumStatus,
};
use crate::ports::{EntitlementStore, PurchaseRepository};

/// Query to check a user's access to one content item.
#[derive(Debug, Clone)]
pub struct CheckContentAccessQuery {
    pub user_id: UserId,
    pub requirements: ContentRequirements,
}

/// Handler for access checks.
///
/// Never fails: a read failure degrades to a denial so a content page can
/// always render its locked state. Academic attributes come from the
/// frozen snapshot on the user's most recent active purchase, not the
/// live profile.
pub struct CheckContentAccessHandler {
    entitlements: Arc<dyn EntitlementStore>,
    purchases: Arc<dyn PurchaseRepository>,
}

impl CheckContentAccessHandler {
    pub fn new(
        entitlements: Arc<dyn EntitlementStore>,
        purchases: Arc<dyn PurchaseRepository>,
    ) -> Self {
        Self {
            entitlements,
            purchases,
        }
    }

    pub async fn handle(&self, query: CheckContentAccessQuery) -> AccessVerdict {
        let now = Timestamp::now();

        let entitlement = match self.entitlements.get(&query.user_id).await {
            Ok(entitlement) => entitlement,
            Err(err) => {
                warn!(user_id = %query.user_id, error = %err, "entitlement read failed, denying access");
                return Self::denied(query.requirements, now);
            }
        };

        let purchase = match self
            .purchases
            .latest_active_for_user(&query.user_id, now)
            .await
        {
            Ok(purchase) => purchase,
            Err(err) => {
                warn!(user_id = %query.user_id, error = %err, "purchase read failed, denying access");
                return Self::denied(query.requirements, now);
            }
        };

        evaluate_access(&entitlement, purchase.as_ref(), &query.requirements, now)
    }

    fn denied(requirements: ContentRequirements, now: Timestamp) -> AccessVerdict {
        AccessVerdict {
            can_access: false,
            reason: Some(AccessDenialReason::NoPremium),
            mismatches: vec![],
            user_status: UserPremiumStatus::from_entitlement(&UserEntitlement::none(), now),
            requirements,
        }
    }
}
