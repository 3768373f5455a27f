//! Entitlement store port.
//!
//! Read/write access to the user's cached entitlement fields.
//!
//! # Single writer
//!
//! Only the payment confirmation handler may call [`EntitlementStore::
//! activate`]. No other component sets the user's tier, expiry, or
//! active flag; everything else reads.
//!
//! # Overwrite policy
//!
//! `activate` unconditionally replaces the stored entitlement with the
//! new purchase's tier and expiry (latest-purchase-wins). A purchase
//! captured out of order can therefore replace a longer-lived, higher
//! entitlement; see DESIGN.md for the recorded decision.

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::premium::{PremiumTier, UserEntitlement};
use async_trait::async_trait;

/// Store port for the user's cached entitlement.
#[async_trait]
pub trait EntitlementStore: Send + Sync {
    /// The user's current entitlement; a user who never purchased gets
    /// [`UserEntitlement::none`].
    async fn get(&self, user_id: &UserId) -> Result<UserEntitlement, DomainError>;

    /// Replace the user's entitlement with a captured purchase's tier
    /// and expiry.
    async fn activate(
        &self,
        user_id: &UserId,
        tier: PremiumTier,
        expiry_date: Timestamp,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entitlement_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn EntitlementStore) {}
    }
}
