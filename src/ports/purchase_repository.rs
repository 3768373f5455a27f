//! Purchase repository port (write side).
//!
//! Contract for persisting and retrieving Purchase records.
//!
//! # Design
//!
//! - **Unique order id**: the record store enforces a unique constraint on
//!   the gateway order id; `save` reports a duplicate instead of failing
//! - **Compare-and-swap confirmation**: duplicate webhook delivery may
//!   arrive on different process instances, so confirmation serializes on
//!   a status compare-and-swap at the record-store level, never on
//!   in-memory locking
//! - **Abandoned purchases**: a `Pending` purchase that is never confirmed
//!   simply stays pending; a reconciliation sweep is a natural extension
//!   point, not part of this port

use crate::domain::foundation::{DomainError, OrderId, Timestamp, UserId};
use crate::domain::premium::{PaymentStatus, Purchase};
use async_trait::async_trait;

/// Result of inserting a new purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// Row inserted.
    Inserted,
    /// A purchase with this gateway order id already exists.
    DuplicateOrder,
}

/// Result of a conditional status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasOutcome {
    /// The stored status matched and the update was applied.
    Applied,
    /// Another writer advanced the status first; nothing was written.
    Conflict,
}

/// Repository port for Purchase persistence.
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Insert a new pending purchase.
    async fn save(&self, purchase: &Purchase) -> Result<SaveResult, DomainError>;

    /// Find a purchase by its gateway order id.
    ///
    /// Returns `None` if no purchase references the order.
    async fn find_by_order_id(&self, order_id: &OrderId)
        -> Result<Option<Purchase>, DomainError>;

    /// Persist `purchase` only if the stored row's status still equals
    /// `expected`. This is the serialization point for concurrent
    /// confirmations of the same order.
    async fn update_if_status(
        &self,
        purchase: &Purchase,
        expected: PaymentStatus,
    ) -> Result<CasOutcome, DomainError>;

    /// All purchases for a user, most recent first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Purchase>, DomainError>;

    /// The user's currently active purchase with the latest expiry, if any.
    async fn latest_active_for_user(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> Result<Option<Purchase>, DomainError>;
}
