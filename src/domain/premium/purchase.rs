//! Purchase aggregate - one payment attempt and its outcome.
//!
//! The Purchase row is the single source of truth for "did this payment
//! happen". The user's live entitlement fields are a cache of the most
//! recent captured Purchase.
//!
//! # Design Decisions
//!
//! - **One row per attempt**: keyed by gateway order id, unique at the
//!   record-store level
//! - **Money in minor units**: all amounts are i64 paise (not floats)
//! - **Frozen academic snapshot**: entitlement scope must not change if
//!   the user edits their profile after purchase

use crate::domain::foundation::{
    DomainError, ErrorCode, Money, OrderId, PurchaseId, StateMachine, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

use super::{AcademicProfile, CouponCode, Currency, PaymentStatus, PremiumTier, PriceQuote};

/// Verified gateway callback data applied at confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub payment_id: String,
    pub signature: String,
    pub status: PaymentStatus,
    pub method: String,
    /// Gateway-reported reason on a failed payment.
    pub failure_reason: Option<String>,
}

/// Purchase aggregate - a persistent record of one payment attempt.
///
/// # Invariants
///
/// - `order_id` is globally unique (idempotency key for confirmation)
/// - `payment_id`/`signature` are set only once, at confirmation
/// - `final_amount = max(0, original_amount - discount_amount)`
/// - Status transitions follow the [`PaymentStatus`] state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: PurchaseId,
    pub user_id: UserId,

    /// Gateway order id, created externally before this record.
    pub order_id: OrderId,
    /// Gateway payment id, populated on confirmation.
    pub payment_id: Option<String>,
    /// Gateway signature, populated on confirmation.
    pub signature: Option<String>,
    /// Payment method reported by the gateway.
    pub payment_method: Option<String>,

    pub tier: PremiumTier,
    pub duration_days: u32,

    pub original_amount: Money,
    pub discount_amount: Money,
    pub final_amount: Money,
    pub currency: Currency,

    pub status: PaymentStatus,

    /// Academic attributes frozen at purchase time.
    pub academic: AcademicProfile,

    pub discount_code: Option<CouponCode>,
    pub referral_code: Option<String>,
    pub referred_by: Option<UserId>,

    pub purchase_date: Timestamp,
    pub expiry_date: Timestamp,

    /// True only while the purchase both captured and unexpired.
    pub is_active: bool,
    /// True once a gateway callback has been applied.
    pub webhook_processed: bool,
    pub failure_reason: Option<String>,
}

impl Purchase {
    /// Creates a pending purchase from a quote and a gateway order id.
    ///
    /// The caller has already priced the order and obtained the order id
    /// from the gateway; nothing here performs I/O.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: PurchaseId,
        user_id: UserId,
        order_id: OrderId,
        quote: &PriceQuote,
        duration_days: u32,
        academic: AcademicProfile,
        discount_code: Option<CouponCode>,
        referral_code: Option<String>,
        referred_by: Option<UserId>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            order_id,
            payment_id: None,
            signature: None,
            payment_method: None,
            tier: quote.tier,
            duration_days,
            original_amount: quote.original_amount,
            discount_amount: quote.total_discount,
            final_amount: quote.final_amount,
            currency: quote.currency,
            status: PaymentStatus::Pending,
            academic,
            discount_code,
            referral_code,
            referred_by,
            purchase_date: now,
            expiry_date: now.add_days(duration_days as i64),
            is_active: false,
            webhook_processed: false,
            failure_reason: None,
        }
    }

    /// True when a callback carries the same payment we already captured.
    ///
    /// Duplicate webhook delivery is expected; a replay must be a no-op,
    /// never a re-credit.
    pub fn is_replay_of(&self, confirmation: &PaymentConfirmation) -> bool {
        self.status == PaymentStatus::Captured
            && confirmation.status == PaymentStatus::Captured
            && self.payment_id.as_deref() == Some(confirmation.payment_id.as_str())
    }

    /// Applies a verified gateway confirmation.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_STATE_TRANSITION` if the callback status is not
    /// reachable from the current status.
    pub fn apply_confirmation(
        &mut self,
        confirmation: PaymentConfirmation,
    ) -> Result<(), DomainError> {
        self.status = self
            .status
            .transition_to(confirmation.status)
            .map_err(|_| {
                DomainError::new(
                    ErrorCode::InvalidStateTransition,
                    format!(
                        "Cannot move purchase {} from {} to {}",
                        self.order_id, self.status, confirmation.status
                    ),
                )
            })?;

        self.payment_id = Some(confirmation.payment_id);
        self.signature = Some(confirmation.signature);
        self.payment_method = Some(confirmation.method);
        self.webhook_processed = true;
        self.is_active = self.status.grants_entitlement();
        if !self.status.grants_entitlement() {
            self.failure_reason = confirmation.failure_reason;
        }
        Ok(())
    }

    /// True while the purchase grants entitlement at `now`.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        self.is_active && self.status.grants_entitlement() && now.is_before(&self.expiry_date)
    }
}
