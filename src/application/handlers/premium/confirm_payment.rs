//! ConfirmPaymentHandler - Command handler for verified gateway callbacks.
//!
//! This handler is the only writer of user entitlement fields. It is
//! idempotent against duplicate webhook delivery: a replayed capture is a
//! no-op acknowledged to the gateway, never an error (which would trigger
//! retries) and never a double-credit.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{OrderId, Timestamp};
use crate::domain::premium::{
    PaymentConfirmation, PaymentStatus, PremiumError, PremiumEvent, Purchase,
};
use crate::ports::{
    CacheInvalidator, CacheTag, CouponStore, EntitlementStore, EventPublisher, PurchaseRepository,
};

use super::{ProcessReferralRewardCommand, ProcessReferralRewardHandler};

/// Command carrying a verified gateway callback.
///
/// Signature verification happened upstream in the gateway adapter; by
/// the time this command exists the callback is authentic.
#[derive(Debug, Clone)]
pub struct ConfirmPaymentCommand {
    pub order_id: OrderId,
    pub payment_id: String,
    pub signature: String,
    pub status: PaymentStatus,
    pub method: String,
    pub failure_reason: Option<String>,
}

/// Result of confirmation processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPaymentResult {
    /// Payment captured; entitlement activated and side effects ran.
    Captured { purchase: Purchase },
    /// Payment reached a non-captured terminal status.
    Failed { purchase: Purchase },
    /// Duplicate delivery for an already settled purchase; nothing done.
    AlreadyProcessed,
}

/// Handler advancing a purchase on a verified gateway callback.
pub struct ConfirmPaymentHandler {
    purchases: Arc<dyn PurchaseRepository>,
    entitlements: Arc<dyn EntitlementStore>,
    coupons: Arc<dyn CouponStore>,
    cache: Arc<dyn CacheInvalidator>,
    events: Arc<dyn EventPublisher>,
    rewards: Arc<ProcessReferralRewardHandler>,
}

impl ConfirmPaymentHandler {
    pub fn new(
        purchases: Arc<dyn PurchaseRepository>,
        entitlements: Arc<dyn EntitlementStore>,
        coupons: Arc<dyn CouponStore>,
        cache: Arc<dyn CacheInvalidator>,
        events: Arc<dyn EventPublisher>,
        rewards: Arc<ProcessReferralRewardHandler>,
    ) -> Self {
        Self {
            purchases,
            entitlements,
            coupons,
            cache,
            events,
            rewards,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmPaymentCommand,
    ) -> Result<ConfirmPaymentResult, PremiumError> {
        // 1. The order must already be known. An unknown order means
        //    gateway misconfiguration or a forged callback; it must never
        //    fall back to creating an entitlement.
        let mut purchase = self
            .purchases
            .find_by_order_id(&cmd.order_id)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?
            .ok_or_else(|| {
                warn!(order_id = %cmd.order_id, "payment confirmation for unknown order");
                PremiumError::purchase_not_found(cmd.order_id.clone())
            })?;

        let confirmation = PaymentConfirmation {
            payment_id: cmd.payment_id,
            signature: cmd.signature,
            status: cmd.status,
            method: cmd.method,
            failure_reason: cmd.failure_reason,
        };

        // 2. Replayed capture with identical callback data: acknowledge
        //    without re-running any side effect.
        if purchase.is_replay_of(&confirmation) {
            info!(order_id = %purchase.order_id, "duplicate capture callback, no-op");
            return Ok(ConfirmPaymentResult::AlreadyProcessed);
        }

        // 3. Apply the transition in memory, then persist it behind a
        //    status compare-and-swap. Concurrent confirms of the same
        //    order race on the swap; exactly one wins and runs the side
        //    effects below.
        let prior_status = purchase.status;
        purchase
            .apply_confirmation(confirmation)
            .map_err(PremiumError::from)?;

        match self
            .purchases
            .update_if_status(&purchase, prior_status)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?
        {
            crate::ports::CasOutcome::Applied => {}
            crate::ports::CasOutcome::Conflict => {
                info!(order_id = %purchase.order_id, "lost confirmation race, no-op");
                return Ok(ConfirmPaymentResult::AlreadyProcessed);
            }
        }

        if purchase.status.grants_entitlement() {
            self.on_captured(&purchase).await?;
            Ok(ConfirmPaymentResult::Captured { purchase })
        } else {
            self.on_failed(&purchase).await?;
            Ok(ConfirmPaymentResult::Failed { purchase })
        }
    }

    /// Side effects of a captured payment, run exactly once per order.
    async fn on_captured(&self, purchase: &Purchase) -> Result<(), PremiumError> {
        // Latest-purchase-wins: the new capture replaces whatever
        // entitlement the user had (recorded decision, see DESIGN.md).
        self.entitlements
            .activate(&purchase.user_id, purchase.tier, purchase.expiry_date)
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        self.cache
            .invalidate(
                &purchase.user_id,
                &[CacheTag::PremiumStatus, CacheTag::PurchaseHistory],
            )
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        if let Some(code) = &purchase.discount_code {
            self.coupons
                .increment_uses(code)
                .await
                .map_err(|e| PremiumError::infrastructure(e.to_string()))?;
        }

        if let Some(referrer) = &purchase.referred_by {
            self.rewards
                .handle(ProcessReferralRewardCommand {
                    purchase_id: purchase.id,
                    referrer_id: referrer.clone(),
                    referee_id: purchase.user_id.clone(),
                    purchase_amount: purchase.final_amount,
                })
                .await?;
        }

        info!(
            order_id = %purchase.order_id,
            user_id = %purchase.user_id,
            tier = %purchase.tier,
            expiry = ?purchase.expiry_date,
            "payment captured, entitlement activated"
        );

        self.events
            .publish(PremiumEvent::PaymentCaptured {
                purchase_id: purchase.id,
                user_id: purchase.user_id.clone(),
                order_id: purchase.order_id.clone(),
                tier: purchase.tier,
                expiry_date: purchase.expiry_date,
                occurred_at: Timestamp::now(),
            })
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        Ok(())
    }

    /// A non-captured terminal status: record only, entitlement untouched.
    async fn on_failed(&self, purchase: &Purchase) -> Result<(), PremiumError> {
        info!(
            order_id = %purchase.order_id,
            status = %purchase.status,
            reason = ?purchase.failure_reason,
            "payment did not capture"
        );

        self.events
            .publish(PremiumEvent::PaymentFailed {
                purchase_id: purchase.id,
                user_id: purchase.user_id.clone(),
                order_id: purchase.order_id.clone(),
                reason: purchase.failure_reason.clone(),
                occurred_at: Timestamp::now(),
            })
            .await
            .map_err(|e| PremiumError::infrastructure(e.to_string()))?;

        Ok(())
    }
}
