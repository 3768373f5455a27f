//! Discount resolver - evaluates coupon, referral, and wallet discounts.
//!
//! Each path is evaluated independently and additively; a coupon and a
//! referral discount may both apply to the same purchase. Ineligibility
//! is always soft: a path that does not apply contributes no line item,
//! it never fails the calculation.
//!
//! Resolution is read-only. Usage counters move only when a payment is
//! captured, so abandoned carts cannot drift them.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{DomainError, Money, Timestamp, UserId};
use crate::ports::{CouponStore, ReferralDirectory, ReferralProgramStore};

use super::{CouponCode, DiscountLineItem, DiscountSource, PremiumTier};

/// Inputs to one discount resolution.
#[derive(Debug, Clone)]
pub struct DiscountRequest {
    pub user_id: UserId,
    pub tier: PremiumTier,
    pub original_amount: Money,
    /// Raw coupon code as entered; normalized here.
    pub coupon_code: Option<String>,
    /// Raw referral code as entered.
    pub referral_code: Option<String>,
    /// Caller-supplied wallet balance when the user opted in. The
    /// resolver never looks balances up itself.
    pub wallet_balance: Option<Money>,
    pub now: Timestamp,
}

/// The outcome of a resolution.
///
/// Besides the line items, carries the normalized coupon code and the
/// resolved referrer so a purchase can be stamped with both. The
/// referrer is stamped whenever the code resolves to another user, even
/// when no program is active at quote time: reward eligibility is
/// re-evaluated at capture against the program active then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDiscounts {
    pub line_items: Vec<DiscountLineItem>,
    pub coupon: Option<CouponCode>,
    pub referrer: Option<UserId>,
}

impl ResolvedDiscounts {
    /// Sum of all line item amounts.
    pub fn total(&self) -> Money {
        self.line_items.iter().map(|d| d.amount).sum()
    }
}

/// Evaluates discount eligibility against the coupon and referral stores.
pub struct DiscountResolver {
    coupons: Arc<dyn CouponStore>,
    referrals: Arc<dyn ReferralDirectory>,
    programs: Arc<dyn ReferralProgramStore>,
}

impl DiscountResolver {
    pub fn new(
        coupons: Arc<dyn CouponStore>,
        referrals: Arc<dyn ReferralDirectory>,
        programs: Arc<dyn ReferralProgramStore>,
    ) -> Self {
        Self {
            coupons,
            referrals,
            programs,
        }
    }

    /// Resolve all applicable discounts for a request.
    ///
    /// Line items come back in stacking order: coupon, referral, wallet.
    /// Errors are infrastructure failures only; "nothing applies" is an
    /// empty list.
    pub async fn resolve(&self, request: &DiscountRequest) -> Result<ResolvedDiscounts, DomainError> {
        let mut line_items = Vec::new();

        let coupon = self.resolve_coupon(request, &mut line_items).await?;
        let referrer = self.resolve_referral(request, &mut line_items).await?;
        self.resolve_wallet(request, &mut line_items);

        Ok(ResolvedDiscounts {
            line_items,
            coupon,
            referrer,
        })
    }

    async fn resolve_coupon(
        &self,
        request: &DiscountRequest,
        line_items: &mut Vec<DiscountLineItem>,
    ) -> Result<Option<CouponCode>, DomainError> {
        let raw = match request.coupon_code.as_deref() {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let code = match CouponCode::try_new(raw) {
            Ok(code) => code,
            Err(_) => {
                debug!(code = raw, "coupon code failed normalization, skipping");
                return Ok(None);
            }
        };

        let coupon = match self.coupons.find_by_code(&code).await? {
            Some(coupon) => coupon,
            None => {
                debug!(code = %code, "coupon not found, skipping");
                return Ok(None);
            }
        };

        if !coupon.is_valid_at(request.now)
            || !coupon.applies_to(request.tier)
            || !coupon.meets_minimum(request.original_amount)
            || !coupon.has_global_capacity()
        {
            debug!(code = %code, "coupon ineligible for this order, skipping");
            return Ok(None);
        }

        let prior_uses = self
            .coupons
            .captured_uses_by_user(&code, &request.user_id)
            .await?;
        if !coupon.allows_user(prior_uses) {
            debug!(code = %code, prior_uses, "per-user coupon limit reached, skipping");
            return Ok(None);
        }

        let amount = coupon.discount_amount(request.original_amount);
        if amount.is_zero() {
            return Ok(None);
        }

        line_items.push(DiscountLineItem {
            source: DiscountSource::Coupon,
            code: Some(code.as_str().to_string()),
            amount,
            description: format!("Coupon {}", code),
        });
        Ok(Some(code))
    }

    async fn resolve_referral(
        &self,
        request: &DiscountRequest,
        line_items: &mut Vec<DiscountLineItem>,
    ) -> Result<Option<UserId>, DomainError> {
        let code = match request.referral_code.as_deref() {
            Some(code) if !code.trim().is_empty() => code.trim(),
            _ => return Ok(None),
        };

        let referrer = match self.referrals.resolve(code).await? {
            Some(referrer) => referrer,
            None => {
                debug!(code, "referral code did not resolve, skipping");
                return Ok(None);
            }
        };

        if referrer == request.user_id {
            debug!(code, "self-referral, skipping");
            return Ok(None);
        }

        let program = match self.programs.active_at(request.now).await? {
            Some(program) => program,
            None => {
                debug!(code, "no active referral program, no referee discount");
                return Ok(Some(referrer));
            }
        };

        let amount = program
            .referee_discount
            .amount_against(request.original_amount);
        if !amount.is_zero() {
            line_items.push(DiscountLineItem {
                source: DiscountSource::Referral,
                code: Some(code.to_string()),
                amount,
                description: format!("Referred by {}", referrer),
            });
        }
        Ok(Some(referrer))
    }

    fn resolve_wallet(&self, request: &DiscountRequest, line_items: &mut Vec<DiscountLineItem>) {
        let balance = match request.wallet_balance {
            Some(balance) if !balance.is_zero() => balance,
            _ => return,
        };

        let already_discounted: Money = line_items.iter().map(|d| d.amount).sum();
        let remaining = request.original_amount.saturating_sub(already_discounted);
        let amount = balance.min(remaining);
        if amount.is_zero() {
            return;
        }

        line_items.push(DiscountLineItem {
            source: DiscountSource::Wallet,
            code: None,
            amount,
            description: "Wallet credit".to_string(),
        });
    }
}
