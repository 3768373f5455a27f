//! Premium-specific error types.
//!
//! Errors raised by pricing, purchase lifecycle, and access operations.
//!
//! Coupon and referral ineligibility are deliberately absent: the
//! discount resolver treats them as soft outcomes (no line item), never
//! as errors, so a bad code degrades to "no discount" rather than
//! failing the purchase.

use crate::domain::foundation::{DomainError, ErrorCode, Money, OrderId, UserId, ValidationError};

/// Premium domain errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PremiumError {
    /// Purchase creation without a completed academic profile.
    ProfileIncomplete(UserId),

    /// Confirmation callback referenced an unknown gateway order.
    ///
    /// Indicates gateway misconfiguration or a forged callback; never
    /// falls back to creating an entitlement.
    PurchaseNotFound(OrderId),

    /// A computed amount violated an internal invariant and must not
    /// reach the gateway.
    InvalidAmount { computed: Money },

    /// Invalid state for the requested operation.
    InvalidState { current: String, attempted: String },

    /// Upgrade requested to a tier that is not strictly higher.
    InvalidUpgrade { from: String, to: String },

    /// Payment gateway call failed.
    GatewayFailed { reason: String },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error (record store, cache).
    Infrastructure(String),
}

impl PremiumError {
    pub fn profile_incomplete(user_id: UserId) -> Self {
        PremiumError::ProfileIncomplete(user_id)
    }

    pub fn purchase_not_found(order_id: OrderId) -> Self {
        PremiumError::PurchaseNotFound(order_id)
    }

    pub fn invalid_amount(computed: Money) -> Self {
        PremiumError::InvalidAmount { computed }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        PremiumError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn invalid_upgrade(from: impl Into<String>, to: impl Into<String>) -> Self {
        PremiumError::InvalidUpgrade {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn gateway_failed(reason: impl Into<String>) -> Self {
        PremiumError::GatewayFailed {
            reason: reason.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PremiumError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PremiumError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PremiumError::ProfileIncomplete(_) => ErrorCode::ProfileIncomplete,
            PremiumError::PurchaseNotFound(_) => ErrorCode::PurchaseNotFound,
            PremiumError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            PremiumError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            PremiumError::InvalidUpgrade { .. } => ErrorCode::ValidationFailed,
            PremiumError::GatewayFailed { .. } => ErrorCode::GatewayError,
            PremiumError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PremiumError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            PremiumError::ProfileIncomplete(user_id) => format!(
                "User {} must complete their academic profile before purchasing",
                user_id
            ),
            PremiumError::PurchaseNotFound(order_id) => {
                format!("No purchase found for gateway order {}", order_id)
            }
            PremiumError::InvalidAmount { computed } => {
                format!("Computed amount {} violates pricing invariants", computed)
            }
            PremiumError::InvalidState { current, attempted } => {
                format!("Cannot {} a purchase in {} state", attempted, current)
            }
            PremiumError::InvalidUpgrade { from, to } => {
                format!("{} to {} is not an upgrade", from, to)
            }
            PremiumError::GatewayFailed { reason } => format!("Payment gateway error: {}", reason),
            PremiumError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PremiumError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PremiumError::Infrastructure(_) | PremiumError::GatewayFailed { .. }
        )
    }
}

impl std::fmt::Display for PremiumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PremiumError {}

impl From<DomainError> for PremiumError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => PremiumError::InvalidState {
                current: "unknown".to_string(),
                attempted: err.to_string(),
            },
            ErrorCode::GatewayError => PremiumError::GatewayFailed {
                reason: err.to_string(),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => PremiumError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => PremiumError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for PremiumError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        PremiumError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

impl From<PremiumError> for DomainError {
    fn from(err: PremiumError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}
