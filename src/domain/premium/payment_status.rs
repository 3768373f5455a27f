//! Payment status state machine.
//!
//! Tracks a purchase's position in the gateway payment lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Financial state of one purchase attempt.
///
/// A purchase is created `Pending` before any money moves and advances
/// only on a verified gateway callback. Entitlement is granted solely on
/// `Captured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting gateway confirmation. No entitlement.
    Pending,

    /// Funds reserved but not yet captured.
    Authorized,

    /// Payment completed. The one state that grants entitlement.
    Captured,

    /// Payment failed or was abandoned at the gateway.
    Failed,

    /// Captured payment later refunded. Entitlement revoked upstream.
    Refunded,
}

impl PaymentStatus {
    /// Returns true if this status grants entitlement to the purchased tier.
    pub fn grants_entitlement(&self) -> bool {
        matches!(self, PaymentStatus::Captured)
    }

    /// Returns true if the purchase reached a final financial outcome.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Captured | PaymentStatus::Failed | PaymentStatus::Refunded
        )
    }
}

impl StateMachine for PaymentStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, target),
            // From PENDING
            (Pending, Authorized)
                | (Pending, Captured)
                | (Pending, Failed)
            // From AUTHORIZED
                | (Authorized, Captured)
                | (Authorized, Failed)
            // From CAPTURED
                | (Captured, Refunded)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use PaymentStatus::*;
        match self {
            Pending => vec![Authorized, Captured, Failed],
            Authorized => vec![Captured, Failed],
            Captured => vec![Refunded],
            Failed => vec![],
            Refunded => vec![],
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Captured => "captured",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        };
        write!(f, "{}", s)
    }
}
