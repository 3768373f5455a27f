//! Payment gateway port.
//!
//! The gateway's order-creation primitive, consumed as an opaque
//! capability. Callback signature verification happens in the gateway
//! adapter before the confirmation handler is ever invoked, so no
//! verification surface appears here.

use crate::domain::foundation::{DomainError, Money, OrderId};
use crate::domain::premium::Currency;
use async_trait::async_trait;

/// An order registered with the gateway, awaiting payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    pub order_id: OrderId,
    pub amount: Money,
    pub currency: Currency,
}

/// Port for the external payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Register an order for `amount` and return its gateway id.
    ///
    /// `receipt` is an opaque caller reference echoed back by the
    /// gateway (here, the purchase's internal id).
    async fn create_order(
        &self,
        amount: Money,
        currency: Currency,
        receipt: &str,
    ) -> Result<GatewayOrder, DomainError>;
}
