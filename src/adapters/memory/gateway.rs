//! Fake payment gateway.
//!
//! Issues deterministic order ids for tests and local development. The
//! production adapter talks to the real gateway's order API and verifies
//! callback signatures before the confirmation handler ever runs.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Money, OrderId};
use crate::domain::premium::Currency;
use crate::ports::{GatewayOrder, PaymentGateway};

/// Fake [`PaymentGateway`] handing out sequential order ids.
#[derive(Default)]
pub struct FakePaymentGateway {
    sequence: AtomicU64,
    orders: RwLock<Vec<GatewayOrder>>,
}

impl FakePaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders created so far, in creation order.
    pub async fn created_orders(&self) -> Vec<GatewayOrder> {
        self.orders.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for FakePaymentGateway {
    async fn create_order(
        &self,
        amount: Money,
        currency: Currency,
        _receipt: &str,
    ) -> Result<GatewayOrder, DomainError> {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst);
        let order = GatewayOrder {
            order_id: OrderId::new(format!("order_fake{:06}", n))
                .map_err(DomainError::from)?,
            amount,
            currency,
        };
        self.orders.write().await.push(order.clone());
        Ok(order)
    }
}
