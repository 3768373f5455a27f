//! Premium handlers - the produced interface of the engine.
//!
//! One command/query handler per operation. Commands write through ports;
//! queries are read-only.

mod calculate_price;
mod check_content_access;
mod confirm_payment;
mod create_purchase;
mod get_premium_status;
mod get_purchase_history;
mod process_referral_reward;
mod quote_upgrade;

pub use calculate_price::{CalculatePriceHandler, CalculatePriceQuery};
pub use check_content_access::{CheckContentAccessHandler, CheckContentAccessQuery};
pub use confirm_payment::{ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult};
pub use create_purchase::{CreatePurchaseCommand, CreatePurchaseHandler, CreatePurchaseResult};
pub use get_premium_status::{GetPremiumStatusHandler, GetPremiumStatusQuery};
pub use get_purchase_history::{GetPurchaseHistoryHandler, GetPurchaseHistoryQuery};
pub use process_referral_reward::{
    ProcessReferralRewardCommand, ProcessReferralRewardHandler, ProcessReferralRewardResult,
};
pub use quote_upgrade::{QuoteUpgradeHandler, QuoteUpgradeQuery, UpgradeQuote};
