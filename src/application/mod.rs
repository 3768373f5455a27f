//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports. Following CQRS, it separates command handlers (write) from
//! query handlers (read).

pub mod handlers;

pub use handlers::premium::{
    CalculatePriceHandler, CalculatePriceQuery,
    CheckContentAccessHandler, CheckContentAccessQuery,
    ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult,
    CreatePurchaseCommand, CreatePurchaseHandler, CreatePurchaseResult,
    GetPremiumStatusHandler, GetPremiumStatusQuery,
    GetPurchaseHistoryHandler, GetPurchaseHistoryQuery,
    ProcessReferralRewardCommand, ProcessReferralRewardHandler, ProcessReferralRewardResult,
    QuoteUpgradeHandler, QuoteUpgradeQuery, UpgradeQuote,
};
