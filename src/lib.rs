//! ScholarPass - Premium entitlement and pricing engine.
//!
//! This crate implements the paid core of the ScholarPass academic
//! content platform: the tier catalog, discount stacking, upgrade
//! proration, the payment lifecycle state machine, and content access
//! decisions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
