//! Stackfolio Core - analytics for a recurring-purchase portfolio.
//!
//! This crate contains the calculation engine behind Stackfolio: cumulative holdings,
//! aggregate statistics, drawdown and risk-adjusted return, time- and money-weighted
//! returns, lump-sum comparison, and goal tracking. It performs no I/O; every result
//! is a function of the purchase history, the current price, and the valuation date.

pub mod alerts;
pub mod analytics;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod portfolio;
pub mod projection;
pub mod purchases;
pub mod settings;
pub mod utils;

// Re-export the engine entry points
pub use analytics::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
