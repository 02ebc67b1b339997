//! Portfolio module - analytics over a single-asset purchase history.
//!
//! Calculators here use plain `Decimal` arithmetic and expect purchases that passed
//! `validate_purchases` and a current price within `MAX_AMOUNT`.

pub mod comparison;
pub mod cumulative;
pub mod performance;
pub mod risk;
pub mod summary;

pub use comparison::*;
pub use cumulative::*;
pub use performance::*;
pub use risk::*;
pub use summary::*;
