//! Alerts module - above/below price alert conditions.

mod alerts_evaluator;
mod alerts_model;

pub use alerts_evaluator::{alerts_to_trigger, evaluate_alerts};
pub use alerts_model::{AlertDirection, PriceAlert};
