mod risk_calculator;
pub mod risk_model;

pub use risk_calculator::*;
pub use risk_model::*;
