mod purchase_analysis;
mod summary_calculator;
pub mod summary_model;

pub use purchase_analysis::analyze_purchases;
pub use summary_calculator::calculate_summary;
pub use summary_model::*;
