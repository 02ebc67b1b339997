pub mod comparison_model;
mod lump_sum;

pub use comparison_model::*;
pub use lump_sum::compare_lump_sum;
