mod cumulative_builder;
pub mod cumulative_model;
mod roi_series;

pub use cumulative_builder::build_cumulative_series;
pub use cumulative_model::*;
pub use roi_series::{build_roi_series, filter_by_time_range};
