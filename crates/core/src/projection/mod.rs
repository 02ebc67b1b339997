//! Projection module - forward projection of a hypothetical monthly purchase plan.

mod projection_calculator;
mod projection_errors;
mod projection_model;

pub use projection_calculator::{project_dca, validate_projection_input};
pub use projection_errors::{InvalidField, ProjectionError};
pub use projection_model::{DcaProjection, DcaProjectionInput};
