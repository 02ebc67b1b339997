mod irr_solver;
pub mod performance_model;
mod returns_calculator;


pub use irr_solver::{net_value, solve_irr, CashFlow};
pub use performance_model::*;
pub use returns_calculator::*;
