//! Goals module - accumulation targets and progress against them.

mod goals_calculator;
mod goals_model;


pub use goals_calculator::{calculate_goal_progress, calculate_goals_progress};
pub use goals_model::{Goal, GoalProgress, GoalRecord};
