use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Goal, GoalProgress};
use crate::utils::time_utils::days_between;

/// Measures `current_quantity` against the goal's target on `as_of`.
///
/// A ratio too large for `Decimal` counts as a met goal.
pub fn calculate_goal_progress(goal: &Goal, current_quantity: Decimal, as_of: NaiveDate) -> GoalProgress {
    let progress_percent = if goal.target_quantity <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        current_quantity
            .checked_div(goal.target_quantity)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ONE_HUNDRED)
            .min(Decimal::ONE_HUNDRED)
    };
    let is_complete = progress_percent >= Decimal::ONE_HUNDRED;
    let days_remaining = goal.deadline.map(|deadline| days_between(as_of, deadline));

    GoalProgress {
        goal_id: goal.id.clone(),
        current_quantity,
        progress_percent,
        remaining_quantity: goal
            .target_quantity
            .checked_sub(current_quantity)
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO),
        days_remaining,
        is_complete,
        is_overdue: !is_complete && days_remaining.is_some_and(|days| days < 0),
    }
}

pub fn calculate_goals_progress(goals: &[Goal], current_quantity: Decimal, as_of: NaiveDate) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| calculate_goal_progress(goal, current_quantity, as_of))
        .collect()
}
