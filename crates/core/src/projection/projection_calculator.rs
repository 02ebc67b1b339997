use rust_decimal::Decimal;

use super::{DcaProjection, DcaProjectionInput, InvalidField, ProjectionError};
use crate::constants::{MAX_PROJECTION_MONTHS, MIN_PROJECTION_MONTHS};

/// Projects the outcome of a monthly plan, rejecting the input if any field is invalid
/// or the figures would not fit in a `Decimal`.
pub fn project_dca(input: &DcaProjectionInput) -> Result<DcaProjection, ProjectionError> {
    validate_projection_input(input)?;
    compute_projection(input).ok_or(ProjectionError::OutOfRange)
}

fn compute_projection(input: &DcaProjectionInput) -> Option<DcaProjection> {
    let total_investment = input
        .monthly_investment
        .checked_mul(Decimal::from(input.duration_months))?;
    let projected_quantity = total_investment.checked_div(input.average_price)?;
    let projected_value = projected_quantity.checked_mul(input.future_price)?;
    let profit_loss = projected_value.checked_sub(total_investment)?;
    let profit_loss_percent = profit_loss
        .checked_div(total_investment)?
        .checked_mul(Decimal::ONE_HUNDRED)?;

    // Equal to the plan's quantity at a single average price.
    let lump_sum_quantity = projected_quantity;
    let lump_sum_value = projected_value;

    Some(DcaProjection {
        total_investment,
        projected_quantity,
        projected_value,
        profit_loss,
        profit_loss_percent,
        lump_sum_quantity,
        lump_sum_value,
        lump_sum_profit: profit_loss,
    })
}

pub fn validate_projection_input(input: &DcaProjectionInput) -> Result<(), ProjectionError> {
    let mut issues = Vec::new();

    if input.monthly_investment <= Decimal::ZERO {
        issues.push(must_be_positive("monthlyInvestment"));
    }
    if !(MIN_PROJECTION_MONTHS..=MAX_PROJECTION_MONTHS).contains(&input.duration_months) {
        issues.push(InvalidField {
            field: "durationMonths",
            reason: format!(
                "must be between {} and {} (got {})",
                MIN_PROJECTION_MONTHS, MAX_PROJECTION_MONTHS, input.duration_months
            ),
        });
    }
    if input.average_price <= Decimal::ZERO {
        issues.push(must_be_positive("averagePrice"));
    }
    if input.future_price <= Decimal::ZERO {
        issues.push(must_be_positive("futurePrice"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ProjectionError::InvalidInput(issues))
    }
}

fn must_be_positive(field: &'static str) -> InvalidField {
    InvalidField {
        field,
        reason: "must be greater than zero".to_string(),
    }
}
