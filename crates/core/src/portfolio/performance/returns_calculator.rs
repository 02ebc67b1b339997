//! Time-weighted and money-weighted returns with their annualization policy.

use chrono::NaiveDate;
use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::irr_solver::{solve_irr, CashFlow};
use super::{PerformanceMetrics, ReturnMeasure, TotalReturnReason};
use crate::purchases::PurchaseSeries;
use crate::settings::AnalyticsSettings;
use crate::utils::time_utils::{days_between, years_between};

pub fn calculate_performance(
    purchases: &PurchaseSeries,
    current_price: Decimal,
    as_of: NaiveDate,
    settings: &AnalyticsSettings,
) -> PerformanceMetrics {
    PerformanceMetrics {
        time_weighted_return: calculate_time_weighted_return(purchases, current_price, as_of, settings),
        money_weighted_return: calculate_money_weighted_return(purchases, current_price, as_of, settings),
    }
}

/// Price-path return from the first purchase to the current price.
///
/// Purchase sizes play no part. The figure is annualized only when the holding period
/// reaches the configured threshold and the loss is not beyond the configured floor;
/// an annualized value that is non-finite or outside the cap is replaced by the total
/// return.
pub fn calculate_time_weighted_return(
    purchases: &PurchaseSeries,
    current_price: Decimal,
    as_of: NaiveDate,
    settings: &AnalyticsSettings,
) -> ReturnMeasure {
    let first = match purchases.first() {
        Some(first) => first,
        None => return ReturnMeasure::empty(),
    };

    let total_return = to_f64((current_price - first.unit_price) / first.unit_price);
    let days = days_between(first.occurred_on, as_of);
    let holding_days = days as f64;

    if days < settings.twr_annualize_min_days {
        return ReturnMeasure::total(
            total_return * 100.0,
            holding_days,
            TotalReturnReason::HoldingPeriodTooShort,
        );
    }
    if total_return <= settings.twr_loss_floor {
        return ReturnMeasure::total(
            total_return * 100.0,
            holding_days,
            TotalReturnReason::LossBeyondFloor,
        );
    }

    let annualized = annualize(total_return, holding_days, settings.days_per_year);
    if annualized.is_finite() && annualized.abs() <= settings.twr_annualized_cap {
        ReturnMeasure::annualized(annualized * 100.0, holding_days)
    } else {
        debug!(
            "TWR annualization rejected ({} over {} days); reporting total return",
            annualized, days
        );
        ReturnMeasure::total(
            total_return * 100.0,
            holding_days,
            TotalReturnReason::AnnualizedOutOfRange,
        )
    }
}

/// Cash-flow-weighted return: the IRR of every purchase against today's holding value.
///
/// A holding worth nothing, or a capital-weighted holding period below the configured
/// minimum, reports the simple return on invested capital without running the solver.
/// Otherwise the IRR is reported when the solver converged and the rate lies within the
/// configured cap, falling back to the simple return.
pub fn calculate_money_weighted_return(
    purchases: &PurchaseSeries,
    current_price: Decimal,
    as_of: NaiveDate,
    settings: &AnalyticsSettings,
) -> ReturnMeasure {
    let total_invested: Decimal = purchases.iter().map(|p| p.capital_spent).sum();
    if purchases.is_empty() || total_invested <= Decimal::ZERO {
        return ReturnMeasure::empty();
    }

    let total_quantity: Decimal = purchases.iter().map(|p| p.quantity_received).sum();
    let portfolio_value = total_quantity * current_price;
    let simple_return = to_f64((portfolio_value - total_invested) / total_invested);

    let weighted_days: f64 = purchases
        .iter()
        .map(|purchase| {
            let weight = to_f64(purchase.capital_spent / total_invested);
            weight * days_between(purchase.occurred_on, as_of) as f64
        })
        .sum();

    if portfolio_value <= Decimal::ZERO {
        debug!("Holding has no current value; reporting total return");
        return ReturnMeasure::total(
            simple_return * 100.0,
            weighted_days,
            TotalReturnReason::NoCurrentPrice,
        );
    }
    if weighted_days < settings.mwr_annualize_min_days {
        return ReturnMeasure::total(
            simple_return * 100.0,
            weighted_days,
            TotalReturnReason::HoldingPeriodTooShort,
        );
    }

    let cash_flows: Vec<CashFlow> = purchases
        .iter()
        .map(|purchase| CashFlow {
            amount: to_f64(purchase.capital_spent),
            years_held: years_between(purchase.occurred_on, as_of, settings.days_per_year),
        })
        .collect();

    let solution = solve_irr(&cash_flows, to_f64(portfolio_value), &settings.irr);

    let measure = if !solution.converged {
        warn!(
            "IRR did not converge after {} iterations (last rate {}); reporting total return",
            solution.iterations, solution.rate
        );
        ReturnMeasure::total(
            simple_return * 100.0,
            weighted_days,
            TotalReturnReason::SolverDidNotConverge,
        )
    } else if !solution.rate.is_finite() || solution.rate.abs() > settings.mwr_annualized_cap {
        debug!("IRR {} outside the reporting cap; reporting total return", solution.rate);
        ReturnMeasure::total(
            simple_return * 100.0,
            weighted_days,
            TotalReturnReason::AnnualizedOutOfRange,
        )
    } else {
        ReturnMeasure::annualized(solution.rate * 100.0, weighted_days)
    };

    measure.with_solver(solution)
}

/// Compounds a total return over `days` into a yearly rate.
pub fn annualize(total_return: f64, days: f64, days_per_year: f64) -> f64 {
    if days <= 0.0 {
        return total_return;
    }
    (1.0 + total_return).powf(days_per_year / days) - 1.0
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
