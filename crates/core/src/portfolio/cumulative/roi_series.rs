use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use super::{RoiPoint, TimeRange};
use crate::purchases::PurchaseSeries;
use crate::utils::time_utils::{months_before, start_of_year};

/// ROI history for charting: one point per purchase, every point marked at the
/// current price.
///
/// Unlike the cumulative series, this answers "what is each tranche of holdings worth
/// today", so points carry no contemporaneous price.
pub fn build_roi_series(purchases: &PurchaseSeries, current_price: Decimal) -> Vec<RoiPoint> {
    let mut cumulative_quantity = Decimal::ZERO;
    let mut cumulative_capital = Decimal::ZERO;

    purchases
        .iter()
        .map(|purchase| {
            cumulative_quantity += purchase.quantity_received;
            cumulative_capital += purchase.capital_spent;
            let portfolio_value = cumulative_quantity * current_price;
            let profit = portfolio_value - cumulative_capital;
            let roi_percent = if cumulative_capital > Decimal::ZERO {
                profit / cumulative_capital * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };

            RoiPoint {
                date: purchase.occurred_on,
                cumulative_quantity,
                cumulative_capital,
                portfolio_value,
                roi_percent,
                profit,
            }
        })
        .collect()
}

impl TimeRange {
    /// Earliest date included by this range, or `None` for the whole history.
    pub fn cutoff(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeRange::OneDay => Some(as_of - Duration::days(1)),
            TimeRange::OneWeek => Some(as_of - Duration::days(7)),
            TimeRange::OneMonth => Some(months_before(as_of, 1)),
            TimeRange::ThreeMonths => Some(months_before(as_of, 3)),
            TimeRange::SixMonths => Some(months_before(as_of, 6)),
            TimeRange::YearToDate => Some(start_of_year(as_of)),
            TimeRange::OneYear => Some(months_before(as_of, 12)),
            TimeRange::All => None,
        }
    }
}

/// Keeps the points dated on or after the range's cutoff.
pub fn filter_by_time_range(points: &[RoiPoint], range: TimeRange, as_of: NaiveDate) -> Vec<RoiPoint> {
    match range.cutoff(as_of) {
        Some(cutoff) => points
            .iter()
            .filter(|point| point.date >= cutoff)
            .cloned()
            .collect(),
        None => points.to_vec(),
    }
}
