//! Drawdown and risk-adjusted return over the cumulative series.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::RiskMetrics;
use crate::portfolio::cumulative::CumulativePoint;

pub fn calculate_risk_metrics(points: &[CumulativePoint]) -> RiskMetrics {
    let period_returns = calculate_period_returns(points);
    RiskMetrics {
        max_drawdown_percent: calculate_max_drawdown(points),
        sharpe_ratio: sharpe_from_returns(&period_returns),
        return_observations: period_returns.len(),
    }
}

/// Largest peak-to-trough fall of the running return percentage, in percentage points.
///
/// Measured on return percentage rather than raw value because invested capital grows
/// over the series; a new purchase is not a drawdown. Always >= 0, and 0 for fewer than
/// two points.
pub fn calculate_max_drawdown(points: &[CumulativePoint]) -> Decimal {
    if points.len() < 2 {
        return Decimal::ZERO;
    }

    let mut peak_return: Option<Decimal> = None;
    let mut max_drawdown = Decimal::ZERO;

    for point in points {
        let current_return = point.return_percent();
        let peak = match peak_return {
            Some(peak) if peak >= current_return => peak,
            _ => {
                peak_return = Some(current_return);
                current_return
            }
        };
        max_drawdown = max_drawdown.max(peak - current_return);
    }

    max_drawdown
}

/// Cash-flow-adjusted return between consecutive points.
///
/// Capital added between two points is treated as arriving at the start of the
/// interval, so `(current - (previous + flow)) / (previous + flow)`. Intervals whose
/// adjusted base is not positive are skipped.
pub fn calculate_period_returns(points: &[CumulativePoint]) -> Vec<f64> {
    points
        .windows(2)
        .filter_map(|window| {
            let (prev, curr) = (&window[0], &window[1]);
            let cash_flow = curr.cumulative_capital - prev.cumulative_capital;
            let base = prev.portfolio_value + cash_flow;
            if base <= Decimal::ZERO {
                return None;
            }
            ((curr.portfolio_value - base) / base).to_f64()
        })
        .collect()
}

/// Mean over population standard deviation of the period returns.
///
/// No risk-free rate is subtracted and no annualization factor is applied: purchase
/// intervals are irregular, so this is a per-interval ratio and is not comparable with
/// a daily or annual Sharpe ratio. Zero when there is no dispersion.
pub fn sharpe_from_returns(period_returns: &[f64]) -> f64 {
    if period_returns.is_empty() {
        return 0.0;
    }

    let count = period_returns.len() as f64;
    let mean = period_returns.iter().sum::<f64>() / count;
    let variance = period_returns
        .iter()
        .map(|r| {
            let diff = r - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;
    let std_dev = variance.sqrt();

    if std_dev > 0.0 && std_dev.is_finite() {
        mean / std_dev
    } else {
        0.0
    }
}
