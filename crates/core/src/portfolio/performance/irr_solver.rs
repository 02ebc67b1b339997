//! Internal rate of return by Newton-Raphson.

use crate::settings::IrrSettings;

use super::IrrSolution;

/// A purchase expressed as a cash flow into the portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlow {
    pub amount: f64,
    /// Years between the cash flow and the valuation date.
    pub years_held: f64,
}

/// Net value at `rate`: the terminal value minus every contribution grown at `rate`
/// until the valuation date. Zero at the IRR.
pub fn net_value(rate: f64, cash_flows: &[CashFlow], terminal_value: f64) -> f64 {
    let growth = 1.0 + rate;
    terminal_value
        - cash_flows
            .iter()
            .map(|flow| flow.amount * growth.powf(flow.years_held))
            .sum::<f64>()
}

/// Solves `net_value(r) = 0`.
///
/// Starts at the configured guess and uses a forward-difference derivative. The rate
/// is clamped to the configured bounds after every step; the search stops once
/// `|net_value| < tolerance` or after the iteration cap. A flat or non-finite derivative
/// ends the search early as not converged.
pub fn solve_irr(cash_flows: &[CashFlow], terminal_value: f64, settings: &IrrSettings) -> IrrSolution {
    let clamp = |rate: f64| rate.max(settings.min_rate).min(settings.max_rate);
    let mut rate = clamp(settings.initial_guess);

    for iteration in 0..=settings.max_iterations {
        let value = net_value(rate, cash_flows, terminal_value);
        if !value.is_finite() {
            return IrrSolution {
                rate,
                iterations: iteration,
                converged: false,
            };
        }
        if value.abs() < settings.tolerance {
            return IrrSolution {
                rate,
                iterations: iteration,
                converged: true,
            };
        }
        if iteration == settings.max_iterations {
            break;
        }

        let step = settings.derivative_step;
        let derivative = (net_value(rate + step, cash_flows, terminal_value) - value) / step;
        if derivative == 0.0 || !derivative.is_finite() {
            return IrrSolution {
                rate,
                iterations: iteration,
                converged: false,
            };
        }

        rate = clamp(rate - value / derivative);
    }

    IrrSolution {
        rate,
        iterations: settings.max_iterations,
        converged: false,
    }
}
