//! Counterfactual lump-sum purchase.

use log::debug;
use rust_decimal::Decimal;

use super::{BetterStrategy, ComparisonOutcome, LumpSumComparison, StrategyOutcome};
use crate::constants::MIN_PURCHASES_FOR_COMPARISON;
use crate::purchases::PurchaseSeries;

/// Compares the actual purchases with investing their combined capital on the
/// chronologically earliest purchase date at that day's price.
///
/// The lump sum wins only with a strictly higher current value.
pub fn compare_lump_sum(purchases: &PurchaseSeries, current_price: Decimal) -> ComparisonOutcome {
    let earliest = match purchases.first() {
        Some(first) if purchases.len() >= MIN_PURCHASES_FOR_COMPARISON => first,
        _ => {
            debug!(
                "Lump-sum comparison skipped: {} purchase(s), need {}",
                purchases.len(),
                MIN_PURCHASES_FOR_COMPARISON
            );
            return ComparisonOutcome::InsufficientData {
                purchase_count: purchases.len(),
            };
        }
    };

    let total_invested: Decimal = purchases.iter().map(|p| p.capital_spent).sum();
    let actual_quantity: Decimal = purchases.iter().map(|p| p.quantity_received).sum();
    let actual = outcome(total_invested, actual_quantity, current_price);

    let lump_quantity = total_invested / earliest.unit_price;
    let lump_sum = outcome(total_invested, lump_quantity, current_price);

    let better_strategy = if lump_sum.current_value > actual.current_value {
        BetterStrategy::LumpSum
    } else {
        BetterStrategy::Actual
    };

    ComparisonOutcome::Compared(LumpSumComparison {
        earliest_date: earliest.occurred_on,
        earliest_price: earliest.unit_price,
        quantity_difference: lump_sum.total_quantity - actual.total_quantity,
        value_difference: lump_sum.current_value - actual.current_value,
        return_difference: lump_sum.return_percent - actual.return_percent,
        better_strategy,
        actual,
        lump_sum,
    })
}

fn outcome(total_invested: Decimal, total_quantity: Decimal, current_price: Decimal) -> StrategyOutcome {
    let current_value = total_quantity * current_price;
    let return_percent = if total_invested.is_zero() {
        Decimal::ZERO
    } else {
        (current_value - total_invested) / total_invested * Decimal::ONE_HUNDRED
    };
    StrategyOutcome {
        total_invested,
        total_quantity,
        current_value,
        return_percent,
    }
}
