//! Per-purchase unrealized gain/loss breakdown.

use rust_decimal::Decimal;

use super::{PurchaseAnalysis, PurchaseAnalysisSummary, PurchasePerformance};
use crate::purchases::PurchaseEvent;

/// Values every purchase at the current price.
///
/// Purchases keep the caller's order; best and worst are picked by unrealized
/// percentage, with ties resolved towards the earlier purchase for "best" and the
/// later one for "worst". Returns `None` when there is nothing to analyse.
pub fn analyze_purchases(
    purchases: &[PurchaseEvent],
    current_price: Decimal,
) -> Option<PurchaseAnalysis> {
    if purchases.is_empty() {
        return None;
    }

    let details: Vec<PurchasePerformance> = purchases
        .iter()
        .enumerate()
        .map(|(position, purchase)| evaluate_purchase(position + 1, purchase, current_price))
        .collect();

    let total_invested: Decimal = details.iter().map(|p| p.capital_spent).sum();
    let total_current_value: Decimal = details.iter().map(|p| p.current_value).sum();
    let profitable_purchases = details
        .iter()
        .filter(|p| p.unrealized_gain_loss > Decimal::ZERO)
        .count();
    let losing_purchases = details
        .iter()
        .filter(|p| p.unrealized_gain_loss < Decimal::ZERO)
        .count();

    let ranked = rank_by_unrealized_percent(&details);
    let best_purchase = ranked[0].clone();
    let worst_purchase = ranked[ranked.len() - 1].clone();

    let analysis = PurchaseAnalysis {
        summary: PurchaseAnalysisSummary {
            total_invested,
            total_current_value,
            total_unrealized_gain_loss: total_current_value - total_invested,
            profitable_purchases,
            losing_purchases,
            best_purchase,
            worst_purchase,
        },
        purchases: details,
    };

    Some(analysis)
}

/// Orders purchases from best to worst unrealized percentage; ties keep input order.
pub(crate) fn rank_by_unrealized_percent(
    purchases: &[PurchasePerformance],
) -> Vec<&PurchasePerformance> {
    let mut ranked: Vec<&PurchasePerformance> = purchases.iter().collect();
    ranked.sort_by(|a, b| {
        b.unrealized_gain_loss_percent
            .cmp(&a.unrealized_gain_loss_percent)
    });
    ranked
}

fn evaluate_purchase(
    index: usize,
    purchase: &PurchaseEvent,
    current_price: Decimal,
) -> PurchasePerformance {
    let current_value = purchase.quantity_received * current_price;
    let unrealized_gain_loss = current_value - purchase.capital_spent;
    let price_change = current_price - purchase.unit_price;

    PurchasePerformance {
        index,
        purchase_id: purchase.id.clone(),
        date: purchase.occurred_on,
        capital_spent: purchase.capital_spent,
        unit_price: purchase.unit_price,
        quantity_received: purchase.quantity_received,
        current_value,
        unrealized_gain_loss,
        unrealized_gain_loss_percent: percent_of(unrealized_gain_loss, purchase.capital_spent),
        price_change,
        price_change_percent: percent_of(price_change, purchase.unit_price),
    }
}

fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}
