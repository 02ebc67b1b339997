//! Price alert evaluation. Delivering notifications is left to the host.

use log::debug;
use rust_decimal::Decimal;

use super::PriceAlert;

/// Untriggered alerts whose condition holds at `current_price`, returned already
/// marked as triggered. A price of zero means "unset" and fires nothing.
pub fn alerts_to_trigger(alerts: &[PriceAlert], current_price: Decimal) -> Vec<PriceAlert> {
    if current_price <= Decimal::ZERO {
        return Vec::new();
    }

    alerts
        .iter()
        .filter(|alert| !alert.triggered && alert.condition_met(current_price))
        .map(|alert| {
            debug!(
                "Alert {} fired: price {} vs target {} ({:?})",
                alert.id, current_price, alert.target_price, alert.direction
            );
            PriceAlert {
                triggered: true,
                ..alert.clone()
            }
        })
        .collect()
}

/// Returns the full alert list with every alert that fires at `current_price` marked
/// as triggered. The input is left untouched.
pub fn evaluate_alerts(alerts: &[PriceAlert], current_price: Decimal) -> Vec<PriceAlert> {
    let fired = alerts_to_trigger(alerts, current_price);
    alerts
        .iter()
        .map(|alert| {
            fired
                .iter()
                .find(|f| f.id == alert.id)
                .cloned()
                .unwrap_or_else(|| alert.clone())
        })
        .collect()
}
