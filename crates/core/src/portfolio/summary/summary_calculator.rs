use rust_decimal::Decimal;

use super::PortfolioSummary;
use crate::purchases::PurchaseEvent;

/// Aggregates all purchases against the current price.
///
/// Order does not matter. Every division is guarded, so an empty purchase list gives
/// an all-zero summary.
pub fn calculate_summary(purchases: &[PurchaseEvent], current_price: Decimal) -> PortfolioSummary {
    let total_invested: Decimal = purchases.iter().map(|p| p.capital_spent).sum();
    let total_quantity: Decimal = purchases.iter().map(|p| p.quantity_received).sum();

    let cost_basis = if total_quantity > Decimal::ZERO {
        total_invested / total_quantity
    } else {
        Decimal::ZERO
    };

    let portfolio_value = total_quantity * current_price;
    let unrealized_pl = portfolio_value - total_invested;
    let unrealized_pl_percent = if total_invested > Decimal::ZERO {
        unrealized_pl / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    PortfolioSummary {
        total_invested,
        total_quantity,
        cost_basis,
        portfolio_value,
        unrealized_pl,
        unrealized_pl_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn purchase(day: u32, capital: Decimal, price: Decimal, qty: Decimal) -> PurchaseEvent {
        PurchaseEvent::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            capital,
            price,
            qty,
        )
        .unwrap()
    }

    #[test]
    fn test_single_purchase_at_cost() {
        let summary = calculate_summary(&[purchase(1, dec!(1000), dec!(100), dec!(10))], dec!(100));
        assert_eq!(summary.total_invested, dec!(1000));
        assert_eq!(summary.total_quantity, dec!(10));
        assert_eq!(summary.cost_basis, dec!(100));
        assert_eq!(summary.portfolio_value, dec!(1000));
        assert_eq!(summary.unrealized_pl, Decimal::ZERO);
        assert_eq!(summary.unrealized_pl_percent, Decimal::ZERO);
    }

    #[test]
    fn test_empty_is_all_zero() {
        let summary = calculate_summary(&[], dec!(2500000));
        assert_eq!(summary, PortfolioSummary::default());
        assert!(summary.cost_basis.is_zero());
        assert!(summary.unrealized_pl_percent.is_zero());
    }

    #[test]
    fn test_multiple_purchases_with_gain() {
        let summary = calculate_summary(
            &[
                purchase(20, dec!(1000), dec!(200), dec!(5)),
                purchase(1, dec!(1000), dec!(100), dec!(10)),
            ],
            dec!(150),
        );
        assert_eq!(summary.total_invested, dec!(2000));
        assert_eq!(summary.total_quantity, dec!(15));
        assert_eq!(summary.portfolio_value, dec!(2250));
        assert_eq!(summary.unrealized_pl, dec!(250));
        assert_eq!(summary.unrealized_pl_percent, dec!(12.5));
        assert_eq!(summary.cost_basis.round_dp(6), dec!(133.333333));
    }

    #[test]
    fn test_zero_current_price_is_total_loss() {
        let summary = calculate_summary(&[purchase(1, dec!(1000), dec!(100), dec!(10))], Decimal::ZERO);
        assert_eq!(summary.portfolio_value, Decimal::ZERO);
        assert_eq!(summary.unrealized_pl, dec!(-1000));
        assert_eq!(summary.unrealized_pl_percent, dec!(-100));
    }

    #[test]
    fn test_quantity_sum_is_exact() {
        let purchases: Vec<PurchaseEvent> = (1..=10)
            .map(|day| purchase(day, dec!(100), dec!(1000000), dec!(0.0001)))
            .collect();
        let summary = calculate_summary(&purchases, dec!(1000000));
        assert_eq!(summary.total_quantity, dec!(0.001));
    }
}
