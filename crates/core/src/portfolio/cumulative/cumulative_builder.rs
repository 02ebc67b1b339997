//! Builds the cumulative holding series that the risk and return engines read.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{CumulativePoint, PointKind};
use crate::purchases::PurchaseSeries;

/// Walks the ordered purchases once and emits one point per purchase, plus a trailing
/// valuation point at `current_price`.
///
/// Each purchase point is marked at that purchase's own unit price, so the series
/// follows the realized price path rather than a flat mark at today's price. A current
/// price of zero means "unset" and values the trailing point at zero.
///
/// Returns `purchases.len() + 1` points, or none for an empty series.
pub fn build_cumulative_series(
    purchases: &PurchaseSeries,
    current_price: Decimal,
    as_of: NaiveDate,
) -> Vec<CumulativePoint> {
    if purchases.is_empty() {
        return Vec::new();
    }

    let mut points = Vec::with_capacity(purchases.len() + 1);
    let mut cumulative_quantity = Decimal::ZERO;
    let mut cumulative_capital = Decimal::ZERO;

    for purchase in purchases.iter() {
        cumulative_quantity += purchase.quantity_received;
        cumulative_capital += purchase.capital_spent;

        points.push(CumulativePoint {
            as_of: purchase.occurred_on,
            kind: PointKind::Purchase,
            cumulative_quantity,
            cumulative_capital,
            mark_price: purchase.unit_price,
            portfolio_value: cumulative_quantity * purchase.unit_price,
        });
    }

    points.push(CumulativePoint {
        as_of,
        kind: PointKind::Valuation,
        cumulative_quantity,
        cumulative_capital,
        mark_price: current_price,
        portfolio_value: cumulative_quantity * current_price,
    });

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::purchases::PurchaseEvent;
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn purchase(date: NaiveDate, capital: Decimal, price: Decimal, qty: Decimal) -> PurchaseEvent {
        PurchaseEvent::new(date, capital, price, qty).unwrap()
    }

    #[test]
    fn test_empty_series_has_no_points() {
        let points = build_cumulative_series(&PurchaseSeries::default(), dec!(100), d(2024, 1, 1));
        assert!(points.is_empty());
    }

    #[test]
    fn test_marks_each_point_at_its_own_price() {
        let series = PurchaseSeries::from_unordered(&[
            purchase(d(2024, 2, 1), dec!(1000), dec!(200), dec!(5)),
            purchase(d(2024, 1, 1), dec!(1000), dec!(100), dec!(10)),
        ]);
        let points = build_cumulative_series(&series, dec!(150), d(2024, 3, 1));

        assert_eq!(points.len(), 3);

        assert_eq!(points[0].as_of, d(2024, 1, 1));
        assert_eq!(points[0].kind, PointKind::Purchase);
        assert_eq!(points[0].cumulative_quantity, dec!(10));
        assert_eq!(points[0].cumulative_capital, dec!(1000));
        assert_eq!(points[0].portfolio_value, dec!(1000));

        assert_eq!(points[1].cumulative_quantity, dec!(15));
        assert_eq!(points[1].cumulative_capital, dec!(2000));
        assert_eq!(points[1].mark_price, dec!(200));
        assert_eq!(points[1].portfolio_value, dec!(3000));

        assert_eq!(points[2].as_of, d(2024, 3, 1));
        assert_eq!(points[2].kind, PointKind::Valuation);
        assert_eq!(points[2].mark_price, dec!(150));
        assert_eq!(points[2].portfolio_value, dec!(2250));
    }

    #[test]
    fn test_zero_current_price_values_trailing_point_at_zero() {
        let series = PurchaseSeries::from_unordered(&[purchase(
            d(2024, 1, 1),
            dec!(500),
            dec!(50),
            dec!(10),
        )]);
        let points = build_cumulative_series(&series, Decimal::ZERO, d(2024, 1, 2));
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].portfolio_value, Decimal::ZERO);
        assert_eq!(points[1].cumulative_capital, dec!(500));
    }

    #[test]
    fn test_quantity_is_not_recomputed_from_price() {
        // 1000 / 100 would be 10 units, but fees left 9.9 credited.
        let series = PurchaseSeries::from_unordered(&[purchase(
            d(2024, 1, 1),
            dec!(1000),
            dec!(100),
            dec!(9.9),
        )]);
        let points = build_cumulative_series(&series, dec!(100), d(2024, 1, 1));
        assert_eq!(points[0].cumulative_quantity, dec!(9.9));
        assert_eq!(points[1].portfolio_value, dec!(990));
    }

    #[test]
    fn test_return_percent() {
        let series = PurchaseSeries::from_unordered(&[purchase(
            d(2024, 1, 1),
            dec!(1000),
            dec!(100),
            dec!(10),
        )]);
        let points = build_cumulative_series(&series, dec!(80), d(2024, 1, 5));
        assert_eq!(points[0].return_percent(), Decimal::ZERO);
        assert_eq!(points[1].return_percent(), dec!(-20));
    }
}
