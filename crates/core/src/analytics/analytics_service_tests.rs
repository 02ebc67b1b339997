#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::analytics::{
        AnalyticsService, AnalyticsServiceTrait, CachedAnalyticsService, PortfolioReport,
    };
    use crate::errors::{Error, Result, ValidationError};
    use crate::goals::{Goal, GoalProgress};
    use crate::portfolio::{BetterStrategy, PointKind, ReturnBasis};
    use crate::purchases::PurchaseEvent;
    use crate::settings::AnalyticsSettings;
    use crate::utils::valuation_date_today;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn purchases() -> Vec<PurchaseEvent> {
        vec![
            PurchaseEvent::new(date(2024, 3, 1), dec!(1000), dec!(2000000), dec!(0.0005))
                .unwrap()
                .with_id("b"),
            PurchaseEvent::new(date(2024, 1, 1), dec!(1000), dec!(1000000), dec!(0.001))
                .unwrap()
                .with_id("a"),
        ]
    }

    /// Counts calls so the cache can be observed.
    struct CountingService {
        inner: AnalyticsService,
        calls: AtomicUsize,
    }

    impl AnalyticsServiceTrait for CountingService {
        fn analyze(
            &self,
            purchases: &[PurchaseEvent],
            current_price: Decimal,
            as_of: NaiveDate,
        ) -> Result<PortfolioReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.analyze(purchases, current_price, as_of)
        }

        fn goal_progress(&self, report: &PortfolioReport, goals: &[Goal]) -> Vec<GoalProgress> {
            self.inner.goal_progress(report, goals)
        }
    }

    fn counting() -> Arc<CountingService> {
        Arc::new(CountingService {
            inner: AnalyticsService::default(),
            calls: AtomicUsize::new(0),
        })
    }

    // ==================== AnalyticsService ====================

    #[test]
    fn test_single_purchase_report() {
        let service = AnalyticsService::default();
        let single = vec![PurchaseEvent::new(date(2024, 1, 1), dec!(1000), dec!(100), dec!(10)).unwrap()];
        let report = service.analyze(&single, dec!(100), date(2024, 1, 1)).unwrap();

        assert_eq!(report.summary.total_invested, dec!(1000));
        assert_eq!(report.summary.total_quantity, dec!(10));
        assert_eq!(report.summary.cost_basis, dec!(100));
        assert_eq!(report.summary.portfolio_value, dec!(1000));
        assert_eq!(report.summary.unrealized_pl, Decimal::ZERO);
        assert_eq!(report.cumulative_series.len(), 2);
        assert!(report.lump_sum.is_insufficient());
        assert_eq!(report.risk.max_drawdown_percent, Decimal::ZERO);
    }

    #[test]
    fn test_full_report() {
        let service = AnalyticsService::default();
        let report = service
            .analyze(&purchases(), dec!(3000000), date(2024, 12, 31))
            .unwrap();

        assert_eq!(report.summary.total_quantity, dec!(0.0015));
        assert_eq!(report.summary.portfolio_value, dec!(4500));
        assert_eq!(report.cumulative_series.len(), 3);
        assert_eq!(report.cumulative_series[0].as_of, date(2024, 1, 1));
        assert_eq!(report.cumulative_series[2].kind, PointKind::Valuation);
        assert_eq!(report.roi_series.len(), 2);

        let comparison = report.lump_sum.comparison().unwrap();
        assert_eq!(comparison.better_strategy, BetterStrategy::LumpSum);
        assert_eq!(comparison.lump_sum.current_value, dec!(6000));

        // TWR from 1,000,000 to 3,000,000 over 365 days would annualize to +200%: capped.
        assert_eq!(report.performance.time_weighted_return.basis, ReturnBasis::Total);
        assert!((report.performance.time_weighted_return.percent - 200.0).abs() < 1e-9);

        let analysis = report.purchase_analysis.as_ref().unwrap();
        // Input order is preserved for the per-purchase view.
        assert_eq!(analysis.purchases[0].purchase_id.as_deref(), Some("b"));
        assert_eq!(analysis.summary.best_purchase.purchase_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_empty_input() {
        let service = AnalyticsService::default();
        let report = service.analyze(&[], Decimal::ZERO, date(2024, 6, 1)).unwrap();
        assert_eq!(report.summary.cost_basis, Decimal::ZERO);
        assert_eq!(report.summary.unrealized_pl_percent, Decimal::ZERO);
        assert!(report.cumulative_series.is_empty());
        assert!(report.purchase_analysis.is_none());
        assert!(report.lump_sum.is_insufficient());
        assert_eq!(report.risk.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let service = AnalyticsService::default();
        let result = service.analyze(&purchases(), dec!(-1), date(2024, 6, 1));
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_invalid_purchase_is_rejected() {
        let service = AnalyticsService::default();
        let mut bad = purchases();
        bad[1].quantity_received = Decimal::ZERO;
        let result = service.analyze(&bad, dec!(100), date(2024, 6, 1));
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::Record { index: 1, .. }))
        ));
    }

    #[test]
    fn test_oversized_amounts_are_rejected_not_overflowed() {
        let service = AnalyticsService::default();
        let day = date(2024, 1, 1);
        let huge = PurchaseEvent {
            id: None,
            occurred_on: day,
            capital_spent: dec!(1),
            unit_price: dec!(10000000000),
            quantity_received: dec!(100000000000000000000),
        };
        let result = service.analyze(&[huge], dec!(1), day);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::Record { index: 0, .. }))
        ));

        let result = service.analyze(&purchases(), dec!(10000000000000), day);
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_extreme_valid_input_stays_finite() {
        let service = AnalyticsService::default();
        let small = PurchaseEvent::new(date(2024, 1, 1), dec!(0.01), dec!(0.01), dec!(999999999999)).unwrap();
        let cheap = PurchaseEvent::new(date(2024, 2, 1), dec!(0.01), dec!(1000000000000), dec!(0.00000001)).unwrap();
        let report = service
            .analyze(&[small, cheap], dec!(1000000000000), date(2024, 12, 31))
            .unwrap();
        assert_eq!(report.summary.total_quantity, dec!(999999999999.00000001));
        assert!(report.lump_sum.comparison().is_some());
        assert!(report.risk.max_drawdown_percent >= Decimal::ZERO);
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = AnalyticsSettings {
            days_per_year: 0.0,
            ..AnalyticsSettings::default()
        };
        assert!(AnalyticsService::new(settings).is_err());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let service = AnalyticsService::default();
        let first = service.analyze(&purchases(), dec!(2500000), date(2024, 9, 1)).unwrap();
        let second = service.analyze(&purchases(), dec!(2500000), date(2024, 9, 1)).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_analyze_today_values_on_current_date() {
        let service = AnalyticsService::default();
        let before = valuation_date_today();
        let report = service.analyze_today(&purchases(), dec!(100)).unwrap();
        assert!(report.as_of >= before);
        assert!(report.as_of <= valuation_date_today());
    }

    #[test]
    fn test_goal_progress_uses_report_quantity() {
        let service = AnalyticsService::default();
        let report = service.analyze(&purchases(), dec!(2500000), date(2024, 9, 1)).unwrap();
        let goal = Goal {
            id: "g".to_string(),
            name: "Tenth of a coin".to_string(),
            target_quantity: dec!(0.003),
            deadline: Some(date(2024, 8, 1)),
            created_at: None,
        };
        let progress = service.goal_progress(&report, &[goal]);
        assert_eq!(progress[0].progress_percent, dec!(50));
        assert_eq!(progress[0].days_remaining, Some(-31));
        assert!(progress[0].is_overdue);
    }

    // ==================== CachedAnalyticsService ====================

    #[test]
    fn test_cache_reuses_identical_inputs() {
        let inner = counting();
        let cached = CachedAnalyticsService::new(inner.clone());

        let first = cached.analyze_shared(&purchases(), dec!(100), date(2024, 6, 1)).unwrap();
        let second = cached.analyze_shared(&purchases(), dec!(100), date(2024, 6, 1)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(inner.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_recomputes_on_any_change() {
        let inner = counting();
        let cached = CachedAnalyticsService::new(inner.clone());

        cached.analyze(&purchases(), dec!(100), date(2024, 6, 1)).unwrap();
        cached.analyze(&purchases(), dec!(101), date(2024, 6, 1)).unwrap();
        cached.analyze(&purchases(), dec!(101), date(2024, 6, 2)).unwrap();
        cached.analyze(&purchases()[..1], dec!(101), date(2024, 6, 2)).unwrap();
        assert_eq!(inner.calls.load(Ordering::SeqCst), 4);

        cached.clear().unwrap();
        cached.analyze(&purchases()[..1], dec!(101), date(2024, 6, 2)).unwrap();
        assert_eq!(inner.calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_cache_does_not_store_errors() {
        let inner = counting();
        let cached = CachedAnalyticsService::new(inner.clone());

        assert!(cached.analyze(&purchases(), dec!(-1), date(2024, 6, 1)).is_err());
        assert!(cached.analyze(&purchases(), dec!(-1), date(2024, 6, 1)).is_err());
        assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
    }
}
