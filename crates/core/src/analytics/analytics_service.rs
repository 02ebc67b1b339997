use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::{Arc, RwLock};

use super::{AnalyticsServiceTrait, PortfolioReport};
use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::{calculate_goals_progress, Goal, GoalProgress};
use crate::portfolio::{
    analyze_purchases, build_cumulative_series, build_roi_series, calculate_performance,
    calculate_risk_metrics, calculate_summary, compare_lump_sum,
};
use crate::purchases::{validate_purchases, PurchaseEvent, PurchaseSeries};
use crate::settings::AnalyticsSettings;

/// Stateless analytics over validated input.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService {
    settings: AnalyticsSettings,
}

impl AnalyticsService {
    pub fn new(settings: AnalyticsSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn analyze(
        &self,
        purchases: &[PurchaseEvent],
        current_price: Decimal,
        as_of: NaiveDate,
    ) -> Result<PortfolioReport> {
        if current_price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Current price cannot be negative (got {})",
                current_price
            ))
            .into());
        }
        if current_price > MAX_AMOUNT {
            return Err(ValidationError::OutOfRange {
                field: "currentPrice".to_string(),
                value: current_price.to_string(),
            }
            .into());
        }
        validate_purchases(purchases)?;

        debug!(
            "Analyzing {} purchase(s) at price {} as of {}",
            purchases.len(),
            current_price,
            as_of
        );

        let series = PurchaseSeries::from_unordered(purchases);
        let cumulative_series = build_cumulative_series(&series, current_price, as_of);

        Ok(PortfolioReport {
            as_of,
            current_price,
            summary: calculate_summary(&series, current_price),
            risk: calculate_risk_metrics(&cumulative_series),
            roi_series: build_roi_series(&series, current_price),
            performance: calculate_performance(&series, current_price, as_of, &self.settings),
            lump_sum: compare_lump_sum(&series, current_price),
            purchase_analysis: analyze_purchases(purchases, current_price),
            cumulative_series,
        })
    }

    fn goal_progress(&self, report: &PortfolioReport, goals: &[Goal]) -> Vec<GoalProgress> {
        calculate_goals_progress(goals, report.summary.total_quantity, report.as_of)
    }
}

/// Inputs a cached report was computed from. Compared field by field, so two keys match
/// only when the inputs are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReportFingerprint {
    purchases: Vec<PurchaseEvent>,
    current_price: Decimal,
    as_of: NaiveDate,
}

/// Wraps an analytics service and remembers the most recent report.
#[derive(Clone)]
pub struct CachedAnalyticsService {
    inner: Arc<dyn AnalyticsServiceTrait>,
    cache: Arc<RwLock<Option<(ReportFingerprint, Arc<PortfolioReport>)>>>,
}

impl CachedAnalyticsService {
    pub fn new(inner: Arc<dyn AnalyticsServiceTrait>) -> Self {
        Self {
            inner,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the shared cached report, computing it only when the inputs changed.
    pub fn analyze_shared(
        &self,
        purchases: &[PurchaseEvent],
        current_price: Decimal,
        as_of: NaiveDate,
    ) -> Result<Arc<PortfolioReport>> {
        let fingerprint = ReportFingerprint {
            purchases: purchases.to_vec(),
            current_price,
            as_of,
        };

        {
            let cache = self
                .cache
                .read()
                .map_err(|e| Error::Unexpected(format!("Report cache poisoned: {}", e)))?;
            if let Some((cached_key, report)) = cache.as_ref() {
                if *cached_key == fingerprint {
                    debug!("Returning cached portfolio report as of {}", as_of);
                    return Ok(Arc::clone(report));
                }
            }
        }

        let report = Arc::new(self.inner.analyze(purchases, current_price, as_of)?);
        let mut cache = self
            .cache
            .write()
            .map_err(|e| Error::Unexpected(format!("Report cache poisoned: {}", e)))?;
        *cache = Some((fingerprint, Arc::clone(&report)));
        Ok(report)
    }

    pub fn clear(&self) -> Result<()> {
        let mut cache = self
            .cache
            .write()
            .map_err(|e| Error::Unexpected(format!("Report cache poisoned: {}", e)))?;
        *cache = None;
        Ok(())
    }
}

impl AnalyticsServiceTrait for CachedAnalyticsService {
    fn analyze(
        &self,
        purchases: &[PurchaseEvent],
        current_price: Decimal,
        as_of: NaiveDate,
    ) -> Result<PortfolioReport> {
        self.analyze_shared(purchases, current_price, as_of)
            .map(|report| report.as_ref().clone())
    }

    fn goal_progress(&self, report: &PortfolioReport, goals: &[Goal]) -> Vec<GoalProgress> {
        self.inner.goal_progress(report, goals)
    }
}
