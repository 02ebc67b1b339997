use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::{
    ComparisonOutcome, CumulativePoint, PerformanceMetrics, PortfolioSummary, PurchaseAnalysis,
    RiskMetrics, RoiPoint,
};

/// Every analytic for one purchase history, current price, and valuation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub as_of: NaiveDate,
    pub current_price: Decimal,
    pub summary: PortfolioSummary,
    pub cumulative_series: Vec<CumulativePoint>,
    pub roi_series: Vec<RoiPoint>,
    pub risk: RiskMetrics,
    pub performance: PerformanceMetrics,
    pub lump_sum: ComparisonOutcome,
    /// `None` when there are no purchases.
    pub purchase_analysis: Option<PurchaseAnalysis>,
}
