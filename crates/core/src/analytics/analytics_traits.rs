use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::PortfolioReport;
use crate::errors::Result;
use crate::goals::{Goal, GoalProgress};
use crate::purchases::PurchaseEvent;
use crate::utils::time_utils::valuation_date_today;

/// Trait for portfolio analytics operations.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Runs every engine over `purchases` (any order) valued at `current_price` on `as_of`.
    fn analyze(
        &self,
        purchases: &[PurchaseEvent],
        current_price: Decimal,
        as_of: NaiveDate,
    ) -> Result<PortfolioReport>;

    /// [`Self::analyze`] valued on today's date in the default valuation timezone.
    fn analyze_today(&self, purchases: &[PurchaseEvent], current_price: Decimal) -> Result<PortfolioReport> {
        self.analyze(purchases, current_price, valuation_date_today())
    }

    /// Progress of each goal against the report's total quantity.
    fn goal_progress(&self, report: &PortfolioReport, goals: &[Goal]) -> Vec<GoalProgress>;
}
