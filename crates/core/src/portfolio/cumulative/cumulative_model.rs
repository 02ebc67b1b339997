use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a cumulative point comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointKind {
    /// Valued at the originating purchase's own price.
    Purchase,
    /// Trailing point valued at the externally supplied current price.
    Valuation,
}

/// Running totals after one purchase (or at the valuation date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativePoint {
    pub as_of: NaiveDate,
    pub kind: PointKind,
    pub cumulative_quantity: Decimal,
    pub cumulative_capital: Decimal,
    pub mark_price: Decimal,
    pub portfolio_value: Decimal,
}

impl CumulativePoint {
    /// Unrealized return of the capital invested so far, in percent.
    ///
    /// Zero when no capital has been invested; valid purchases never produce that.
    pub fn return_percent(&self) -> Decimal {
        if self.cumulative_capital.is_zero() {
            return Decimal::ZERO;
        }
        (self.portfolio_value - self.cumulative_capital) / self.cumulative_capital
            * Decimal::ONE_HUNDRED
    }
}

/// ROI at a purchase date, marked at the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiPoint {
    pub date: NaiveDate,
    pub cumulative_quantity: Decimal,
    pub cumulative_capital: Decimal,
    pub portfolio_value: Decimal,
    pub roi_percent: Decimal,
    pub profit: Decimal,
}

/// Chart window for ROI history, relative to the valuation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "1Y")]
    OneYear,
    #[default]
    #[serde(rename = "ALL")]
    All,
}
