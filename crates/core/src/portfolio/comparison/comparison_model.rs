use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures for one way of deploying the same total capital.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyOutcome {
    pub total_invested: Decimal,
    pub total_quantity: Decimal,
    pub current_value: Decimal,
    pub return_percent: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BetterStrategy {
    Actual,
    LumpSum,
}

/// Recurring purchases against one purchase of the same total at the earliest price.
///
/// Differences are lump sum minus actual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpSumComparison {
    pub earliest_date: NaiveDate,
    pub earliest_price: Decimal,
    pub actual: StrategyOutcome,
    pub lump_sum: StrategyOutcome,
    pub quantity_difference: Decimal,
    pub value_difference: Decimal,
    pub return_difference: Decimal,
    pub better_strategy: BetterStrategy,
}

/// Result of a comparison request. Too few purchases is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ComparisonOutcome {
    Compared(LumpSumComparison),
    #[serde(rename_all = "camelCase")]
    InsufficientData { purchase_count: usize },
}

impl ComparisonOutcome {
    pub fn comparison(&self) -> Option<&LumpSumComparison> {
        match self {
            ComparisonOutcome::Compared(comparison) => Some(comparison),
            ComparisonOutcome::InsufficientData { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, ComparisonOutcome::InsufficientData { .. })
    }
}
