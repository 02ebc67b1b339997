use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A hypothetical monthly purchase plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaProjectionInput {
    pub monthly_investment: Decimal,
    pub duration_months: u32,
    /// Expected average purchase price over the plan.
    #[serde(alias = "averageBTCPrice")]
    pub average_price: Decimal,
    /// Expected price at the end of the plan.
    #[serde(alias = "futureBTCPrice")]
    pub future_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DcaProjection {
    pub total_investment: Decimal,
    pub projected_quantity: Decimal,
    pub projected_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
    /// The same total bought once at the average price.
    pub lump_sum_quantity: Decimal,
    pub lump_sum_value: Decimal,
    pub lump_sum_profit: Decimal,
}
