use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time aggregate over every purchase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_quantity: Decimal,
    /// Average price paid per unit; zero when nothing is held.
    pub cost_basis: Decimal,
    pub portfolio_value: Decimal,
    pub unrealized_pl: Decimal,
    /// Zero when nothing has been invested.
    pub unrealized_pl_percent: Decimal,
}

/// Unrealized performance of a single purchase at the current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePerformance {
    /// 1-based position in the caller's purchase list.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_id: Option<String>,
    pub date: NaiveDate,
    pub capital_spent: Decimal,
    pub unit_price: Decimal,
    pub quantity_received: Decimal,
    pub current_value: Decimal,
    pub unrealized_gain_loss: Decimal,
    pub unrealized_gain_loss_percent: Decimal,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAnalysisSummary {
    pub total_invested: Decimal,
    pub total_current_value: Decimal,
    pub total_unrealized_gain_loss: Decimal,
    pub profitable_purchases: usize,
    pub losing_purchases: usize,
    pub best_purchase: PurchasePerformance,
    pub worst_purchase: PurchasePerformance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAnalysis {
    /// Per-purchase figures in the caller's order.
    pub purchases: Vec<PurchasePerformance>,
    pub summary: PurchaseAnalysisSummary,
}

impl PurchaseAnalysis {
    /// Purchases ordered from best to worst unrealized percentage.
    pub fn ranked(&self) -> Vec<&PurchasePerformance> {
        super::purchase_analysis::rank_by_unrealized_percent(&self.purchases)
    }
}
