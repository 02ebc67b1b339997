use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Peak-to-trough fall of the running return, in percentage points (>= 0).
    pub max_drawdown_percent: Decimal,
    /// Per-interval Sharpe-like ratio; see [`super::sharpe_from_returns`].
    pub sharpe_ratio: f64,
    /// Number of intervals that contributed a return observation.
    pub return_observations: usize,
}
