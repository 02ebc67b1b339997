use serde::{Deserialize, Serialize};

/// Whether a reported return has been annualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnBasis {
    Annualized,
    Total,
}

impl ReturnBasis {
    pub fn label(&self) -> &'static str {
        match self {
            ReturnBasis::Annualized => "Annualized",
            ReturnBasis::Total => "Total Return",
        }
    }
}

/// Why a return was reported on a total (non-annualized) basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TotalReturnReason {
    NoPurchases,
    HoldingPeriodTooShort,
    LossBeyondFloor,
    AnnualizedOutOfRange,
    SolverDidNotConverge,
    NoCurrentPrice,
}

/// Outcome of the Newton-Raphson IRR search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrSolution {
    /// Last iterate, clamped to the configured bounds.
    pub rate: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// A return figure, in percent, together with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnMeasure {
    pub percent: f64,
    pub basis: ReturnBasis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reason: Option<TotalReturnReason>,
    /// Days used for the annualization decision (capital-weighted for MWR).
    pub holding_days: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solver: Option<IrrSolution>,
}

impl ReturnMeasure {
    pub(crate) fn annualized(percent: f64, holding_days: f64) -> Self {
        ReturnMeasure {
            percent,
            basis: ReturnBasis::Annualized,
            total_reason: None,
            holding_days,
            solver: None,
        }
    }

    pub(crate) fn total(percent: f64, holding_days: f64, reason: TotalReturnReason) -> Self {
        ReturnMeasure {
            percent,
            basis: ReturnBasis::Total,
            total_reason: Some(reason),
            holding_days,
            solver: None,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::total(0.0, 0.0, TotalReturnReason::NoPurchases)
    }

    pub(crate) fn with_solver(mut self, solution: IrrSolution) -> Self {
        self.solver = Some(solution);
        self
    }

    pub fn is_annualized(&self) -> bool {
        self.basis == ReturnBasis::Annualized
    }

    pub fn label(&self) -> &'static str {
        self.basis.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub time_weighted_return: ReturnMeasure,
    pub money_weighted_return: ReturnMeasure,
}
