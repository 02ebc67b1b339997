use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    /// Fires once the price reaches or exceeds the target.
    Above,
    /// Fires once the price reaches or falls below the target.
    Below,
}

/// A one-shot price alert. Stored with the direction under `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: String,
    pub target_price: Decimal,
    #[serde(rename = "type")]
    pub direction: AlertDirection,
    #[serde(default)]
    pub triggered: bool,
    /// Creation timestamp as stored; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PriceAlert {
    pub fn new(id: impl Into<String>, target_price: Decimal, direction: AlertDirection) -> Result<Self> {
        if target_price <= Decimal::ZERO {
            return Err(ValidationError::NonPositive {
                field: "targetPrice".to_string(),
                value: target_price.to_string(),
            }
            .into());
        }
        Ok(PriceAlert {
            id: id.into(),
            target_price,
            direction,
            triggered: false,
            created_at: None,
        })
    }

    /// Whether `price` satisfies the alert condition, ignoring the triggered flag.
    pub fn condition_met(&self, price: Decimal) -> bool {
        match self.direction {
            AlertDirection::Above => price >= self.target_price,
            AlertDirection::Below => price <= self.target_price,
        }
    }
}
