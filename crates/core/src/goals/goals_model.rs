//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::purchases::parse_record_date;

/// Accumulation target expressed in units of the asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_quantity: Decimal,
    pub deadline: Option<NaiveDate>,
    pub created_at: Option<NaiveDate>,
}

/// Goal as stored by the host application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "targetBTC")]
    pub target_btc: Option<Decimal>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<GoalRecord> for Goal {
    type Error = Error;

    fn try_from(record: GoalRecord) -> Result<Self> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }

        let target_quantity = record
            .target_btc
            .ok_or_else(|| ValidationError::MissingField("targetBTC".to_string()))?;
        if target_quantity < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Goal target cannot be negative (got {})",
                target_quantity
            ))
            .into());
        }

        Ok(Goal {
            id: record.id,
            name: name.to_string(),
            target_quantity,
            deadline: optional_date(record.deadline.as_deref())?,
            created_at: optional_date(record.created_at.as_deref())?,
        })
    }
}

fn optional_date(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_record_date(value).map(Some),
    }
}

/// Progress towards a goal at the valuation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub current_quantity: Decimal,
    /// Capped at 100; zero for a zero target.
    pub progress_percent: Decimal,
    pub remaining_quantity: Decimal,
    /// Negative once the deadline has passed; `None` without a deadline.
    pub days_remaining: Option<i64>,
    pub is_complete: bool,
    pub is_overdue: bool,
}
