//! Purchase domain models and the validation boundary for stored records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DATE_FORMAT, MAX_AMOUNT, MIN_MONETARY_AMOUNT, MIN_QUANTITY};
use crate::errors::{Error, Result, ValidationError};

/// A single recorded buy of the tracked asset.
///
/// `quantity_received` is authoritative: it reflects what was actually credited after
/// fees and is never recomputed from `capital_spent / unit_price`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub occurred_on: NaiveDate,
    pub capital_spent: Decimal,
    pub unit_price: Decimal,
    pub quantity_received: Decimal,
}

impl PurchaseEvent {
    /// Builds a validated purchase. All three amounts must be strictly positive.
    pub fn new(
        occurred_on: NaiveDate,
        capital_spent: Decimal,
        unit_price: Decimal,
        quantity_received: Decimal,
    ) -> Result<Self> {
        let event = PurchaseEvent {
            id: None,
            occurred_on,
            capital_spent,
            unit_price,
            quantity_received,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Amounts must be positive and within `[minimum, MAX_AMOUNT]`.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("investmentAmount", self.capital_spent)?;
        ensure_positive("btcPrice", self.unit_price)?;
        ensure_positive("btcReceived", self.quantity_received)?;
        ensure_in_range("investmentAmount", self.capital_spent, MIN_MONETARY_AMOUNT)?;
        ensure_in_range("btcPrice", self.unit_price, MIN_MONETARY_AMOUNT)?;
        ensure_in_range("btcReceived", self.quantity_received, MIN_QUANTITY)?;
        Ok(())
    }
}

/// Validates a batch of purchases, reporting the index of the first invalid one.
///
/// Besides each record, the running capital and quantity totals must stay within
/// `MAX_AMOUNT`; the analytics engine relies on this to never overflow.
pub fn validate_purchases(purchases: &[PurchaseEvent]) -> Result<()> {
    let mut total_invested = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;

    for (index, purchase) in purchases.iter().enumerate() {
        purchase
            .validate()
            .map_err(|err| record_error(index, err))?;
        total_invested = accumulate("totalInvested", total_invested, purchase.capital_spent)
            .map_err(|err| record_error(index, err))?;
        total_quantity = accumulate("totalQuantity", total_quantity, purchase.quantity_received)
            .map_err(|err| record_error(index, err))?;
    }
    Ok(())
}

/// Purchase record as persisted by the storage and export layers.
///
/// Every field is optional here so that a missing field is reported as such rather
/// than as an opaque deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: Option<String>,
    pub investment_amount: Option<Decimal>,
    pub btc_price: Option<Decimal>,
    pub btc_received: Option<Decimal>,
}

impl TryFrom<PurchaseRecord> for PurchaseEvent {
    type Error = Error;

    fn try_from(record: PurchaseRecord) -> Result<Self> {
        let raw_date = record.date.ok_or_else(|| missing("date"))?;
        let occurred_on = parse_record_date(&raw_date)?;
        let capital_spent = record
            .investment_amount
            .ok_or_else(|| missing("investmentAmount"))?;
        let unit_price = record.btc_price.ok_or_else(|| missing("btcPrice"))?;
        let quantity_received = record.btc_received.ok_or_else(|| missing("btcReceived"))?;

        let event = PurchaseEvent::new(occurred_on, capital_spent, unit_price, quantity_received)?;
        Ok(match record.id {
            Some(id) => event.with_id(id),
            None => event,
        })
    }
}

impl From<&PurchaseEvent> for PurchaseRecord {
    fn from(event: &PurchaseEvent) -> Self {
        PurchaseRecord {
            id: event.id.clone(),
            date: Some(event.occurred_on.format(DATE_FORMAT).to_string()),
            investment_amount: Some(event.capital_spent),
            btc_price: Some(event.unit_price),
            btc_received: Some(event.quantity_received),
        }
    }
}

/// Converts stored records into validated events, stopping at the first bad record.
pub fn purchases_from_records(records: Vec<PurchaseRecord>) -> Result<Vec<PurchaseEvent>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            PurchaseEvent::try_from(record).map_err(|err| record_error(index, err))
        })
        .collect()
}

/// Parses a stored date. Full ISO-8601 timestamps are accepted and truncated to the day.
pub(crate) fn parse_record_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(missing("date"));
    }
    let day_part = trimmed.get(..10).unwrap_or(trimmed);
    Ok(NaiveDate::parse_from_str(day_part, DATE_FORMAT)?)
}

fn ensure_positive(field: &str, value: Decimal) -> Result<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(ValidationError::NonPositive {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into())
    }
}

fn ensure_in_range(field: &str, value: Decimal, minimum: Decimal) -> Result<()> {
    if value < minimum || value > MAX_AMOUNT {
        return Err(out_of_range(field, value.to_string()));
    }
    Ok(())
}

fn accumulate(field: &str, total: Decimal, amount: Decimal) -> Result<Decimal> {
    total
        .checked_add(amount)
        .filter(|sum| *sum <= MAX_AMOUNT)
        .ok_or_else(|| out_of_range(field, format!("{} + {}", total, amount)))
}

fn out_of_range(field: &str, value: String) -> Error {
    ValidationError::OutOfRange {
        field: field.to_string(),
        value,
    }
    .into()
}

fn record_error(index: usize, err: Error) -> Error {
    match err {
        Error::Validation(source) => ValidationError::Record {
            index,
            source: Box::new(source),
        }
        .into(),
        other => other,
    }
}

fn missing(field: &str) -> Error {
    ValidationError::MissingField(field.to_string()).into()
}
