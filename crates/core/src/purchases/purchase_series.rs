//! Chronological ordering of purchase events.

use std::ops::Deref;

use super::PurchaseEvent;

/// Purchases in ascending date order.
///
/// Same-day purchases keep their relative input order, so replaying a series is
/// deterministic regardless of how the caller's collection was built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseSeries {
    purchases: Vec<PurchaseEvent>,
}

impl PurchaseSeries {
    /// Orders an unordered collection of purchases. Empty input yields an empty series.
    pub fn from_unordered(purchases: &[PurchaseEvent]) -> Self {
        let mut ordered = purchases.to_vec();
        // `sort_by_key` is stable: ties keep their input order.
        ordered.sort_by_key(|purchase| purchase.occurred_on);
        PurchaseSeries { purchases: ordered }
    }
}

impl Deref for PurchaseSeries {
    type Target = [PurchaseEvent];

    fn deref(&self) -> &Self::Target {
        &self.purchases
    }
}

impl From<Vec<PurchaseEvent>> for PurchaseSeries {
    fn from(purchases: Vec<PurchaseEvent>) -> Self {
        PurchaseSeries::from_unordered(&purchases)
    }
}
