//! Purchases module - purchase events, boundary records, and chronological ordering.

mod purchase_series;
mod purchases_model;


pub use purchase_series::PurchaseSeries;
pub use purchases_model::{
    purchases_from_records, validate_purchases, PurchaseEvent, PurchaseRecord,
};
pub(crate) use purchases_model::parse_record_date;
