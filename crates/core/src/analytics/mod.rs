//! Analytics module - runs every engine over one input and caches the result.

mod analytics_model;
mod analytics_service;
mod analytics_traits;

#[cfg(test)]
mod analytics_service_tests;

pub use analytics_model::PortfolioReport;
pub use analytics_service::{AnalyticsService, CachedAnalyticsService};
pub use analytics_traits::AnalyticsServiceTrait;
