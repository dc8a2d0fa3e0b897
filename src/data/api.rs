use async_trait::async_trait;
use strum_macros::{Display, EnumIter};

use crate::config::API;
use crate::data::ApiError;
use crate::models::{
    Direction, HistoricalPrice, MetricHistory, ProductionMetrics, ValidationResult,
};

/// The fixed set of remote resources the pages read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Resource {
    #[strum(serialize = "validation result")]
    ValidationResult,
    #[strum(serialize = "metric history")]
    MetricHistory,
    #[strum(serialize = "metric limit")]
    MetricLimit,
    #[strum(serialize = "production metrics")]
    ProductionMetrics,
    #[strum(serialize = "prediction direction")]
    PredictionDirection,
    #[strum(serialize = "prediction price")]
    PredictionPrice,
    #[strum(serialize = "historical prices")]
    HistoricalPrices,
}

impl Resource {
    pub fn path(self) -> &'static str {
        let endpoints = &API.endpoints;
        match self {
            Resource::ValidationResult => endpoints.validation_result,
            Resource::MetricHistory => endpoints.metric_history,
            Resource::MetricLimit => endpoints.metric_limit_latest,
            Resource::ProductionMetrics => endpoints.production_metrics,
            Resource::PredictionDirection => endpoints.prediction_direction,
            Resource::PredictionPrice => endpoints.prediction_price,
            Resource::HistoricalPrices => endpoints.historical_prices,
        }
    }
}

/// The prediction/metrics service as seen by the pages.
///
/// Each call is exactly one request; nothing here retries.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardApi: Send + Sync {
    async fn validation_result(&self) -> Result<ValidationResult, ApiError>;

    async fn metric_history(&self) -> Result<MetricHistory, ApiError>;

    /// Current alert threshold. `Ok(None)` when the service has none or sent junk.
    async fn metric_limit(&self) -> Result<Option<f64>, ApiError>;

    async fn update_metric_limit(&self, value: f64) -> Result<(), ApiError>;

    async fn production_metrics(&self) -> Result<ProductionMetrics, ApiError>;

    async fn prediction_direction(&self) -> Result<Direction, ApiError>;

    async fn prediction_price(&self) -> Result<f64, ApiError>;

    /// Date ascending, in the order the service sends them.
    async fn historical_prices(&self) -> Result<Vec<HistoricalPrice>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn every_resource_has_a_distinct_path() {
        let paths: HashSet<&str> = Resource::iter().map(Resource::path).collect();
        assert_eq!(paths.len(), Resource::iter().count());
        assert_eq!(Resource::PredictionPrice.path(), "/predict/regression");
    }
}
