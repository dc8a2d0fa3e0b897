use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{API, ApiConfig};
use crate::data::payloads::{
    MetricLimitUpdate, PredictionEnvelope, PricesEnvelope, metric_limit_value,
};
use crate::data::{ApiError, DashboardApi, Resource};
use crate::models::{
    Direction, HistoricalPrice, MetricHistory, ProductionMetrics, ValidationResult,
};

/// [`DashboardApi`] over HTTP. One `reqwest::Client` shared by every request.
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_body(&self, resource: Resource) -> Result<String, ApiError> {
        let url = self.config.url_for(resource.path());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{resource}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Network(format!("{resource}: HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("{resource}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, ApiError> {
        let body = self.get_body(resource).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{resource}: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardApi for HttpApi {
    async fn validation_result(&self) -> Result<ValidationResult, ApiError> {
        self.get_json(Resource::ValidationResult).await
    }

    async fn metric_history(&self) -> Result<MetricHistory, ApiError> {
        self.get_json(Resource::MetricHistory).await
    }

    async fn metric_limit(&self) -> Result<Option<f64>, ApiError> {
        let body: serde_json::Value = self.get_json(Resource::MetricLimit).await?;
        Ok(metric_limit_value(&body))
    }

    async fn update_metric_limit(&self, value: f64) -> Result<(), ApiError> {
        let url = self.config.url_for(API.endpoints.metric_limit_update);
        let response = self
            .client
            .post(&url)
            .json(&MetricLimitUpdate { value })
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("metric limit update: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The body usually carries the reason (FastAPI `detail`); best effort only.
        let detail = response.text().await.unwrap_or_default();
        Err(update_rejection(status, &detail))
    }

    async fn production_metrics(&self) -> Result<ProductionMetrics, ApiError> {
        self.get_json(Resource::ProductionMetrics).await
    }

    async fn prediction_direction(&self) -> Result<Direction, ApiError> {
        self.get_json::<PredictionEnvelope>(Resource::PredictionDirection)
            .await?
            .direction()
    }

    async fn prediction_price(&self) -> Result<f64, ApiError> {
        self.get_json::<PredictionEnvelope>(Resource::PredictionPrice)
            .await?
            .price()
    }

    async fn historical_prices(&self) -> Result<Vec<HistoricalPrice>, ApiError> {
        self.get_json::<PricesEnvelope>(Resource::HistoricalPrices)
            .await?
            .into_prices()
    }
}

/// 4xx: the service refused the value. Anything else: it never got to judge it.
fn update_rejection(status: StatusCode, detail: &str) -> ApiError {
    let message = format!("HTTP {status} {detail}").trim().to_string();
    if status.is_client_error() {
        ApiError::Validation(message)
    } else {
        ApiError::Network(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_rejections() {
        let err = update_rejection(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":"bad value"}"#);
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("422")));
        assert!(matches!(
            update_rejection(StatusCode::BAD_REQUEST, ""),
            ApiError::Validation(_)
        ));
    }

    #[test]
    fn server_errors_are_network_failures() {
        for status in [StatusCode::BAD_GATEWAY, StatusCode::SERVICE_UNAVAILABLE] {
            let err = update_rejection(status, "");
            assert!(matches!(err, ApiError::Network(ref m) if m.starts_with("HTTP 5")));
        }
    }
}
