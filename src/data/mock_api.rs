//! In-memory [`DashboardApi`] for controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::data::{ApiError, DashboardApi, Resource};
use crate::models::{
    ClassificationMetrics, Direction, HistoricalPrice, MetricHistory, ProductionMetrics,
    RegressionMetrics, ValidationResult,
};

pub struct MockApi {
    pub validation: Result<ValidationResult, ApiError>,
    pub history: Result<MetricHistory, ApiError>,
    pub limit: Result<Option<f64>, ApiError>,
    pub limit_update: Result<(), ApiError>,
    pub production: Result<ProductionMetrics, ApiError>,
    pub direction: Result<Direction, ApiError>,
    pub price: Result<f64, ApiError>,
    pub prices: Result<Vec<HistoricalPrice>, ApiError>,
    /// When set, every request waits for a permit before answering.
    gate: Option<Arc<Semaphore>>,
    calls: Mutex<HashMap<Resource, usize>>,
    submitted: Mutex<Vec<f64>>,
}

pub fn classification(i: usize) -> ClassificationMetrics {
    ClassificationMetrics {
        accuracy: 0.5 + i as f64 / 100.0,
        precision: 0.4 + i as f64 / 100.0,
        recall: 0.3 + i as f64 / 100.0,
        f1: None,
    }
}

pub fn regression(i: usize) -> RegressionMetrics {
    RegressionMetrics {
        mse: 1000.0 + i as f64,
        mae: 20.0 + i as f64,
        evs: 0.9,
    }
}

impl MockApi {
    /// Every resource answers successfully; history holds 8 entries per family.
    pub fn healthy() -> Self {
        Self {
            validation: Ok(ValidationResult {
                timestamp: "2024-03-01T06:00:03.512345".to_string(),
                success: true,
                messages: vec!["Column names match".to_string()],
            }),
            history: Ok(MetricHistory {
                classification: (0..8).map(classification).collect(),
                regression: (0..8).map(regression).collect(),
            }),
            limit: Ok(Some(0.85)),
            limit_update: Ok(()),
            production: Ok(ProductionMetrics {
                classification: (0..3)
                    .map(|i| ClassificationMetrics {
                        f1: Some(0.42),
                        ..classification(i)
                    })
                    .collect(),
            }),
            direction: Ok(Direction::Up),
            price: Ok(5123.25),
            prices: Ok(vec![
                HistoricalPrice {
                    date: "2024-03-01T00:00:00".to_string(),
                    close: 5137.08,
                },
                HistoricalPrice {
                    date: "2024-03-04T00:00:00".to_string(),
                    close: 5130.95,
                },
            ]),
            gate: None,
            calls: Mutex::new(HashMap::new()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Requests hang until permits are added to the returned semaphore.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn calls(&self, resource: Resource) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(&resource)
            .copied()
            .unwrap_or(0)
    }

    pub fn submitted(&self) -> Vec<f64> {
        self.submitted.lock().unwrap().clone()
    }

    async fn request(&self, resource: Resource) {
        *self.calls.lock().unwrap().entry(resource).or_default() += 1;
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.unwrap();
        }
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn validation_result(&self) -> Result<ValidationResult, ApiError> {
        self.request(Resource::ValidationResult).await;
        self.validation.clone()
    }

    async fn metric_history(&self) -> Result<MetricHistory, ApiError> {
        self.request(Resource::MetricHistory).await;
        self.history.clone()
    }

    async fn metric_limit(&self) -> Result<Option<f64>, ApiError> {
        self.request(Resource::MetricLimit).await;
        self.limit.clone()
    }

    async fn update_metric_limit(&self, value: f64) -> Result<(), ApiError> {
        self.submitted.lock().unwrap().push(value);
        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await.unwrap();
        }
        self.limit_update.clone()
    }

    async fn production_metrics(&self) -> Result<ProductionMetrics, ApiError> {
        self.request(Resource::ProductionMetrics).await;
        self.production.clone()
    }

    async fn prediction_direction(&self) -> Result<Direction, ApiError> {
        self.request(Resource::PredictionDirection).await;
        self.direction.clone()
    }

    async fn prediction_price(&self) -> Result<f64, ApiError> {
        self.request(Resource::PredictionPrice).await;
        self.price.clone()
    }

    async fn historical_prices(&self) -> Result<Vec<HistoricalPrice>, ApiError> {
        self.request(Resource::HistoricalPrices).await;
        self.prices.clone()
    }
}
