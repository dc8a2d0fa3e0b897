//! Wire envelopes of the service responses and their conversion into domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::ApiError;
use crate::models::{Direction, HistoricalPrice};

/// `{"prediction": [...]}` or `{"error": "..."}`.
/// ONNX regressors emit `[[x]]`, classifiers `[x]`; both are accepted.
#[derive(Debug, Deserialize)]
pub struct PredictionEnvelope {
    #[serde(default)]
    prediction: Option<Vec<PredictionValue>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PredictionValue {
    Scalar(f64),
    Nested(Vec<f64>),
}

impl PredictionEnvelope {
    fn first_value(self) -> Result<f64, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Service(error));
        }
        let values = self
            .prediction
            .ok_or_else(|| ApiError::Parse("missing `prediction`".to_string()))?;

        let first = match values.into_iter().next() {
            Some(PredictionValue::Scalar(v)) => Some(v),
            Some(PredictionValue::Nested(inner)) => inner.into_iter().next(),
            None => None,
        };
        first.ok_or_else(|| ApiError::Parse("empty `prediction`".to_string()))
    }

    pub fn direction(self) -> Result<Direction, ApiError> {
        let class = self.first_value()?;
        Direction::from_class(class)
            .ok_or_else(|| ApiError::Parse(format!("not a direction class: {class}")))
    }

    pub fn price(self) -> Result<f64, ApiError> {
        let price = self.first_value()?;
        if price.is_finite() {
            Ok(price)
        } else {
            Err(ApiError::Parse(format!("not a price: {price}")))
        }
    }
}

/// `{"prices": [{"Date": ..., "Close": ...}]}` or `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct PricesEnvelope {
    #[serde(default)]
    prices: Option<Vec<HistoricalPrice>>,
    #[serde(default)]
    error: Option<String>,
}

impl PricesEnvelope {
    pub fn into_prices(self) -> Result<Vec<HistoricalPrice>, ApiError> {
        if let Some(error) = self.error {
            return Err(ApiError::Service(error));
        }
        self.prices
            .ok_or_else(|| ApiError::Parse("missing `prices`".to_string()))
    }
}

/// Reads `latest_metric_limit.value`, accepting a number or a numeric string.
/// Anything else (missing, null, non-numeric, non-finite) is `None`.
pub fn metric_limit_value(body: &Value) -> Option<f64> {
    let value = match body.pointer("/latest_metric_limit/value")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Body of the threshold update POST.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricLimitUpdate {
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(body: &str) -> PredictionEnvelope {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn direction_one_is_up() {
        assert_eq!(envelope(r#"{"prediction": [1]}"#).direction(), Ok(Direction::Up));
        assert_eq!(envelope(r#"{"prediction": [0]}"#).direction(), Ok(Direction::Down));
    }

    #[test]
    fn nested_regression_output() {
        assert_eq!(envelope(r#"{"prediction": [[5123.25]]}"#).price(), Ok(5123.25));
        assert_eq!(envelope(r#"{"prediction": [5123.25, 1.0]}"#).price(), Ok(5123.25));
    }

    #[test]
    fn error_body_is_a_service_error() {
        let err = envelope(r#"{"error": "No data fetched from Yahoo Finance"}"#)
            .direction()
            .unwrap_err();
        assert_eq!(err, ApiError::Service("No data fetched from Yahoo Finance".into()));
    }

    #[test]
    fn empty_or_missing_prediction_is_a_parse_error() {
        assert!(matches!(envelope(r#"{"prediction": []}"#).price(), Err(ApiError::Parse(_))));
        assert!(matches!(envelope(r#"{"prediction": [[]]}"#).price(), Err(ApiError::Parse(_))));
        assert!(matches!(envelope("{}").direction(), Err(ApiError::Parse(_))));
    }

    #[test]
    fn prices_keep_the_service_order() {
        // Chronological already; a string sort would swap the first two (mixed offsets).
        let body = r#"{"prices": [
            {"Date": "2024-03-02T01:00:00+05:00", "Close": 5137.08},
            {"Date": "2024-03-01T22:00:00+00:00", "Close": 5130.95},
            {"Date": "2024-03-05T00:00:00-05:00", "Close": 5078.65}
        ]}"#;
        let prices = serde_json::from_str::<PricesEnvelope>(body)
            .unwrap()
            .into_prices()
            .unwrap();
        let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![5137.08, 5130.95, 5078.65]);
    }

    #[test]
    fn metric_limit_accepts_numbers_and_numeric_strings() {
        assert_eq!(metric_limit_value(&json!({"latest_metric_limit": {"value": 0.7}})), Some(0.7));
        assert_eq!(
            metric_limit_value(&json!({"latest_metric_limit": {"value": "0.85"}})),
            Some(0.85)
        );
    }

    #[test]
    fn metric_limit_rejects_junk() {
        for body in [
            json!({}),
            json!({"latest_metric_limit": null}),
            json!({"latest_metric_limit": {"value": null}}),
            json!({"latest_metric_limit": {"value": "abc"}}),
            json!({"latest_metric_limit": {"value": "NaN"}}),
            json!({"latest_metric_limit": {"value": [0.5]}}),
        ] {
            assert_eq!(metric_limit_value(&body), None, "body {body}");
        }
    }

    #[test]
    fn update_body_shape() {
        let body = serde_json::to_value(MetricLimitUpdate { value: 0.9 }).unwrap();
        assert_eq!(body, json!({"value": 0.9}));
    }
}
