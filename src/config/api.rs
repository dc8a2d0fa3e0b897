//! Prediction/metrics service endpoints and the runtime API configuration.

use anyhow::{Context, Result, bail};
use reqwest::Url;

/// Paths of every resource the dashboard consumes, relative to the service base URL.
pub struct Endpoints {
    pub validation_result: &'static str,
    pub metric_history: &'static str,
    pub metric_limit_latest: &'static str,
    pub metric_limit_update: &'static str,
    pub production_metrics: &'static str,
    pub prediction_direction: &'static str,
    pub prediction_price: &'static str,
    pub historical_prices: &'static str,
}

/// The Master API Configuration
pub struct ApiDefaults {
    pub endpoints: Endpoints,
    /// Environment variable holding the service base URL
    pub base_url_env: &'static str,
}

pub const API: ApiDefaults = ApiDefaults {
    endpoints: Endpoints {
        validation_result: "/latest-validation-result",
        metric_history: "/metrics-history",
        metric_limit_latest: "/metric-limit/latest",
        metric_limit_update: "/metric-limit",
        production_metrics: "/production-metrics-history",
        prediction_direction: "/predict",
        prediction_price: "/predict/regression",
        historical_prices: "/historical-prices",
    },
    base_url_env: "FORECAST_API_URL",
};

/// Where the service lives. There is deliberately no default host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            bail!("API base URL is empty (set --api-url or {})", API.base_url_env);
        }

        let parsed =
            Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {trimmed}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("API base URL must be http(s), got {}", parsed.scheme());
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path such as `/metrics-history`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let cfg = ApiConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(cfg.base_url(), "http://localhost:8000");
        assert_eq!(
            cfg.url_for(API.endpoints.metric_limit_latest),
            "http://localhost:8000/metric-limit/latest"
        );
    }

    #[test]
    fn hosted_base_with_path_prefix() {
        let cfg = ApiConfig::new("https://forecast.example.com/api").unwrap();
        assert_eq!(
            cfg.url_for(API.endpoints.prediction_price),
            "https://forecast.example.com/api/predict/regression"
        );
    }

    #[test]
    fn rejects_missing_or_bad_hosts() {
        assert!(ApiConfig::new("").is_err());
        assert!(ApiConfig::new("  / ").is_err());
        assert!(ApiConfig::new("not a url").is_err());
        assert!(ApiConfig::new("ftp://example.com").is_err());
    }
}
