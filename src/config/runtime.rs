//! Runtime configuration assembled from the CLI (native) or the page (WASM).

use anyhow::{Result, bail};

use crate::Cli;
use crate::config::{ApiConfig, DASHBOARD};
use crate::pages::Route;

/// Settings handed to the dashboard page controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSettings {
    pub metric_window: usize,
    pub initial_metric_limit: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            metric_window: DASHBOARD.metric_window,
            initial_metric_limit: DASHBOARD.initial_metric_limit,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardSettings,
    /// Page to open first; `None` resumes the last visited page
    pub start_route: Option<Route>,
}

impl AppConfig {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            dashboard: DashboardSettings::default(),
            start_route: None,
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.metric_window == 0 {
            bail!("--metric-window must be at least 1");
        }
        if !cli.initial_metric_limit.is_finite() {
            bail!("--initial-metric-limit must be a finite number");
        }

        Ok(Self {
            api: ApiConfig::new(&cli.api_url)?,
            dashboard: DashboardSettings {
                metric_window: cli.metric_window,
                initial_metric_limit: cli.initial_metric_limit,
            },
            start_route: cli.page.as_deref().map(Route::from_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_defaults_follow_dashboard_constants() {
        let cli = Cli::parse_from(["forecast-dashboard", "--api-url", "http://localhost:8000"]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.dashboard, DashboardSettings::default());
        assert_eq!(config.start_route, None);
        assert_eq!(config.api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn cli_overrides_window_and_page() {
        let cli = Cli::parse_from([
            "forecast-dashboard",
            "--api-url",
            "https://forecast.example.com",
            "--metric-window",
            "10",
            "--page",
            "/dashboard",
        ]);
        let config = AppConfig::from_cli(&cli).unwrap();
        assert_eq!(config.dashboard.metric_window, 10);
        assert_eq!(config.start_route, Some(Route::Dashboard));
    }

    #[test]
    fn zero_window_is_rejected() {
        let cli = Cli::parse_from([
            "forecast-dashboard",
            "--api-url",
            "http://localhost:8000",
            "--metric-window",
            "0",
        ]);
        assert!(AppConfig::from_cli(&cli).is_err());
    }
}
