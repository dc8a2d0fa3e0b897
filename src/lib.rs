#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod pages;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use config::{AppConfig, DASHBOARD};
pub use data::{ApiError, DashboardApi, HttpApi};
pub use engine::{FetchState, ResourceFetcher, ThresholdController};
pub use pages::Route;
pub use ui::ForecastDashboardApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the forecast service, e.g. http://localhost:8000
    #[arg(long, env = "FORECAST_API_URL")]
    pub api_url: String,

    /// Page to open first (`/` or `/dashboard`); defaults to the last visited page
    #[arg(long)]
    pub page: Option<String>,

    /// Number of most recent metric-history entries to keep
    #[arg(long, default_value_t = DASHBOARD.metric_window)]
    pub metric_window: usize,

    /// Threshold shown until the service reports its own
    #[arg(long, default_value_t = DASHBOARD.initial_metric_limit)]
    pub initial_metric_limit: f64,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, config: AppConfig) -> Box<dyn eframe::App> {
    let api: Arc<dyn DashboardApi> = Arc::new(HttpApi::new(config.api.clone()));
    Box::new(ForecastDashboardApp::new(cc, api, config))
}
