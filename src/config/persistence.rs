//! UI state persistence configuration

/// eframe app id; native builds keep their storage file under this name
pub const APP_ID: &str = "forecast-dashboard";

/// Storage key for the persisted UI state (last visited route)
pub const UI_STATE_KEY: &str = "forecast_dashboard_ui_state";
