//! Configuration module for the forecast dashboard.

pub mod api;
pub mod dashboard;

mod debug; // Private: read it through crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;
mod runtime;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use dashboard::DASHBOARD;
pub use persistence::{APP_ID, UI_STATE_KEY};
pub use plot::PLOT_CONFIG;
pub use runtime::{AppConfig, DashboardSettings};
