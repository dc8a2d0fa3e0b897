// User interface components
pub mod app;
pub mod config;
pub mod styles;
pub mod ui_plot_view;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::ForecastDashboardApp;
pub use config::UI_CONFIG;
