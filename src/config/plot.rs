//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub price_line_color: Color32,
    pub price_line_width: f32,
    pub metric_line_width: f32,
    /// One colour per metric field, indexed by `MetricField` declaration order
    pub metric_colors: &'static [Color32],
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(255, 215, 0), // Gold
    price_line_width: 2.0,
    metric_line_width: 1.5,
    metric_colors: &[
        Color32::from_rgb(0, 191, 255),   // accuracy - deep sky blue
        Color32::from_rgb(0, 200, 0),     // precision - green
        Color32::from_rgb(255, 165, 0),   // recall - orange
        Color32::from_rgb(255, 145, 164), // f1 - salmon pink
        Color32::from_rgb(200, 0, 0),     // mse - red
        Color32::from_rgb(180, 160, 230), // mae - lavender
        Color32::from_rgb(0, 255, 255),   // evs - cyan
    ],
};
