use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub nav_panel: Color32,
    pub direction_up: Color32,
    pub direction_down: Color32,
    pub validation_passed: Color32,
    pub validation_failed: Color32,
    pub price: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the metric tables' first column
    pub table_label_width: f32,
    pub threshold_input_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 34, 42),
        nav_panel: Color32::from_rgb(25, 25, 25),
        direction_up: Color32::from_rgb(100, 200, 100),
        direction_down: Color32::from_rgb(255, 100, 100),
        validation_passed: Color32::from_rgb(130, 200, 140),
        validation_failed: Color32::from_rgb(255, 100, 100),
        price: Color32::from_rgb(100, 200, 255),
    },
    table_label_width: 90.0,
    threshold_input_width: 80.0,
};
