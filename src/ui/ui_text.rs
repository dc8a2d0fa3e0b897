/// Every user-facing string the views render.
pub struct UiText {
    pub app_title: &'static str,
    pub nav_home: &'static str,
    pub nav_dashboard: &'static str,
    pub home_header: &'static str,
    pub dashboard_header: &'static str,
    pub not_found_header: &'static str,

    pub section_prediction: &'static str,
    pub section_price_history: &'static str,
    pub label_direction: &'static str,
    pub label_predicted_close: &'static str,
    pub loading_prediction: &'static str,
    pub loading_prices: &'static str,

    pub section_validation: &'static str,
    pub section_model_quality: &'static str,
    pub section_production: &'static str,
    pub section_threshold: &'static str,
    pub subsection_classification: &'static str,
    pub subsection_regression: &'static str,
    pub label_last_run: &'static str,
    pub label_passed: &'static str,
    pub label_failed: &'static str,
    pub label_no_entries: &'static str,
    pub loading_validation: &'static str,
    pub loading_metrics: &'static str,
    pub loading_threshold: &'static str,

    pub label_threshold: &'static str,
    pub button_update: &'static str,
    pub notice_title: &'static str,
    pub notice_saved: &'static str,
    pub notice_failed: &'static str,
    pub button_ok: &'static str,

    pub plot_x_axis_date: &'static str,
    pub plot_y_axis_close: &'static str,
    pub plot_x_axis_run: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "S&P 500 Forecast",
    nav_home: "Home",
    nav_dashboard: "Dashboard",
    home_header: "Predicting S&P 500 stock prices using machine learning",
    dashboard_header: "Model dashboard",
    not_found_header: "404 | Page Not Found",

    section_prediction: "Tomorrow",
    section_price_history: "Close price history",
    label_direction: "Direction",
    label_predicted_close: "Predicted close",
    loading_prediction: "Asking the model...",
    loading_prices: "Loading price history...",

    section_validation: "Data validation",
    section_model_quality: "Model quality",
    section_production: "Production model",
    section_threshold: "Alert threshold",
    subsection_classification: "Classification",
    subsection_regression: "Regression",
    label_last_run: "Last run",
    label_passed: "PASSED",
    label_failed: "FAILED",
    label_no_entries: "No entries yet",
    loading_validation: "Loading validation result...",
    loading_metrics: "Loading metrics...",
    loading_threshold: "Loading threshold...",

    label_threshold: "Metric limit",
    button_update: "Update",
    notice_title: "Alert threshold",
    notice_saved: "Threshold updated to",
    notice_failed: "Threshold not updated",
    button_ok: "OK",

    plot_x_axis_date: "Date",
    plot_y_axis_close: "Close",
    plot_x_axis_run: "Run",
};
