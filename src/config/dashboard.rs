//! Page-level defaults for the dashboard views.

pub struct DashboardDefaults {
    /// How many of the most recent metric-history entries are kept and charted
    pub metric_window: usize,
    /// Threshold shown before the server answers (or when its answer is unusable)
    pub initial_metric_limit: f64,
    /// Vertical padding applied around chart series (fraction of the value span)
    pub chart_padding_pct: f64,
    /// Height of every chart, in points
    pub chart_height: f32,
}

pub const DASHBOARD: DashboardDefaults = DashboardDefaults {
    metric_window: 5,
    initial_metric_limit: 0.5,
    chart_padding_pct: 0.05,
    chart_height: 220.0,
};
