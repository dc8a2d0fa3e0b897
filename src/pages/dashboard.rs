use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DashboardSettings;
use crate::data::{DashboardApi, Resource};
use crate::engine::{FetchState, ResourceFetcher, ThresholdController};
use crate::models::{MetricCharts, MetricHistory, ProductionMetrics, ValidationResult};

use super::Page;

/// Model health overview: validation result, windowed metric history,
/// production metrics and the editable alert threshold.
pub struct DashboardPage {
    settings: DashboardSettings,
    validation: ResourceFetcher<ValidationResult>,
    history: ResourceFetcher<MetricHistory>,
    production: ResourceFetcher<ProductionMetrics>,
    threshold: ThresholdController,
    charts: Option<MetricCharts>,
    api: Option<Arc<dyn DashboardApi>>,
}

impl DashboardPage {
    pub fn new(settings: DashboardSettings) -> Self {
        Self {
            settings,
            validation: ResourceFetcher::new(Resource::ValidationResult),
            history: ResourceFetcher::new(Resource::MetricHistory),
            production: ResourceFetcher::new(Resource::ProductionMetrics),
            threshold: ThresholdController::new(settings.initial_metric_limit),
            charts: None,
            api: None,
        }
    }

    pub fn settings(&self) -> DashboardSettings {
        self.settings
    }

    pub fn validation(&self) -> &FetchState<ValidationResult> {
        self.validation.state()
    }

    /// Already trimmed to the configured window.
    pub fn history(&self) -> &FetchState<MetricHistory> {
        self.history.state()
    }

    pub fn production(&self) -> &FetchState<ProductionMetrics> {
        self.production.state()
    }

    pub fn charts(&self) -> Option<&MetricCharts> {
        self.charts.as_ref()
    }

    pub fn threshold(&self) -> &ThresholdController {
        &self.threshold
    }

    pub fn edit_threshold(&mut self, input: impl Into<String>) -> bool {
        self.threshold.edit(input)
    }

    pub fn dismiss_threshold_notice(&mut self) {
        self.threshold.dismiss_notice();
    }

    /// Send the edited threshold. No-op while unmounted.
    pub fn submit_threshold(&mut self) -> bool {
        match &self.api {
            Some(api) => {
                let api = Arc::clone(api);
                self.threshold.submit(&api)
            }
            None => false,
        }
    }
}

impl Page for DashboardPage {
    fn mount(&mut self, api: &Arc<dyn DashboardApi>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_page_lifecycle {
            log::info!(
                "Mounting dashboard page (window {})",
                self.settings.metric_window
            );
        }

        self.api = Some(Arc::clone(api));

        let window = self.settings.metric_window;
        self.validation
            .start_with(api, |api| async move { api.validation_result().await });
        self.history.start_with(api, move |api| async move {
            api.metric_history().await.map(|h| h.windowed(window))
        });
        self.production
            .start_with(api, |api| async move { api.production_metrics().await });
        self.threshold.load(api);
    }

    fn unmount(&mut self) {
        self.api = None;
        self.validation.cancel();
        self.history.cancel();
        self.production.cancel();
        self.threshold.cancel();
    }

    fn poll(&mut self) -> bool {
        if self.api.is_none() {
            return false;
        }

        let validation_changed = self.validation.poll();
        let history_changed = self.history.poll();
        let production_changed = self.production.poll();
        let threshold_changed = self.threshold.poll();

        if history_changed {
            self.charts = self.history.state().data().map(MetricCharts::from_history);
        }

        validation_changed || history_changed || production_changed || threshold_changed
    }

    fn is_loading(&self) -> bool {
        self.validation.state().is_loading()
            || self.history.state().is_loading()
            || self.production.state().is_loading()
            || self.threshold.is_busy()
    }
}
