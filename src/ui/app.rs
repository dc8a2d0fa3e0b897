use std::sync::Arc;

use eframe::{Frame, egui};
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{AppConfig, UI_STATE_KEY};
use crate::data::DashboardApi;
use crate::pages::{ActivePage, Route};
use crate::ui::utils::setup_custom_visuals;

/// What survives a restart. Fetched data never does.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiState {
    pub last_route: Option<Route>,
}

pub struct ForecastDashboardApp {
    api: Arc<dyn DashboardApi>,
    config: AppConfig,
    pub(super) page: ActivePage,
    pub(super) pending_route: Option<Route>,
}

impl ForecastDashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        api: Arc<dyn DashboardApi>,
        config: AppConfig,
    ) -> Self {
        let restored = cc
            .storage
            .and_then(|storage| eframe::get_value::<UiState>(storage, UI_STATE_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            match &restored {
                Some(state) => log::info!("Loaded persisted UI state: {:?}", state),
                None => log::info!("No persisted UI state. Starting fresh."),
            }
        }

        let route = config
            .start_route
            .clone()
            .or_else(|| restored.and_then(|state| state.last_route))
            .unwrap_or_default();

        log::info!(
            "Opening {} against {}",
            route.path(),
            config.api.base_url()
        );

        let page = ActivePage::open(&route, &api, config.dashboard);
        Self {
            api,
            config,
            page,
            pending_route: None,
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    /// Unmount the current page and mount a fresh controller for `route`.
    /// Re-selecting the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.page.route() {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Navigating {} -> {}", self.page.route().path(), route.path());
        }

        self.page.unmount();
        self.page = ActivePage::open(&route, &self.api, self.config.dashboard);
    }
}

impl eframe::App for ForecastDashboardApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Nothing in flight may resolve into a page that is being torn down.
        self.page.unmount();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = UiState {
            last_route: Some(self.page.route()),
        };
        eframe::set_value(storage, UI_STATE_KEY, &state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.page.poll();

        self.render_nav_panel(ctx);
        self.render_central_panel(ctx);
        self.render_threshold_notice(ctx);

        if let Some(route) = self.pending_route.take() {
            self.navigate(route);
        }

        // Promises resolve off the UI thread; keep polling until they have.
        if self.page.is_loading() {
            ctx.request_repaint();
        }
    }
}
