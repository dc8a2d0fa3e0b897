//! Page controllers: own the fetch state of everything a page shows.

pub mod dashboard;
pub mod home;
pub mod route;

use std::sync::Arc;

use crate::config::{DASHBOARD, DashboardSettings};
use crate::data::DashboardApi;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use route::Route;

/// Lifecycle shared by every page that talks to the service.
pub trait Page {
    /// Issue every request the page needs, concurrently.
    fn mount(&mut self, api: &Arc<dyn DashboardApi>);
    /// Stop observing in-flight requests. Nothing resolves into the page afterwards.
    fn unmount(&mut self);
    /// Apply results that arrived since the last call. Returns true when anything changed.
    fn poll(&mut self) -> bool;
    fn is_loading(&self) -> bool;
}

/// The page currently on screen.
pub enum ActivePage {
    Home(HomePage),
    Dashboard(DashboardPage),
    NotFound(String),
}

impl ActivePage {
    /// Build a fresh controller for `route` and mount it.
    pub fn open(route: &Route, api: &Arc<dyn DashboardApi>, settings: DashboardSettings) -> Self {
        let mut page = match route {
            Route::Home => ActivePage::Home(HomePage::new(DASHBOARD.chart_padding_pct)),
            Route::Dashboard => ActivePage::Dashboard(DashboardPage::new(settings)),
            Route::NotFound(path) => ActivePage::NotFound(path.clone()),
        };
        if let Some(controller) = page.controller_mut() {
            controller.mount(api);
        }
        page
    }

    pub fn route(&self) -> Route {
        match self {
            ActivePage::Home(_) => Route::Home,
            ActivePage::Dashboard(_) => Route::Dashboard,
            ActivePage::NotFound(path) => Route::NotFound(path.clone()),
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut dyn Page> {
        match self {
            ActivePage::Home(page) => Some(page),
            ActivePage::Dashboard(page) => Some(page),
            ActivePage::NotFound(_) => None,
        }
    }

    pub fn poll(&mut self) -> bool {
        self.controller_mut().is_some_and(|page| page.poll())
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActivePage::Home(page) => page.is_loading(),
            ActivePage::Dashboard(page) => page.is_loading(),
            ActivePage::NotFound(_) => false,
        }
    }

    pub fn unmount(&mut self) {
        if let Some(page) = self.controller_mut() {
            page.unmount();
        }
    }
}

/// Poll until nothing is loading, yielding to the runtime in between.
#[cfg(test)]
pub(crate) async fn settle(page: &mut dyn Page) {
    for _ in 0..200 {
        page.poll();
        if !page.is_loading() {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    panic!("page never settled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Resource;
    use crate::data::mock_api::MockApi;
    use strum::IntoEnumIterator;

    #[tokio::test]
    async fn opening_a_route_mounts_only_that_page() {
        let mock = Arc::new(MockApi::healthy());
        let api: Arc<dyn DashboardApi> = mock.clone();

        let mut page = ActivePage::open(&Route::Dashboard, &api, DashboardSettings::default());
        assert_eq!(page.route(), Route::Dashboard);
        assert!(page.is_loading());
        page.unmount();

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert_eq!(mock.calls(Resource::HistoricalPrices), 0);
        assert_eq!(mock.calls(Resource::MetricHistory), 1);
    }

    #[tokio::test]
    async fn unknown_route_issues_no_requests() {
        let mock = Arc::new(MockApi::healthy());
        let api: Arc<dyn DashboardApi> = mock.clone();

        let route = Route::from_path("/nope");
        let mut page = ActivePage::open(&route, &api, DashboardSettings::default());
        assert!(!page.is_loading());
        assert!(!page.poll());
        assert_eq!(page.route(), Route::NotFound("/nope".into()));
        for resource in Resource::iter() {
            assert_eq!(mock.calls(resource), 0);
        }
    }
}
