use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{DashboardApi, Resource};
use crate::engine::{FetchState, ResourceFetcher};
use crate::models::{Direction, HistoricalPrice, PriceChart};

use super::Page;

/// Landing page: tomorrow's prediction and the close-price history.
pub struct HomePage {
    direction: ResourceFetcher<Direction>,
    price: ResourceFetcher<f64>,
    prices: ResourceFetcher<Vec<HistoricalPrice>>,
    price_chart: Option<PriceChart>,
    chart_padding_pct: f64,
    mounted: bool,
}

impl HomePage {
    pub fn new(chart_padding_pct: f64) -> Self {
        Self {
            direction: ResourceFetcher::new(Resource::PredictionDirection),
            price: ResourceFetcher::new(Resource::PredictionPrice),
            prices: ResourceFetcher::new(Resource::HistoricalPrices),
            price_chart: None,
            chart_padding_pct,
            mounted: false,
        }
    }

    pub fn direction(&self) -> &FetchState<Direction> {
        self.direction.state()
    }

    pub fn price(&self) -> &FetchState<f64> {
        self.price.state()
    }

    pub fn prices(&self) -> &FetchState<Vec<HistoricalPrice>> {
        self.prices.state()
    }

    pub fn price_chart(&self) -> Option<&PriceChart> {
        self.price_chart.as_ref()
    }
}

impl Page for HomePage {
    fn mount(&mut self, api: &Arc<dyn DashboardApi>) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_page_lifecycle {
            log::info!("Mounting home page");
        }

        self.mounted = true;
        self.direction
            .start_with(api, |api| async move { api.prediction_direction().await });
        self.price
            .start_with(api, |api| async move { api.prediction_price().await });
        self.prices
            .start_with(api, |api| async move { api.historical_prices().await });
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.direction.cancel();
        self.price.cancel();
        self.prices.cancel();
    }

    fn poll(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        let direction_changed = self.direction.poll();
        let price_changed = self.price.poll();
        let prices_changed = self.prices.poll();

        if prices_changed {
            self.price_chart = self
                .prices
                .state()
                .data()
                .map(|prices| PriceChart::from_prices(prices, self.chart_padding_pct));
        }

        direction_changed || price_changed || prices_changed
    }

    fn is_loading(&self) -> bool {
        self.direction.state().is_loading()
            || self.price.state().is_loading()
            || self.prices.state().is_loading()
    }
}
