use poll_promise::Promise;
use std::future::Future;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{ApiError, DashboardApi, Resource};
use crate::utils::app_time::{AppInstant, now};

use super::fetch_state::FetchState;
use super::worker::{MaybeSend, spawn_fetch};

/// Owns the [`FetchState`] of exactly one remote resource on one page.
pub struct ResourceFetcher<T: Send + 'static> {
    resource: Resource,
    state: FetchState<T>,
    pending: Option<Promise<Result<T, ApiError>>>,
    started_at: Option<AppInstant>,
}

impl<T: Send + 'static> ResourceFetcher<T> {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            state: FetchState::Idle,
            pending: None,
            started_at: None,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Track an already-issued request. Any previous request is dropped unapplied.
    pub fn start(&mut self, promise: Promise<Result<T, ApiError>>) {
        self.state.begin();
        self.pending = Some(promise);
        self.started_at = Some(now());
    }

    /// Issue the request built by `call` and track it.
    pub fn start_with<F, Fut>(&mut self, api: &Arc<dyn DashboardApi>, call: F)
    where
        F: FnOnce(Arc<dyn DashboardApi>) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + MaybeSend + 'static,
    {
        let promise = spawn_fetch(call(Arc::clone(api)));
        self.start(promise);
    }

    /// Apply the result if it has arrived. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(promise) = self.pending.take() else {
            return false;
        };

        let result = match promise.try_take() {
            Ok(result) => result,
            Err(promise) => {
                self.pending = Some(promise);
                return false;
            }
        };

        let elapsed_ms = self
            .started_at
            .take()
            .map(|t| t.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or_default();

        if let Err(err) = &result {
            log::error!(
                "Failed to fetch {} after {:.0}ms: {}",
                self.resource,
                elapsed_ms,
                err
            );
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_timings {
            log::info!("{} resolved in {:.0}ms", self.resource, elapsed_ms);
        }

        self.state.resolve(result)
    }

    /// Drop the in-flight request; whatever it resolves to is never applied.
    /// Returns true when something was actually in flight.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();

        #[cfg(debug_assertions)]
        if cancelled && DEBUG_FLAGS.print_page_lifecycle {
            log::info!("Discarding in-flight {} request", self.resource);
        }

        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FetchStatus;

    fn fetcher() -> ResourceFetcher<f64> {
        ResourceFetcher::new(Resource::PredictionPrice)
    }

    #[test]
    fn start_moves_to_loading_until_the_promise_resolves() {
        let mut fetcher = fetcher();
        let (sender, promise) = Promise::new();
        fetcher.start(promise);

        assert_eq!(fetcher.state().status(), FetchStatus::Loading);
        assert!(!fetcher.poll());
        assert!(fetcher.state().is_loading());

        sender.send(Ok(5123.25));
        assert!(fetcher.poll());
        assert_eq!(fetcher.state().data(), Some(&5123.25));
        assert!(!fetcher.is_in_flight());
        assert!(!fetcher.poll());
    }

    #[test]
    fn failure_becomes_error_state() {
        let mut fetcher = fetcher();
        let (sender, promise) = Promise::new();
        fetcher.start(promise);

        sender.send(Err(ApiError::Service("No data fetched from Yahoo Finance".into())));
        assert!(fetcher.poll());
        assert_eq!(fetcher.state().status(), FetchStatus::Error);
        assert!(fetcher.state().error().unwrap().contains("Yahoo"));
    }

    #[test]
    fn cancelled_request_is_never_applied() {
        let mut fetcher = fetcher();
        let (sender, promise) = Promise::new();
        fetcher.start(promise);

        assert!(fetcher.cancel());
        sender.send(Ok(1.0));

        assert!(!fetcher.poll());
        assert!(fetcher.state().is_loading());
        assert!(!fetcher.cancel());
    }

    #[test]
    fn restart_discards_the_previous_request() {
        let mut fetcher = fetcher();
        let (first_sender, first) = Promise::new();
        fetcher.start(first);
        let (second_sender, second) = Promise::new();
        fetcher.start(second);

        first_sender.send(Ok(1.0));
        assert!(!fetcher.poll());

        second_sender.send(Ok(2.0));
        assert!(fetcher.poll());
        assert_eq!(fetcher.state().data(), Some(&2.0));
    }

    #[test]
    fn independent_fetchers_do_not_affect_each_other() {
        let mut failing = fetcher();
        let mut healthy = fetcher();
        let (fail_tx, fail_rx) = Promise::new();
        let (ok_tx, ok_rx) = Promise::new();
        failing.start(fail_rx);
        healthy.start(ok_rx);

        fail_tx.send(Err(ApiError::Network("timeout".into())));
        assert!(failing.poll());
        assert!(healthy.state().is_loading());

        ok_tx.send(Ok(4.0));
        assert!(healthy.poll());
        assert_eq!(healthy.state().data(), Some(&4.0));
        assert_eq!(failing.state().status(), FetchStatus::Error);
    }
}
