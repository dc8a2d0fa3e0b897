use poll_promise::Promise;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{ApiError, DashboardApi, Resource};

use super::fetch_state::FetchState;
use super::fetcher::ResourceFetcher;
use super::worker::spawn_fetch;

/// Editable alert threshold.
///
/// `Uninitialized -> Loaded -> Editing -> Submitting -> Loaded | SubmitFailed`.
/// Whatever is shown is either the last confirmed value (`Uninitialized`, `Loaded`)
/// or the user's own input (every other state), never a mix of both.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdState {
    Uninitialized,
    Loaded(f64),
    Editing { input: String },
    Submitting { input: String, value: f64 },
    SubmitFailed { input: String, error: String },
}

/// Acknowledgment shown after a submit until the user dismisses it.
#[derive(Debug, Clone, PartialEq)]
pub enum ThresholdNotice {
    Saved(f64),
    Failed(String),
}

pub struct ThresholdController {
    state: ThresholdState,
    /// Last value the server confirmed (or the configured fallback before it answers)
    confirmed: f64,
    load: ResourceFetcher<Option<f64>>,
    submit: Option<Promise<Result<(), ApiError>>>,
    notice: Option<ThresholdNotice>,
}

impl ThresholdController {
    pub fn new(initial: f64) -> Self {
        Self {
            state: ThresholdState::Uninitialized,
            confirmed: initial,
            load: ResourceFetcher::new(Resource::MetricLimit),
            submit: None,
            notice: None,
        }
    }

    pub fn state(&self) -> &ThresholdState {
        &self.state
    }

    pub fn confirmed(&self) -> f64 {
        self.confirmed
    }

    pub fn load_state(&self) -> &FetchState<Option<f64>> {
        self.load.state()
    }

    pub fn notice(&self) -> Option<&ThresholdNotice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ThresholdState::Submitting { .. })
    }

    /// False until there is something worth sending: a server-confirmed value or a user edit.
    /// The configured fallback shown before the first load resolves is never submitted.
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.state,
            ThresholdState::Uninitialized | ThresholdState::Submitting { .. }
        )
    }

    pub fn is_busy(&self) -> bool {
        self.load.is_in_flight() || self.submit.is_some()
    }

    /// Text for the input field.
    pub fn display_value(&self) -> String {
        match &self.state {
            ThresholdState::Uninitialized => self.confirmed.to_string(),
            ThresholdState::Loaded(value) => value.to_string(),
            ThresholdState::Editing { input }
            | ThresholdState::Submitting { input, .. }
            | ThresholdState::SubmitFailed { input, .. } => input.clone(),
        }
    }

    pub fn load(&mut self, api: &Arc<dyn DashboardApi>) {
        self.load
            .start_with(api, |api| async move { api.metric_limit().await });
    }

    pub fn begin_load(&mut self, promise: Promise<Result<Option<f64>, ApiError>>) {
        self.load.start(promise);
    }

    /// Local edit; no network. Ignored while a submit is in flight.
    pub fn edit(&mut self, input: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.transition(ThresholdState::Editing {
            input: input.into(),
        });
        true
    }

    pub fn submit(&mut self, api: &Arc<dyn DashboardApi>) -> bool {
        let api = Arc::clone(api);
        self.submit_with(move |value| {
            spawn_fetch(async move { api.update_metric_limit(value).await })
        })
    }

    /// Validate the current input and, if it is a finite number, send it with `launch`.
    /// Returns true when a request was issued.
    pub fn submit_with<F>(&mut self, launch: F) -> bool
    where
        F: FnOnce(f64) -> Promise<Result<(), ApiError>>,
    {
        if !self.can_submit() {
            return false;
        }

        let input = self.display_value();
        let value = match parse_threshold(&input) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Threshold not submitted: {}", err);
                self.notice = Some(ThresholdNotice::Failed(err.to_string()));
                self.transition(ThresholdState::SubmitFailed {
                    input,
                    error: err.to_string(),
                });
                return false;
            }
        };

        self.notice = None;
        self.submit = Some(launch(value));
        self.transition(ThresholdState::Submitting { input, value });
        true
    }

    /// Apply any finished load/submit. Returns true when something changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        if self.load.poll() {
            self.apply_loaded();
            changed = true;
        }

        if let Some(promise) = self.submit.take() {
            match promise.try_take() {
                Ok(result) => {
                    self.apply_submitted(result);
                    changed = true;
                }
                Err(promise) => self.submit = Some(promise),
            }
        }

        changed
    }

    /// Drop in-flight requests without applying them.
    pub fn cancel(&mut self) {
        self.load.cancel();
        self.submit = None;
    }

    fn apply_loaded(&mut self) {
        match self.load.state() {
            FetchState::Success(Some(value)) => self.confirmed = *value,
            FetchState::Success(None) => {
                log::warn!(
                    "Metric limit missing or malformed, keeping {}",
                    self.confirmed
                );
            }
            _ => {}
        }

        // A pending edit wins over the server value; only the confirmed value moves.
        if matches!(
            self.state,
            ThresholdState::Uninitialized | ThresholdState::Loaded(_)
        ) {
            self.transition(ThresholdState::Loaded(self.confirmed));
        }
    }

    fn apply_submitted(&mut self, result: Result<(), ApiError>) {
        let ThresholdState::Submitting { input, value } = &self.state else {
            return;
        };
        let (input, value) = (input.clone(), *value);

        match result {
            Ok(()) => {
                self.confirmed = value;
                self.notice = Some(ThresholdNotice::Saved(value));
                self.transition(ThresholdState::Loaded(value));
            }
            Err(err) => {
                log::error!("Failed to update metric limit to {}: {}", value, err);
                self.notice = Some(ThresholdNotice::Failed(err.to_string()));
                self.transition(ThresholdState::SubmitFailed {
                    input,
                    error: err.to_string(),
                });
            }
        }
    }

    fn transition(&mut self, next: ThresholdState) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_threshold_transitions && self.state != next {
            log::info!("[threshold] {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

/// Thresholds must be finite floats; anything else never reaches the server.
pub fn parse_threshold(input: &str) -> Result<f64, ApiError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ApiError::Validation(format!(
            "'{}' is not a valid number",
            trimmed
        ))),
    }
}
