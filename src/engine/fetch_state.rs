use strum_macros::Display;

use crate::data::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FetchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Tracked status of one remote retrieval.
///
/// `Idle -> Loading -> Success | Error`. A terminal state only changes when a new
/// fetch is started.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            Self::Idle => FetchStatus::Idle,
            Self::Loading => FetchStatus::Loading,
            Self::Success(_) => FetchStatus::Success,
            Self::Error(_) => FetchStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub(crate) fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Apply a result. Ignored (returns false) unless currently `Loading`.
    pub(crate) fn resolve(&mut self, result: Result<T, ApiError>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_idle_loading_success() {
        let mut state = FetchState::<u32>::default();
        assert_eq!(state.status(), FetchStatus::Idle);

        state.begin();
        assert!(state.is_loading());
        assert!(state.resolve(Ok(7)));
        assert_eq!(state.data(), Some(&7));
        assert!(!state.is_loading());
    }

    #[test]
    fn error_keeps_human_readable_description() {
        let mut state = FetchState::<u32>::Loading;
        assert!(state.resolve(Err(ApiError::Network("connection refused".into()))));
        assert_eq!(state.error(), Some("Network failure: connection refused"));
        assert_eq!(state.data(), None);
    }

    #[test]
    fn terminal_state_ignores_late_results() {
        let mut state = FetchState::<u32>::Loading;
        state.resolve(Ok(1));
        assert!(!state.resolve(Ok(2)));
        assert!(!state.resolve(Err(ApiError::Parse("late".into()))));
        assert_eq!(state, FetchState::Success(1));

        let mut idle = FetchState::<u32>::Idle;
        assert!(!idle.resolve(Ok(3)));
        assert_eq!(idle.status(), FetchStatus::Idle);
    }
}
