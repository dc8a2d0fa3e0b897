use std::fmt;

/// Everything that can go wrong talking to the prediction service.
/// Always caught at the fetcher/controller boundary and turned into section state.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request could not complete (transport failure or non-success status)
    Network(String),
    /// The response body was not the expected shape
    Parse(String),
    /// A threshold update was rejected, by the server or before sending
    Validation(String),
    /// The service answered with an `{"error": ...}` body
    Service(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network failure: {}", msg),
            ApiError::Parse(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Validation(msg) => write!(f, "Rejected: {}", msg),
            ApiError::Service(msg) => write!(f, "Service error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
