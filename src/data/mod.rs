// Access to the prediction/metrics service
pub mod api;
pub mod error;
pub mod http_api;
pub mod payloads;

#[cfg(test)]
pub mod mock_api;

// Re-export commonly used types
pub use api::{DashboardApi, Resource};
pub use error::ApiError;
pub use http_api::HttpApi;
