pub mod fetch_state;
pub mod fetcher;
pub mod threshold;
pub mod worker;

// Re-export key components
pub use fetch_state::{FetchState, FetchStatus};
pub use fetcher::ResourceFetcher;
pub use threshold::{ThresholdController, ThresholdNotice, ThresholdState};
pub use worker::spawn_fetch;
