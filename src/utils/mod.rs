pub mod app_time;
pub mod maths_utils;
pub mod time_utils;

pub use maths_utils::window;
pub use time_utils::{TimeUtils, format_date};
