//! Utility functions

pub mod time;
pub mod validation;

pub use time::{now_utc, parse_datetime, window_start};
pub use validation::{parse_tag_filter, validate_difficulty, validate_theme};
