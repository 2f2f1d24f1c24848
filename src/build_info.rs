use chrono::{DateTime, Datelike};

/// RFC 3339 timestamp written by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> Option<i32> {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.year())
}
