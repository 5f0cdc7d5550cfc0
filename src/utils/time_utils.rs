use chrono::{DateTime, NaiveDateTime};

use crate::config::DISPLAY_DATE_FORMAT;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_D: f64 = 86_400.0;
}

/// Display form of a date cell (`2024-01-31`).
pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Plot x coordinate: fractional days since the Unix epoch.
pub fn date_to_plot_x(date: &NaiveDateTime) -> f64 {
    date.and_utc().timestamp() as f64 / TimeUtils::S_IN_D
}

/// Inverse of [`date_to_plot_x`], used by axis and hover labels.
/// Returns an empty string for coordinates outside chrono's range.
pub fn plot_x_to_label(x: f64) -> String {
    let secs = (x * TimeUtils::S_IN_D).round();
    if !secs.is_finite() {
        return String::new();
    }
    match DateTime::from_timestamp(secs as i64, 0) {
        Some(dt) => dt.format(DISPLAY_DATE_FORMAT).to_string(),
        None => String::new(),
    }
}
