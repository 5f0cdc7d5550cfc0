//! Configuration module for the forecast viewer.

mod debug; // Private: files use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod detection;
pub mod plot;

// Re-export commonly used items
pub use detection::{AGGREGATION, DETECTION};
pub use plot::PLOT_CONFIG;

/// Currency label appended to every price shown to the user.
pub const CURRENCY_LABEL: &str = "IDR";

/// Display format for dates in tables and chart axes.
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display names of the two forecast models.
pub const SERIES_A_LABEL: &str = "LSTM";
pub const SERIES_B_LABEL: &str = "GRU";
