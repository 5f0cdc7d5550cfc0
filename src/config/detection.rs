//! Column detection and aggregation configuration

/// Substrings (lower case) that mark a column as the date column.
pub struct DateDetection {
    pub keywords: &'static [&'static str],
    /// Column used when no header matches any keyword.
    pub fallback_index: usize,
}

/// Substrings (lower case) and positional fallbacks for the semantic columns.
pub struct RoleKeywords {
    pub series_a: &'static [&'static str],
    pub series_a_fallback: usize,
    pub series_b: &'static [&'static str],
    pub series_b_fallback: usize,
    pub price: &'static [&'static str],
    pub price_fallback: usize,
}

pub struct DetectionConfig {
    pub date: DateDetection,
    pub roles: RoleKeywords,
}

pub const DETECTION: DetectionConfig = DetectionConfig {
    date: DateDetection {
        keywords: &["date", "tanggal"],
        fallback_index: 0,
    },
    roles: RoleKeywords {
        series_a: &["lstm"],
        series_a_fallback: 1,
        series_b: &["gru"],
        series_b_fallback: 2,
        price: &["close"],
        price_fallback: 1,
    },
};

/// Window sizes used when summarising and plotting
pub struct AggregationConfig {
    /// Trailing rows averaged for the model comparison (fixed).
    pub trailing_window: usize,
    /// Trailing historical rows drawn on the chart.
    pub historical_window: usize,
}

pub const AGGREGATION: AggregationConfig = AggregationConfig {
    trailing_window: 3,
    historical_window: 30,
};
