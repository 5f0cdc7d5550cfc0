//! User-facing strings.

pub struct UiText {
    pub app_title: &'static str,
    pub input_heading: &'static str,
    pub load_button: &'static str,
    pub slot_required_suffix: &'static str,
    pub slot_optional_suffix: &'static str,
    pub slot_path_hint: &'static str,
    pub slot_drop_target: &'static str,
    pub slot_empty: &'static str,
    pub slot_clear: &'static str,
    pub slot_open: &'static str,
    pub drop_hint: &'static str,
    pub results_heading: &'static str,
    pub averages_heading: &'static str,
    pub averages_undefined: &'static str,
    pub evaluation_heading: &'static str,
    pub evaluation_missing: &'static str,
    pub detected_columns_heading: &'static str,
    pub chart_heading: &'static str,
    pub chart_empty: &'static str,
    pub table_empty: &'static str,
    pub warning_no_forecast: &'static str,
    pub error_prefix: &'static str,
    pub error_hint: &'static str,
    pub idle_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Forecast Viewer (LSTM vs GRU)",
    input_heading: "Input Files",
    load_button: "Load & Show",
    slot_required_suffix: "(required)",
    slot_optional_suffix: "(optional)",
    slot_path_hint: "path/to/file.csv",
    slot_drop_target: "Drop here",
    slot_empty: "No file loaded",
    slot_clear: "Clear",
    slot_open: "Open",
    drop_hint: "Drag CSV files onto the window to fill the slot marked 'Drop here'.",
    results_heading: "Forecast Results (Close)",
    averages_heading: "3-day average",
    averages_undefined: "Not enough forecast rows to compute an average.",
    evaluation_heading: "Evaluation Metrics (optional)",
    evaluation_missing: "Evaluation file not uploaded.",
    detected_columns_heading: "Detected columns",
    chart_heading: "Visualization (Historical 30 days + Forecast)",
    chart_empty: "No data points to plot.",
    table_empty: "No rows with a valid date.",
    warning_no_forecast: "⚠️ Please upload at least the 'Forecast CSV' file.",
    error_prefix: "An error occurred",
    error_hint: "Tip: make sure the CSV file does not contain duplicate header rows.",
    idle_hint: "Choose the CSV files above, then press 'Load & Show'.",
};
