use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub info_box: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height of the scrollable forecast table
    pub results_table_height: f32,
    /// Share of the window width given to the table column
    pub left_column_fraction: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        top_panel: Color32::from_rgb(25, 25, 25),
        info_box: Color32::from_rgb(28, 48, 72),
        warning: Color32::from_rgb(255, 215, 0),
        error: Color32::from_rgb(255, 100, 100),
    },
    results_table_height: 150.0,
    left_column_fraction: 0.35,
};
