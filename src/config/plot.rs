//! Plot visualization configuration

use eframe::egui::Color32;
use egui_plot::MarkerShape;

/// Styling for one chart series
pub struct SeriesStyle {
    pub color: Color32,
    pub line_width: f32,
    /// `None` draws a plain line without markers
    pub marker: Option<MarkerShape>,
    pub marker_radius: f32,
}

pub struct PlotConfig {
    pub historical: SeriesStyle,
    pub series_a: SeriesStyle,
    pub series_b: SeriesStyle,
    /// Opacity of the legend frame (0.0 = invisible, 1.0 = fully opaque)
    pub legend_background_alpha: f32,
    /// Minimum plot height in points
    pub min_height: f32,
    /// Fraction of the y range added above and below the data
    pub y_padding_pct: f64,
    /// Number of y axis divisions
    pub y_axis_divisions: u32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    historical: SeriesStyle {
        color: Color32::from_rgb(0xFF, 0x6B, 0x6B), // Coral red
        line_width: 2.5,
        marker: None,
        marker_radius: 0.0,
    },
    series_a: SeriesStyle {
        color: Color32::from_rgb(0xDA, 0xA5, 0x20), // Goldenrod
        line_width: 2.0,
        marker: Some(MarkerShape::Circle),
        marker_radius: 4.0,
    },
    series_b: SeriesStyle {
        color: Color32::from_rgb(0x2E, 0xCC, 0x71), // Emerald
        line_width: 2.0,
        marker: Some(MarkerShape::Up),
        marker_radius: 5.0,
    },
    legend_background_alpha: 0.8,
    min_height: 500.0,
    y_padding_pct: 0.05,
    y_axis_divisions: 6,
};
