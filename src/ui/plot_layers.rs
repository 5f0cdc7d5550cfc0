use egui_plot::{Line, PlotPoints, PlotUi, Points};

use crate::config::plot::{PLOT_CONFIG, SeriesStyle};
use crate::models::SeriesKind;
use crate::ui::ui_plot_view::{PlotCache, PreparedSeries};

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub cache: &'a PlotCache,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. HISTORICAL LAYER (observed closes, plain line)
// ============================================================================
pub struct HistoricalLayer;

impl PlotLayer for HistoricalLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for series in ctx.cache.series_of(SeriesKind::Historical) {
            draw_series(plot_ui, series, &PLOT_CONFIG.historical);
        }
    }
}

// ============================================================================
// 2. FORECAST LAYER (one model, line plus markers)
// ============================================================================
pub struct ForecastLayer {
    pub kind: SeriesKind,
}

impl ForecastLayer {
    fn style(&self) -> &'static SeriesStyle {
        match self.kind {
            SeriesKind::ForecastB => &PLOT_CONFIG.series_b,
            SeriesKind::ForecastA | SeriesKind::Historical => &PLOT_CONFIG.series_a,
        }
    }
}

impl PlotLayer for ForecastLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for series in ctx.cache.series_of(self.kind) {
            draw_series(plot_ui, series, self.style());
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn draw_series(plot_ui: &mut PlotUi, series: &PreparedSeries, style: &SeriesStyle) {
    if series.points.is_empty() {
        return;
    }

    // Line and markers share the label so the legend toggles them together
    let line = Line::new(&series.label, PlotPoints::new(series.points.clone()))
        .color(style.color)
        .width(style.line_width);
    plot_ui.line(line);

    if let Some(shape) = style.marker {
        let markers = Points::new(&series.label, PlotPoints::new(series.points.clone()))
            .shape(shape)
            .radius(style.marker_radius)
            .color(style.color)
            .filled(true);
        plot_ui.points(markers);
    }
}
