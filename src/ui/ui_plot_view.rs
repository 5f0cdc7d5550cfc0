use std::hash::{DefaultHasher, Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::plot::PLOT_CONFIG;
use crate::models::{ChartData, SeriesKind};
use crate::ui::plot_layers::{ForecastLayer, HistoricalLayer, LayerContext, PlotLayer};
use crate::ui::utils::format_amount;
use crate::utils::maths_utils;
use crate::utils::time_utils::{date_to_plot_x, plot_x_to_label};

/// One chart series already converted to plot coordinates.
#[derive(Clone, Debug)]
pub struct PreparedSeries {
    pub kind: SeriesKind,
    pub label: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Clone, Debug)]
pub struct PlotCache {
    pub chart_hash: u64,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<PreparedSeries>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotCache {
    pub fn series_of(&self, kind: SeriesKind) -> impl Iterator<Item = &PreparedSeries> {
        self.series.iter().filter(move |s| s.kind == kind)
    }

    /// Hover text for plot x `x`: the day, then every series with a point on that day.
    pub fn hover_text(&self, x: f64) -> String {
        let day = x.round();
        let mut lines = vec![plot_x_to_label(day)];
        for series in &self.series {
            if let Some(point) = series.points.iter().find(|p| p[0].round() == day) {
                lines.push(format!("{}: {}", series.label, format_amount(point[1], 2)));
            }
        }
        lines.join("\n")
    }

    fn build(chart: &ChartData, chart_hash: u64) -> Option<Self> {
        let series: Vec<PreparedSeries> = chart
            .series
            .iter()
            .map(|s| PreparedSeries {
                kind: s.kind,
                label: s.label.clone(),
                points: s
                    .points
                    .iter()
                    .map(|p| [date_to_plot_x(&p.date), p.value])
                    .collect(),
            })
            .collect();

        let xs: Vec<f64> = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p[0]))
            .collect();
        let ys = chart.all_values();

        let (x_min, x_max) = maths_utils::get_min_max(&xs)?;
        let (y_min, y_max) = maths_utils::get_min_max(&ys)?;

        // Half a day either side keeps the first and last markers off the frame
        let (x_min, x_max) = (x_min - 0.5, x_max + 0.5);
        let (y_min, y_max) = maths_utils::pad_range(y_min, y_max, PLOT_CONFIG.y_padding_pct);

        Some(Self {
            chart_hash,
            title: chart.title.clone(),
            x_label: chart.x_label.clone(),
            y_label: chart.y_label.clone(),
            series,
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

/// Draws the forecast chart, rebuilding plot coordinates only when the chart changes.
#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// Returns `false` when the chart has no points to draw.
    pub fn show_chart(&mut self, ui: &mut egui::Ui, chart: &ChartData) -> bool {
        let Some(cache) = self.calculate_plot_data(chart) else {
            return false;
        };

        let (y_min, y_max) = (cache.y_min, cache.y_max);
        let (x_min, x_max) = (cache.x_min, cache.x_max);

        let legend = Legend::default()
            .position(Corner::LeftTop)
            .background_alpha(PLOT_CONFIG.legend_background_alpha);

        ui.label(egui::RichText::new(&cache.title).strong());

        Plot::new("forecast_chart")
            .legend(legend)
            .height(PLOT_CONFIG.min_height.max(ui.available_height()))
            .custom_x_axes(vec![create_x_axis(&cache.x_label)])
            .custom_y_axes(vec![create_y_axis(&cache.y_label)])
            // Every series at the hovered day
            .label_formatter(|_name, value| cache.hover_text(value.x))
            // One mark per whole day, thinned out when the range is wide
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let step_size = ((max - min) / 8.0).ceil().max(1.0);
                let start = (min / step_size).ceil() as i64;
                let end = (max / step_size).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step_size,
                        step_size,
                    })
                    .collect()
            })
            .y_grid_spacer(move |_input| {
                let divisions = PLOT_CONFIG.y_axis_divisions.max(1);
                let step = (y_max - y_min) / divisions as f64;
                (0..=divisions)
                    .map(|i| GridMark {
                        value: y_min + step * i as f64,
                        step_size: step,
                    })
                    .collect()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                let ctx = LayerContext { cache: &cache };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(HistoricalLayer),
                    Box::new(ForecastLayer {
                        kind: SeriesKind::ForecastA,
                    }),
                    Box::new(ForecastLayer {
                        kind: SeriesKind::ForecastB,
                    }),
                ];

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });

        true
    }

    fn calculate_plot_data(&mut self, chart: &ChartData) -> Option<PlotCache> {
        let current_hash = hash_chart(chart);

        if let Some(cache) = &self.cache
            && cache.chart_hash == current_hash
        {
            return Some(cache.clone());
        }

        let cache = PlotCache::build(chart, current_hash)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_plot_bounds {
            log::info!(
                "Plot bounds rebuilt: x {} .. {}, y {:.2} .. {:.2}",
                plot_x_to_label(cache.x_min),
                plot_x_to_label(cache.x_max),
                cache.y_min,
                cache.y_max
            );
        }

        self.cache = Some(cache.clone());
        Some(cache)
    }
}

fn hash_chart(chart: &ChartData) -> u64 {
    let mut hasher = DefaultHasher::new();
    chart.title.hash(&mut hasher);
    for series in &chart.series {
        series.kind.hash(&mut hasher);
        series.label.hash(&mut hasher);
        series.points.len().hash(&mut hasher);
        for point in &series.points {
            point.date.hash(&mut hasher);
            point.value.to_bits().hash(&mut hasher);
        }
    }
    hasher.finish()
}

fn create_x_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(label.to_string())
        .formatter(|grid_mark, _range| plot_x_to_label(grid_mark.value))
}

fn create_y_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .formatter(|grid_mark, _range| format_amount(grid_mark.value, 0))
        .placement(HPlacement::Left)
}
