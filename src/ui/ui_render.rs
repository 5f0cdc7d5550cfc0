use eframe::egui::{
    Align, CentralPanel, Context, Frame, Grid, Layout, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::config::plot::PLOT_CONFIG;
use crate::config::{CURRENCY_LABEL, SERIES_A_LABEL, SERIES_B_LABEL};
use crate::data::UploadSlot;
use crate::domain::{RawTable, ViewerError};
use crate::models::{DisplayTable, ViewerReport};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{DetectedColumnsPanel, Panel, UploadPanel};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::{
    comparison_sentence, format_amount, format_optional_amount, section_heading, spaced_separator,
};

use super::app::{ForecastViewerApp, RenderOutcome};

impl ForecastViewerApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::same(8));
        TopBottomPanel::top("upload_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.label_header(UI_TEXT.app_title);
                let events =
                    UploadPanel::new(&mut self.paths, &self.uploads, self.drop_target).render(ui);
                for event in events {
                    self.handle_upload_event(event);
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for slot in UploadSlot::iter() {
                        let value = self
                            .uploads
                            .get(slot)
                            .map(|f| f.name.as_str())
                            .unwrap_or("–");
                        ui.metric(&slot.to_string(), value, UI_CONFIG.colors.subsection_heading);
                        ui.separator();
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format!("Drop target: {}", self.drop_target));
                    });
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(10));

        let Self {
            outcome, plot_view, ..
        } = self;

        match &*outcome {
            RenderOutcome::Ready(report) => {
                let width = ctx.available_rect().width() * UI_CONFIG.left_column_fraction;
                SidePanel::left("results_panel")
                    .resizable(true)
                    .default_width(width)
                    .frame(frame)
                    .show(ctx, |ui| {
                        ScrollArea::vertical()
                            .id_salt("results_scroll")
                            .show(ui, |ui| render_results_column(ui, report));
                    });
                CentralPanel::default()
                    .frame(frame)
                    .show(ctx, |ui| render_chart_column(ui, report, plot_view));
            }
            RenderOutcome::Failed(err) => {
                CentralPanel::default()
                    .frame(frame)
                    .show(ctx, |ui| render_failure(ui, err));
            }
            RenderOutcome::Idle => {
                CentralPanel::default().frame(frame).show(ctx, |ui| {
                    ui.add_space(10.0);
                    ui.label_subdued(UI_TEXT.idle_hint);
                });
            }
        }
    }
}

fn render_failure(ui: &mut Ui, err: &ViewerError) {
    ui.add_space(10.0);
    if err.is_warning() {
        ui.label_warning(UI_TEXT.warning_no_forecast);
    } else {
        ui.label_error(format!("{}: {}", UI_TEXT.error_prefix, err));
        ui.label_subdued(UI_TEXT.error_hint);
    }
}

fn render_results_column(ui: &mut Ui, report: &ViewerReport) {
    section_heading(ui, UI_TEXT.results_heading);
    render_forecast_table(ui, &report.table);

    ui.add_space(10.0);
    render_averages(ui, report);

    section_heading(ui, UI_TEXT.evaluation_heading);
    match &report.evaluation {
        Some(table) => render_evaluation_table(ui, table),
        None => ui.label_subdued(UI_TEXT.evaluation_missing),
    }

    spaced_separator(ui);
    DetectedColumnsPanel::new(report).render(ui);
}

fn render_forecast_table(ui: &mut Ui, table: &DisplayTable) {
    if table.is_empty() {
        ui.label_subdued(UI_TEXT.table_empty);
        return;
    }

    ScrollArea::vertical()
        .id_salt("forecast_table")
        .max_height(UI_CONFIG.results_table_height)
        .show(ui, |ui| {
            Grid::new("forecast_table_grid")
                .num_columns(table.headers.len())
                .striped(true)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    for header in &table.headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        ui.label(RichText::new(&row.date).monospace());
                        for value in [row.series_a, row.series_b] {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(format_optional_amount(value)).monospace());
                            });
                        }
                        ui.end_row();
                    }
                });
        });
}

fn render_averages(ui: &mut Ui, report: &ViewerReport) {
    let cmp = &report.comparison;
    ui.info_box(|ui| {
        ui.label(RichText::new(format!("{}:", UI_TEXT.averages_heading)).strong());

        for (label, mean, color) in [
            (SERIES_A_LABEL, cmp.series_a_mean, PLOT_CONFIG.series_a.color),
            (SERIES_B_LABEL, cmp.series_b_mean, PLOT_CONFIG.series_b.color),
        ] {
            let value = match mean {
                Some(mean) => format!("{} {}", format_amount(mean, 2), CURRENCY_LABEL),
                None => "–".to_string(),
            };
            ui.metric(label, &value, color);
        }

        ui.add_space(4.0);
        match comparison_sentence(cmp) {
            Some(sentence) => {
                ui.label(RichText::new(sentence).strong());
            }
            None => ui.label_subdued(UI_TEXT.averages_undefined),
        }
    });
}

fn render_evaluation_table(ui: &mut Ui, table: &RawTable) {
    ScrollArea::horizontal()
        .id_salt("evaluation_table")
        .show(ui, |ui| {
            Grid::new("evaluation_table_grid")
                .num_columns(table.column_count())
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for header in &table.columns {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });
}

fn render_chart_column(ui: &mut Ui, report: &ViewerReport, plot_view: &mut PlotView) {
    section_heading(ui, UI_TEXT.chart_heading);
    if !plot_view.show_chart(ui, &report.chart) {
        ui.label_subdued(UI_TEXT.chart_empty);
    }
}
