use eframe::egui::{Button, Color32, Grid, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{ForecastUploads, UploadSlot};
use crate::domain::{ColumnRole, ResolvedColumn};
use crate::models::ViewerReport;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::section_heading;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Editable path text for each upload slot
#[derive(Debug, Clone, Default)]
pub struct SlotPaths {
    pub forecast: String,
    pub evaluated: String,
    pub historical: String,
}

impl SlotPaths {
    pub fn get_mut(&mut self, slot: UploadSlot) -> &mut String {
        match slot {
            UploadSlot::Forecast => &mut self.forecast,
            UploadSlot::Evaluated => &mut self.evaluated,
            UploadSlot::Historical => &mut self.historical,
        }
    }

    pub fn get(&self, slot: UploadSlot) -> &str {
        match slot {
            UploadSlot::Forecast => &self.forecast,
            UploadSlot::Evaluated => &self.evaluated,
            UploadSlot::Historical => &self.historical,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Read the file at the typed path into the slot
    OpenPath(UploadSlot, String),
    Clear(UploadSlot),
    SetDropTarget(UploadSlot),
    /// Run a render pass with the current uploads
    Load,
}

/// The three upload controls plus the load button
pub struct UploadPanel<'a> {
    paths: &'a mut SlotPaths,
    uploads: &'a ForecastUploads,
    drop_target: UploadSlot,
}

impl<'a> UploadPanel<'a> {
    pub fn new(
        paths: &'a mut SlotPaths,
        uploads: &'a ForecastUploads,
        drop_target: UploadSlot,
    ) -> Self {
        Self {
            paths,
            uploads,
            drop_target,
        }
    }

    fn render_slot(&mut self, ui: &mut Ui, slot: UploadSlot) -> Vec<UploadEvent> {
        let mut events = Vec::new();

        ui.vertical(|ui| {
            let suffix = if slot.is_required() {
                UI_TEXT.slot_required_suffix
            } else {
                UI_TEXT.slot_optional_suffix
            };
            ui.label_subheader(format!("{} {}", slot, suffix));

            ui.horizontal(|ui| {
                let path = self.paths.get_mut(slot);
                let response = ui.add(
                    TextEdit::singleline(path)
                        .hint_text(UI_TEXT.slot_path_hint)
                        .desired_width(ui.available_width() - 60.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(eframe::egui::Key::Enter));
                let open_clicked = ui
                    .add_enabled(!path.trim().is_empty(), Button::new(UI_TEXT.slot_open))
                    .clicked();
                if (submitted || open_clicked) && !path.trim().is_empty() {
                    events.push(UploadEvent::OpenPath(slot, path.trim().to_string()));
                }
            });

            ui.horizontal(|ui| {
                match self.uploads.get(slot) {
                    Some(file) => {
                        ui.label(
                            RichText::new(format!("📄 {} ({} bytes)", file.name, file.size_bytes()))
                                .small()
                                .color(Color32::from_rgb(150, 255, 150)),
                        );
                        if ui.small_button(UI_TEXT.slot_clear).clicked() {
                            events.push(UploadEvent::Clear(slot));
                        }
                    }
                    None => ui.label_subdued(UI_TEXT.slot_empty),
                }

                let is_target = self.drop_target == slot;
                if ui
                    .radio(is_target, UI_TEXT.slot_drop_target)
                    .clicked()
                    && !is_target
                {
                    events.push(UploadEvent::SetDropTarget(slot));
                }
            });
        });

        events
    }
}

impl<'a> Panel for UploadPanel<'a> {
    type Event = UploadEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.input_heading);

        ui.columns(3, |columns| {
            for (column, slot) in columns.iter_mut().zip(UploadSlot::iter()) {
                events.extend(self.render_slot(column, slot));
            }
        });

        ui.add_space(4.0);
        ui.label_subdued(UI_TEXT.drop_hint);
        ui.add_space(6.0);

        let button = Button::new(RichText::new(UI_TEXT.load_button).strong())
            .fill(Color32::from_rgb(200, 60, 60))
            .min_size([ui.available_width(), 28.0].into());
        if ui.add(button).clicked() {
            events.push(UploadEvent::Load);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Upload panel events: {:?}", events);
        }

        events
    }
}

/// Read-only listing of which header fed each role
pub struct DetectedColumnsPanel<'a> {
    report: &'a ViewerReport,
}

impl<'a> DetectedColumnsPanel<'a> {
    pub fn new(report: &'a ViewerReport) -> Self {
        Self { report }
    }

    fn column_for(&self, role: ColumnRole) -> Option<(String, bool)> {
        let describe = |col: &ResolvedColumn| (col.name.clone(), col.by_fallback);
        match role {
            ColumnRole::DateColumn => Some((self.report.date_column.clone(), false)),
            ColumnRole::ForecastSeriesA => Some(describe(&self.report.series_a)),
            ColumnRole::ForecastSeriesB => Some(describe(&self.report.series_b)),
            ColumnRole::PriceColumn => self
                .report
                .historical
                .as_ref()
                .map(|h| describe(&h.price_column)),
            ColumnRole::Unclassified => None,
        }
    }
}

impl<'a> Panel for DetectedColumnsPanel<'a> {
    // Nothing to report back; the panel only displays
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.collapsing(UI_TEXT.detected_columns_heading, |ui| {
            Grid::new("detected_columns_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for role in ColumnRole::iter() {
                        if let Some((name, by_fallback)) = self.column_for(role) {
                            ui.label_subdued(role.to_string());
                            let text = if by_fallback {
                                format!("{} (by position)", name)
                            } else {
                                name
                            };
                            ui.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
                            ui.end_row();
                        }
                    }
                });
        });
        Vec::new()
    }
}
