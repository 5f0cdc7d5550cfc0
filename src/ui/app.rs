use eframe::{Frame, egui};
use std::path::{Path, PathBuf};

use crate::analysis::render_pass;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{ForecastUploads, UploadSlot, UploadedFile};
use crate::domain::ViewerError;
use crate::models::ViewerReport;
use crate::ui::ui_panels::{SlotPaths, UploadEvent};
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

/// What the central panel currently shows.
#[derive(Debug, Clone, Default)]
pub enum RenderOutcome {
    /// Nothing loaded yet
    #[default]
    Idle,
    Ready(Box<ViewerReport>),
    Failed(ViewerError),
}

pub struct ForecastViewerApp {
    pub(super) uploads: ForecastUploads,
    pub(super) paths: SlotPaths,
    /// Slot that receives files dropped onto the window
    pub(super) drop_target: UploadSlot,
    pub(super) outcome: RenderOutcome,
    pub(super) plot_view: PlotView,
}

impl ForecastViewerApp {
    /// `initial` holds files named on the command line.
    pub fn new(cc: &eframe::CreationContext<'_>, initial: Vec<(UploadSlot, PathBuf)>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            uploads: ForecastUploads::default(),
            paths: SlotPaths::default(),
            drop_target: UploadSlot::Forecast,
            outcome: RenderOutcome::Idle,
            plot_view: PlotView::new(),
        };

        for (slot, path) in &initial {
            *app.paths.get_mut(*slot) = path.display().to_string();
            app.open_path(*slot, path);
        }

        // Files given on the command line are shown straight away
        if app.uploads.forecast.is_some() && matches!(app.outcome, RenderOutcome::Idle) {
            app.run_render_pass();
        }
        app
    }

    pub(super) fn handle_upload_event(&mut self, event: UploadEvent) {
        match event {
            UploadEvent::OpenPath(slot, path) => self.open_path(slot, Path::new(&path)),
            UploadEvent::Clear(slot) => {
                self.uploads.set(slot, None);
                self.paths.get_mut(slot).clear();
            }
            UploadEvent::SetDropTarget(slot) => self.drop_target = slot,
            UploadEvent::Load => self.run_render_pass(),
        }
    }

    fn open_path(&mut self, slot: UploadSlot, path: &Path) {
        match UploadedFile::from_path(path) {
            Ok(file) => {
                log::info!("Loaded {} into {} ({} bytes)", file.name, slot, file.size_bytes());
                self.uploads.set(slot, Some(file));
            }
            Err(e) => {
                log::warn!("Could not open {}: {:#}", path.display(), e);
                self.uploads.set(slot, None);
                self.outcome = RenderOutcome::Failed(e.into());
            }
        }
    }

    /// Moves files dropped onto the window into the upload slots.
    /// Several files dropped together fill consecutive slots starting at the drop target.
    pub(super) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let slot = self.drop_target;
            let upload = match (&file.bytes, &file.path) {
                (Some(bytes), _) => Ok(UploadedFile::new(file.name.clone(), bytes.to_vec())),
                (None, Some(path)) => UploadedFile::from_path(path),
                (None, None) => continue,
            };

            match upload {
                Ok(upload) => {
                    *self.paths.get_mut(slot) = match &file.path {
                        Some(path) => path.display().to_string(),
                        None => upload.name.clone(),
                    };
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!("Dropped {:?} into {}", upload, slot);
                    }
                    self.uploads.set(slot, Some(upload));
                    self.drop_target = next_slot(slot);
                }
                Err(e) => {
                    log::warn!("Could not read dropped file {}: {:#}", file.name, e);
                    self.outcome = RenderOutcome::Failed(e.into());
                }
            }
        }
    }

    pub(super) fn run_render_pass(&mut self) {
        self.outcome = match render_pass(&self.uploads) {
            Ok(report) => RenderOutcome::Ready(Box::new(report)),
            Err(err) => {
                if err.is_warning() {
                    log::warn!("{}", err);
                } else {
                    log::error!("Render pass failed: {}", err);
                }
                self.plot_view.clear_cache();
                RenderOutcome::Failed(err)
            }
        };
    }
}

fn next_slot(slot: UploadSlot) -> UploadSlot {
    match slot {
        UploadSlot::Forecast => UploadSlot::Evaluated,
        UploadSlot::Evaluated => UploadSlot::Historical,
        UploadSlot::Historical => UploadSlot::Forecast,
    }
}

impl eframe::App for ForecastViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_dropped_files(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
