#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod headless;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::render_pass;
pub use data::{ForecastUploads, UploadSlot, UploadedFile};
pub use domain::ViewerError;
pub use headless::{run_headless, user_message};
pub use models::ViewerReport;
pub use ui::ForecastViewerApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Forecast CSV with a date column and the LSTM and GRU predictions
    #[arg(long)]
    pub forecast: Option<PathBuf>,

    /// Evaluation metrics CSV, shown as-is
    #[arg(long)]
    pub evaluated: Option<PathBuf>,

    /// Historical prices CSV; the last 30 closes are charted
    #[arg(long)]
    pub historical: Option<PathBuf>,

    /// Run a single render pass, print the report and exit
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long, default_value_t = false, requires = "headless")]
    pub json: bool,
}

impl Cli {
    /// Files named on the command line, paired with the slot they fill.
    pub fn initial_uploads(&self) -> Vec<(UploadSlot, PathBuf)> {
        [
            (UploadSlot::Forecast, &self.forecast),
            (UploadSlot::Evaluated, &self.evaluated),
            (UploadSlot::Historical, &self.historical),
        ]
        .into_iter()
        .filter_map(|(slot, path)| path.clone().map(|p| (slot, p)))
        .collect()
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, cli: &Cli) -> Box<dyn eframe::App> {
    let app = ui::ForecastViewerApp::new(cc, cli.initial_uploads());
    Box::new(app)
}
