use std::process::ExitCode;

use clap::Parser;
use forecast_viewer::ui::config::UI_TEXT;
use forecast_viewer::{Cli, run_app, run_headless, user_message};

fn main() -> ExitCode {
    // A. Init Logging (RUST_LOG overrides the Info default)
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Headless: one render pass to stdout
    if args.headless {
        return match run_headless(&args) {
            Ok(report) => {
                println!("{}", report);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{}", user_message(&err));
                ExitCode::FAILURE
            }
        };
    }

    // D. Run Native App
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(UI_TEXT.app_title)
            .with_inner_size([1400.0, 900.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    match eframe::run_native(
        UI_TEXT.app_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, &args))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Window closed with an error: {}", e);
            ExitCode::FAILURE
        }
    }
}
