//! One-shot render pass for the command line: no window, report on stdout.

use itertools::Itertools;

use crate::Cli;
use crate::analysis::render_pass;
use crate::config::{CURRENCY_LABEL, SERIES_A_LABEL, SERIES_B_LABEL};
use crate::data::{ForecastUploads, UploadedFile};
use crate::domain::{RawTable, ViewerError};
use crate::models::ViewerReport;
use crate::ui::config::UI_TEXT;
use crate::ui::utils::{comparison_sentence, format_amount, format_optional_amount};

/// Reads the files named in `cli`, runs a render pass and formats the result.
pub fn run_headless(cli: &Cli) -> Result<String, ViewerError> {
    let mut uploads = ForecastUploads::default();
    for (slot, path) in cli.initial_uploads() {
        uploads.set(slot, Some(UploadedFile::from_path(&path)?));
    }

    let report = render_pass(&uploads)?;
    if cli.json {
        serde_json::to_string_pretty(&report)
            .map_err(|e| ViewerError::Io(format!("Failed to serialize report: {}", e)))
    } else {
        Ok(format_report(&report))
    }
}

/// The message a user sees for `err`, identical to the window's failure text.
pub fn user_message(err: &ViewerError) -> String {
    if err.is_warning() {
        UI_TEXT.warning_no_forecast.to_string()
    } else {
        format!("{}: {}\n{}", UI_TEXT.error_prefix, err, UI_TEXT.error_hint)
    }
}

pub fn format_report(report: &ViewerReport) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "Forecast file: {} (date column '{}', {} <- '{}', {} <- '{}')",
        report.forecast_file,
        report.date_column,
        report.series_a.role,
        report.series_a.name,
        report.series_b.role,
        report.series_b.name
    ));
    out.push(String::new());

    out.push(UI_TEXT.results_heading.to_string());
    if report.table.is_empty() {
        out.push(UI_TEXT.table_empty.to_string());
    } else {
        out.push(report.table.headers.iter().map(|h| format!("{:>14}", h)).join(" "));
        for row in &report.table.rows {
            out.push(
                [
                    row.date.clone(),
                    format_optional_amount(row.series_a),
                    format_optional_amount(row.series_b),
                ]
                .iter()
                .map(|cell| format!("{:>14}", cell))
                .join(" "),
            );
        }
    }
    out.push(String::new());

    out.push(format!("{}:", UI_TEXT.averages_heading));
    let cmp = &report.comparison;
    for (label, mean) in [
        (SERIES_A_LABEL, cmp.series_a_mean),
        (SERIES_B_LABEL, cmp.series_b_mean),
    ] {
        let value = match mean {
            Some(mean) => format!("{} {}", format_amount(mean, 2), CURRENCY_LABEL),
            None => "–".to_string(),
        };
        out.push(format!("  {}: {}", label, value));
    }
    out.push(comparison_sentence(cmp).unwrap_or_else(|| UI_TEXT.averages_undefined.to_string()));
    out.push(String::new());

    out.push(UI_TEXT.evaluation_heading.to_string());
    match &report.evaluation {
        Some(table) => out.extend(format_raw_table(table)),
        None => out.push(UI_TEXT.evaluation_missing.to_string()),
    }
    out.push(String::new());

    out.push(format!("{} ({} points)", report.chart.title, report.chart.point_count()));
    for series in &report.chart.series {
        out.push(format!("  {}: {} points", series.label, series.points.len()));
    }

    out.join("\n")
}

fn format_raw_table(table: &RawTable) -> Vec<String> {
    std::iter::once(table.columns.join(", "))
        .chain(table.rows.iter().map(|row| row.join(", ")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn write_csv(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    const FORECAST: &str = "Tanggal,Pred_LSTM,Pred_GRU\n\
                            2024-01-01,3500,3490\n\
                            2024-01-02,3510,3500\n\
                            2024-01-03,3520,3510\n";

    #[test]
    fn text_report_lists_table_and_summary() {
        let tmp = tempdir().unwrap();
        let cli = Cli {
            forecast: Some(write_csv(tmp.path(), "text.csv", FORECAST)),
            headless: true,
            ..Default::default()
        };
        let text = run_headless(&cli).unwrap();

        assert!(text.contains("date column 'Tanggal'"));
        assert!(text.contains("2024-01-03"));
        assert!(text.contains("3,520.00"));
        assert!(text.contains("LSTM average is higher by 10.00 IDR than GRU"));
        assert!(text.contains(UI_TEXT.evaluation_missing));
        assert!(text.contains("LSTM Forecast: 3 points"));
    }

    #[test]
    fn json_report_round_trips() {
        let tmp = tempdir().unwrap();
        let cli = Cli {
            forecast: Some(write_csv(tmp.path(), "json.csv", FORECAST)),
            headless: true,
            json: true,
            ..Default::default()
        };
        let json = run_headless(&cli).unwrap();
        let report: ViewerReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.table.rows.len(), 3);
        assert_eq!(report.comparison.difference, Some(10.0));
    }

    #[test]
    fn test_files_are_removed_with_their_directory() {
        let tmp = tempdir().unwrap();
        let path = write_csv(tmp.path(), "scratch.csv", FORECAST);
        assert!(path.exists());
        drop(tmp);
        assert!(!path.exists());
    }

    #[test]
    fn missing_forecast_is_a_warning() {
        let err = run_headless(&Cli::default()).unwrap_err();
        assert_eq!(err, ViewerError::NoFileProvided);
        assert_eq!(user_message(&err), UI_TEXT.warning_no_forecast);
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let cli = Cli {
            forecast: Some(PathBuf::from("/definitely/not/here.csv")),
            ..Default::default()
        };
        let err = run_headless(&cli).unwrap_err();
        assert!(matches!(err, ViewerError::Io(_)));
        assert!(user_message(&err).starts_with("An error occurred: I/O error: Failed to read upload"));
        assert!(user_message(&err).ends_with(UI_TEXT.error_hint));
    }
}
