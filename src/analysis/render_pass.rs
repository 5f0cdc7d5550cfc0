use std::time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::analysis::aggregation::{TrailingComparison, numeric_series};
use crate::analysis::column_roles::{resolve_forecast_columns, resolve_price_column};
use crate::config::{AGGREGATION, CURRENCY_LABEL, SERIES_A_LABEL, SERIES_B_LABEL};
use crate::data::{CsvReader, ForecastUploads, UploadedFile, normalize};
use crate::domain::{NormalizedTable, ViewerError};
use crate::models::{
    ChartData, ChartSeries, DisplayRow, DisplayTable, HistoricalInfo, SeriesKind, ViewerReport,
};
use crate::utils::time_utils::format_date;

/// Runs one complete upload-to-report evaluation.
///
/// Synchronous and side-effect free apart from logging: the same uploads
/// always produce the same report.
pub fn render_pass(uploads: &ForecastUploads) -> Result<ViewerReport, ViewerError> {
    let forecast_file = uploads.forecast.as_ref().ok_or(ViewerError::NoFileProvided)?;
    let started = Instant::now();
    let reader = CsvReader::new();

    // A. Forecast
    let (forecast, date_column) = normalize(reader.read_bytes(&forecast_file.bytes)?)?;
    let columns = resolve_forecast_columns(&forecast)?;
    let values_a = numeric_series(&forecast, &columns.series_a)?;
    let values_b = numeric_series(&forecast, &columns.series_b)?;

    // B. Historical
    let historical = uploads
        .historical
        .as_ref()
        .map(|file| load_historical(&reader, file))
        .transpose()?;

    // C. Evaluated (shown verbatim)
    let evaluation = uploads
        .evaluated
        .as_ref()
        .map(|file| reader.read_bytes(&file.bytes))
        .transpose()?;

    let table = build_display_table(&forecast, &values_a, &values_b);
    let comparison = TrailingComparison::compute(&values_a, &values_b);

    let mut chart = ChartData {
        title: "Close + Forecast".to_string(),
        x_label: "Date".to_string(),
        y_label: format!("Price ({})", CURRENCY_LABEL),
        series: Vec::new(),
    };
    let historical_info = historical.map(|(info, series)| {
        chart.series.push(series);
        info
    });
    chart.series.push(ChartSeries::from_columns(
        SeriesKind::ForecastA,
        format!("{} Forecast", SERIES_A_LABEL),
        forecast.dates(),
        &values_a,
    ));
    chart.series.push(ChartSeries::from_columns(
        SeriesKind::ForecastB,
        format!("{} Forecast", SERIES_B_LABEL),
        forecast.dates(),
        &values_b,
    ));

    let report = ViewerReport {
        forecast_file: forecast_file.name.clone(),
        date_column,
        series_a: columns.series_a,
        series_b: columns.series_b,
        table,
        comparison,
        evaluation,
        historical: historical_info,
        chart,
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_render_pass {
        log::info!(
            "Render pass for '{}' done in {:.1}ms: {} forecast rows, {} chart points",
            report.forecast_file,
            started.elapsed().as_secs_f64() * 1000.0,
            report.table.rows.len(),
            report.chart.point_count()
        );
    }
    #[cfg(not(debug_assertions))]
    log::debug!("Render pass finished in {:?}", started.elapsed());

    Ok(report)
}

fn load_historical(
    reader: &CsvReader,
    file: &UploadedFile,
) -> Result<(HistoricalInfo, ChartSeries), ViewerError> {
    let (table, date_column) = normalize(reader.read_bytes(&file.bytes)?)?;
    let price_column = resolve_price_column(&table)?;

    // Only the chart window has to be numeric
    let window = trailing_window(&table, AGGREGATION.historical_window);
    let prices = numeric_series(&window, &price_column)?;

    let series = ChartSeries::from_columns(
        SeriesKind::Historical,
        format!("Historical Close (last {})", AGGREGATION.historical_window),
        window.dates(),
        &prices,
    );
    let info = HistoricalInfo {
        file_name: file.name.clone(),
        date_column,
        price_column,
        valid_rows: table.row_count(),
    };
    Ok((info, series))
}

/// Copy of `table` restricted to its last `n` rows.
fn trailing_window(table: &NormalizedTable, n: usize) -> NormalizedTable {
    NormalizedTable {
        columns: table.columns.clone(),
        date_column: table.date_column,
        rows: table.tail(n).to_vec(),
    }
}

fn build_display_table(
    forecast: &NormalizedTable,
    values_a: &[Option<f64>],
    values_b: &[Option<f64>],
) -> DisplayTable {
    let rows = forecast
        .rows
        .iter()
        .zip(values_a.iter().zip(values_b.iter()))
        .map(|(row, (a, b))| DisplayRow {
            date: format_date(&row.date),
            series_a: *a,
            series_b: *b,
        })
        .collect();

    DisplayTable {
        headers: vec![
            "Date".to_string(),
            format!("{} ({})", SERIES_A_LABEL, CURRENCY_LABEL),
            format!("{} ({})", SERIES_B_LABEL, CURRENCY_LABEL),
        ],
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregation::Direction;

    fn upload(name: &str, text: &str) -> Option<UploadedFile> {
        Some(UploadedFile::new(name, text.as_bytes().to_vec()))
    }

    fn forecast_only(text: &str) -> ForecastUploads {
        ForecastUploads {
            forecast: upload("forecast.csv", text),
            ..Default::default()
        }
    }

    #[test]
    fn missing_forecast_is_reported_before_anything_else() {
        let uploads = ForecastUploads {
            historical: upload("h.csv", "not,a,real\nfile"),
            ..Default::default()
        };
        assert_eq!(render_pass(&uploads).unwrap_err(), ViewerError::NoFileProvided);
    }

    #[test]
    fn full_forecast_report() {
        let csv = "Date,Pred_LSTM,Pred_GRU\n\
                   2024-01-04,40,4\n\
                   Ticker,TLKM,TLKM\n\
                   2024-01-02,20,2\n\
                   2024-01-01,10,1\n\
                   2024-01-03,30,3\n";
        let report = render_pass(&forecast_only(csv)).unwrap();

        assert_eq!(report.date_column, "Date");
        assert_eq!(report.series_a.name, "Pred_LSTM");
        assert_eq!(report.series_b.name, "Pred_GRU");
        assert_eq!(report.table.headers, vec!["Date", "LSTM (IDR)", "GRU (IDR)"]);
        let dates: Vec<_> = report.table.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"]);

        assert_eq!(report.comparison.series_a_mean, Some(30.0));
        assert_eq!(report.comparison.series_b_mean, Some(3.0));
        assert_eq!(report.comparison.direction, Some(Direction::Higher));

        assert!(report.evaluation.is_none());
        assert!(report.historical.is_none());
        assert_eq!(report.chart.series.len(), 2);
        assert_eq!(report.chart.series[0].kind, SeriesKind::ForecastA);
        assert_eq!(report.chart.series[1].label, "GRU Forecast");
        assert_eq!(report.chart.point_count(), 8);
    }

    #[test]
    fn offset_dates_keep_their_calendar_day() {
        let csv = "Date,LSTM,GRU\n\
                   2024-03-04 00:00:00+07:00,40,4\n\
                   2024-03-01 00:00:00+07:00,10,1\n";
        let report = render_pass(&forecast_only(csv)).unwrap();
        let dates: Vec<_> = report.table.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-03-04"]);
        assert_eq!(
            report.chart.series[0].points[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn historical_is_trimmed_to_window() {
        let mut hist = String::from("Date,Open,Close\n");
        for day in 1..=40 {
            hist.push_str(&format!("2023-12-{:02},1,{}\n", day.min(31), day));
        }
        let uploads = ForecastUploads {
            forecast: upload("f.csv", "Date,LSTM,GRU\n2024-01-01,1,2\n"),
            historical: upload("h.csv", &hist),
            ..Default::default()
        };
        let report = render_pass(&uploads).unwrap();

        let info = report.historical.unwrap();
        assert_eq!(info.price_column.name, "Close");
        assert_eq!(info.valid_rows, 40);

        let series = &report.chart.series[0];
        assert_eq!(series.kind, SeriesKind::Historical);
        assert_eq!(series.label, "Historical Close (last 30)");
        assert_eq!(series.points.len(), 30);
        assert_eq!(series.points.last().unwrap().value, 40.0);
    }

    #[test]
    fn evaluation_passes_through_unchanged() {
        let eval = "Model,RMSE,MAPE\nLSTM,12.5,0.4\nGRU,11.0,0.3\n";
        let uploads = ForecastUploads {
            forecast: upload("f.csv", "Date,LSTM,GRU\n2024-01-01,1,2\n"),
            evaluated: upload("e.csv", eval),
            ..Default::default()
        };
        let report = render_pass(&uploads).unwrap();
        let table = report.evaluation.unwrap();
        assert_eq!(table.columns, vec!["Model", "RMSE", "MAPE"]);
        assert_eq!(table.rows[1], vec!["GRU", "11.0", "0.3"]);
    }

    #[test]
    fn all_invalid_dates_give_empty_output() {
        let report = render_pass(&forecast_only("Date,LSTM,GRU\nTicker,a,b\n,1,2\n")).unwrap();
        assert!(report.table.is_empty());
        assert_eq!(report.comparison.series_a_mean, None);
        assert_eq!(report.comparison.direction, None);
        assert_eq!(report.chart.point_count(), 0);
    }

    #[test]
    fn non_numeric_series_is_schema_error() {
        let err = render_pass(&forecast_only("Date,Name,GRU\n2024-01-01,abc,2\n")).unwrap_err();
        assert!(matches!(err, ViewerError::Schema(_)));
    }

    #[test]
    fn non_numeric_history_price_is_schema_error() {
        let uploads = ForecastUploads {
            forecast: upload("f.csv", "Date,LSTM,GRU\n2024-01-01,1,2\n"),
            historical: upload("h.csv", "Date,Ticker\n2024-01-01,TLKM\n"),
            ..Default::default()
        };
        assert!(matches!(render_pass(&uploads), Err(ViewerError::Schema(_))));
    }

    #[test]
    fn malformed_csv_is_reported() {
        let err = render_pass(&forecast_only("Date,LSTM\n2024-01-01,1,2,3\n")).unwrap_err();
        assert!(matches!(err, ViewerError::Csv(_)));
    }

    #[test]
    fn empty_forecast_file_is_schema_error() {
        let err = render_pass(&forecast_only("")).unwrap_err();
        assert!(matches!(err, ViewerError::Schema(_)));
    }
}
