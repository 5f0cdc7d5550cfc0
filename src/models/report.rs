use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::aggregation::TrailingComparison;
use crate::domain::{RawTable, ResolvedColumn};

/// One line of the forecast results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Already formatted as `%Y-%m-%d`
    pub date: String,
    pub series_a: Option<f64>,
    pub series_b: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which styling a chart series gets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SeriesKind {
    Historical,
    ForecastA,
    ForecastB,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDateTime,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Builds a series from parallel date/value columns, skipping missing values.
    pub fn from_columns(
        kind: SeriesKind,
        label: impl Into<String>,
        dates: impl IntoIterator<Item = NaiveDateTime>,
        values: &[Option<f64>],
    ) -> Self {
        let points = dates
            .into_iter()
            .zip(values.iter())
            .filter_map(|(date, value)| value.map(|value| ChartPoint { date, value }))
            .collect();
        Self {
            kind,
            label: label.into(),
            points,
        }
    }
}

/// Series drawn back to front: historical first, then the two forecasts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn all_values(&self) -> Vec<f64> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.value))
            .collect()
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// What the historical upload contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalInfo {
    pub file_name: String,
    pub date_column: String,
    pub price_column: ResolvedColumn,
    /// Rows that survived normalization (before the chart window is applied)
    pub valid_rows: usize,
}

/// Everything one render pass produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerReport {
    pub forecast_file: String,
    pub date_column: String,
    pub series_a: ResolvedColumn,
    pub series_b: ResolvedColumn,
    pub table: DisplayTable,
    pub comparison: TrailingComparison,
    pub evaluation: Option<RawTable>,
    pub historical: Option<HistoricalInfo>,
    pub chart: ChartData,
}
