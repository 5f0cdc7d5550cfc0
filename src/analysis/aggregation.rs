use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::AGGREGATION;
use crate::domain::{NormalizedTable, ResolvedColumn, ViewerError};
use crate::utils::maths_utils::{parse_numeric, trailing_mean};

/// Reads a role column as numbers, in date order.
///
/// Empty cells are missing values. Any other non-numeric cell makes the whole
/// column unusable, reported as a schema error naming the first offender.
pub fn numeric_series(
    table: &NormalizedTable,
    column: &ResolvedColumn,
) -> Result<Vec<Option<f64>>, ViewerError> {
    table
        .column_cells(column.index)
        .enumerate()
        .map(|(row, cell)| {
            parse_numeric(cell).map_err(|e| {
                ViewerError::Schema(format!(
                    "column '{}' ({}) is not numeric: row {} holds '{}' ({})",
                    column.name,
                    column.role,
                    row + 1,
                    cell,
                    e
                ))
            })
        })
        .collect()
}

/// Sign of `mean_a - mean_b`; ties count as not higher.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    pub fn from_difference(diff: f64) -> Self {
        if diff > 0.0 {
            Direction::Higher
        } else {
            Direction::Lower
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Higher => write!(f, "higher"),
            Direction::Lower => write!(f, "lower"),
        }
    }
}

/// Trailing-window means of the two model series and how they compare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailingComparison {
    pub window: usize,
    pub series_a_mean: Option<f64>,
    pub series_b_mean: Option<f64>,
    /// `series_a_mean - series_b_mean`, when both exist
    pub difference: Option<f64>,
    pub direction: Option<Direction>,
}

impl TrailingComparison {
    pub fn compute(series_a: &[Option<f64>], series_b: &[Option<f64>]) -> Self {
        Self::with_window(series_a, series_b, AGGREGATION.trailing_window)
    }

    fn with_window(series_a: &[Option<f64>], series_b: &[Option<f64>], window: usize) -> Self {
        let series_a_mean = trailing_mean(series_a, window);
        let series_b_mean = trailing_mean(series_b, window);
        let difference = match (series_a_mean, series_b_mean) {
            (Some(a), Some(b)) => Some(a - b),
            _ => None,
        };

        Self {
            window,
            series_a_mean,
            series_b_mean,
            difference,
            direction: difference.map(Direction::from_difference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColumnRole, DatedRow};
    use chrono::NaiveDate;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    fn table(cells: &[&str]) -> NormalizedTable {
        let rows = cells
            .iter()
            .enumerate()
            .map(|(i, c)| DatedRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 1 + i as u32)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
                cells: vec![String::new(), c.to_string()],
            })
            .collect();
        NormalizedTable {
            columns: vec!["Date".into(), "LSTM".into()],
            date_column: 0,
            rows,
        }
    }

    fn lstm_column() -> ResolvedColumn {
        ResolvedColumn {
            role: ColumnRole::ForecastSeriesA,
            index: 1,
            name: "LSTM".into(),
            by_fallback: false,
        }
    }

    #[test]
    fn averages_last_three_rows() {
        let cmp = TrailingComparison::compute(&some(&[10.0, 20.0, 30.0, 40.0]), &some(&[1.0, 2.0, 3.0]));
        assert_eq!(cmp.window, 3);
        assert_eq!(cmp.series_a_mean, Some(30.0));
        assert_eq!(cmp.series_b_mean, Some(2.0));
        assert_eq!(cmp.difference, Some(28.0));
        assert_eq!(cmp.direction, Some(Direction::Higher));
    }

    #[test]
    fn tie_is_lower() {
        let cmp = TrailingComparison::compute(&some(&[5.0]), &some(&[5.0]));
        assert_eq!(cmp.difference, Some(0.0));
        assert_eq!(cmp.direction, Some(Direction::Lower));
    }

    #[test]
    fn negative_difference_is_lower() {
        let cmp = TrailingComparison::compute(&some(&[1.0, 2.0]), &some(&[3.0, 4.0]));
        assert_eq!(cmp.difference, Some(-2.0));
        assert_eq!(cmp.direction, Some(Direction::Lower));
    }

    #[test]
    fn empty_series_are_undefined() {
        let cmp = TrailingComparison::compute(&[], &[]);
        assert_eq!(cmp.series_a_mean, None);
        assert_eq!(cmp.direction, None);
        assert_eq!(cmp.difference, None);
    }

    #[test]
    fn reads_numeric_column_with_gaps() {
        let values = numeric_series(&table(&["3500", "", "3512.5"]), &lstm_column()).unwrap();
        assert_eq!(values, vec![Some(3500.0), None, Some(3512.5)]);
    }

    #[test]
    fn text_in_series_is_schema_error() {
        let err = numeric_series(&table(&["3500", "TLKM"]), &lstm_column()).unwrap_err();
        match err {
            ViewerError::Schema(msg) => {
                assert!(msg.contains("'LSTM'"));
                assert!(msg.contains("row 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
