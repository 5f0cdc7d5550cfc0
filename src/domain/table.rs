use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A table exactly as it came out of the CSV reader.
///
/// Every row holds one cell per header column (short rows are padded with
/// empty cells by the reader). Header names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

}

/// One retained row of a [`NormalizedTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct DatedRow {
    pub date: NaiveDateTime,
    /// All cells of the original row, date cell included, in header order.
    pub cells: Vec<String>,
}

impl DatedRow {
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// A [`RawTable`] whose date column parsed for every row, sorted by that date.
///
/// Invariant: `rows` is non-decreasing by `date`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTable {
    pub columns: Vec<String>,
    pub date_column: usize,
    pub rows: Vec<DatedRow>,
}

impl NormalizedTable {
    pub fn date_column_name(&self) -> &str {
        self.columns
            .get(self.date_column)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.rows.iter().map(|row| row.date)
    }

    /// The last `n` rows in date order (all rows when fewer than `n` exist).
    pub fn tail(&self, n: usize) -> &[DatedRow] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }

    /// Raw cells of one column, in date order.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(move |row| row.cell(column).unwrap_or_default())
    }
}
