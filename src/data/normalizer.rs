use chrono::NaiveDateTime;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DETECTION;
use crate::data::date_parser::parse_date_lenient;
use crate::domain::{DatedRow, NormalizedTable, RawTable, ViewerError};

/// Picks the date column: first header containing a date keyword
/// (case-insensitive), otherwise the configured positional fallback.
pub fn detect_date_column(columns: &[String]) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }

    columns
        .iter()
        .position(|name| {
            let lower = name.to_lowercase();
            DETECTION.date.keywords.iter().any(|kw| lower.contains(kw))
        })
        .or(Some(DETECTION.date.fallback_index.min(columns.len() - 1)))
}

/// Cleans an uploaded table: detect the date column, parse it leniently,
/// drop rows whose date did not parse and stable-sort by date.
///
/// Returns the cleaned table and the name of the date column. A table with
/// no columns is a schema error; a table where no date parses is simply empty.
pub fn normalize(raw: RawTable) -> Result<(NormalizedTable, String), ViewerError> {
    let date_column = detect_date_column(&raw.columns)
        .ok_or_else(|| ViewerError::Schema("the uploaded table has no columns".to_string()))?;

    #[cfg(debug_assertions)]
    let total_rows = raw.rows.len();

    let parsed: Vec<(Option<NaiveDateTime>, Vec<String>)> = raw
        .rows
        .into_iter()
        .map(|cells| {
            let date = cells.get(date_column).and_then(|c| parse_date_lenient(c));
            (date, cells)
        })
        .collect();

    let mut rows: Vec<DatedRow> = parsed
        .into_iter()
        .filter_map(|(date, cells)| date.map(|date| DatedRow { date, cells }))
        .collect();

    // `sort_by_key` is stable, so equal dates keep their file order
    rows.sort_by_key(|row| row.date);

    let table = NormalizedTable {
        columns: raw.columns,
        date_column,
        rows,
    };
    let date_column_name = table.date_column_name().to_string();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_normalization {
        log::info!(
            "Normalized on '{}': kept {}/{} rows",
            date_column_name,
            table.row_count(),
            total_rows
        );
    }

    Ok((table, date_column_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn drops_unparseable_rows() {
        let raw = table(
            &["Date", "Close"],
            &[
                &["2024-01-01", "100"],
                &["Ticker", "200"],
                &["2024-01-03", "110"],
            ],
        );
        let (normalized, date_col) = normalize(raw).unwrap();
        assert_eq!(date_col, "Date");
        assert_eq!(normalized.row_count(), 2);
        assert_eq!(normalized.rows[0].cells, vec!["2024-01-01", "100"]);
        assert_eq!(normalized.rows[1].cells, vec!["2024-01-03", "110"]);
    }

    #[test]
    fn sorts_ascending_and_keeps_ties_stable() {
        let raw = table(
            &["Date", "v"],
            &[
                &["2024-01-03", "c"],
                &["2024-01-01", "a1"],
                &["2024-01-02", "b"],
                &["2024-01-01", "a2"],
            ],
        );
        let (normalized, _) = normalize(raw).unwrap();
        let dates: Vec<_> = normalized.dates().collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        let values: Vec<_> = normalized.column_cells(1).collect();
        assert_eq!(values, vec!["a1", "a2", "b", "c"]);
        assert_eq!(normalized.rows[0].date, ymd(2024, 1, 1));
    }

    #[test]
    fn name_match_beats_position() {
        let raw = table(&["Close", "Tanggal"], &[&["5", "2024-01-01"]]);
        let (normalized, date_col) = normalize(raw).unwrap();
        assert_eq!(date_col, "Tanggal");
        assert_eq!(normalized.date_column, 1);
        assert_eq!(normalized.row_count(), 1);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let columns = vec!["Price".to_string(), "TRADE_DATE".to_string()];
        assert_eq!(detect_date_column(&columns), Some(1));
    }

    #[test]
    fn falls_back_to_first_column() {
        let raw = table(&["when", "Close"], &[&["2024-01-02", "5"], &["x", "6"]]);
        let (normalized, date_col) = normalize(raw).unwrap();
        assert_eq!(date_col, "when");
        assert_eq!(normalized.row_count(), 1);
    }

    #[test]
    fn all_invalid_gives_empty_table() {
        let raw = table(&["Date", "Close"], &[&["Ticker", "TLKM"], &["", "1"]]);
        let (normalized, _) = normalize(raw).unwrap();
        assert!(normalized.is_empty());
        assert_eq!(normalized.columns.len(), 2);
    }

    #[test]
    fn no_columns_is_schema_error() {
        let err = normalize(RawTable::default()).unwrap_err();
        assert!(matches!(err, ViewerError::Schema(_)));
    }
}
