//! Name-based column sniffing.
//!
//! Each role is described by a [`RoleRule`]: a list of header keywords and a
//! positional fallback. Rules are evaluated in order against the header, so
//! the column order of an upload matters whenever its names are not
//! descriptive.

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::DETECTION;
use crate::domain::{ColumnRole, NormalizedTable, ResolvedColumn, ViewerError};

/// One entry of the role rule table.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: ColumnRole,
    /// Lower-case substrings; the first non-date header containing any wins
    pub keywords: &'static [&'static str],
    /// Header position used when no name matches
    pub fallback_index: usize,
}

impl RoleRule {
    /// Applies the rule to a header. Never selects the date column.
    pub fn resolve(&self, columns: &[String], date_column: usize) -> Option<ResolvedColumn> {
        let by_name = columns.iter().enumerate().find(|(index, name)| {
            if *index == date_column {
                return false;
            }
            let lower = name.to_lowercase();
            self.keywords.iter().any(|kw| lower.contains(kw))
        });

        if let Some((index, name)) = by_name {
            return Some(ResolvedColumn {
                role: self.role,
                index,
                name: name.clone(),
                by_fallback: false,
            });
        }

        if self.fallback_index == date_column {
            return None;
        }
        columns
            .get(self.fallback_index)
            .map(|name| ResolvedColumn {
                role: self.role,
                index: self.fallback_index,
                name: name.clone(),
                by_fallback: true,
            })
    }

    fn missing_error(&self, columns: &[String]) -> ViewerError {
        ViewerError::Schema(format!(
            "no column for the {}: no header contains {} and column {} is not usable (columns: {})",
            self.role,
            self.keywords
                .iter()
                .map(|kw| format!("'{}'", kw))
                .collect::<Vec<_>>()
                .join(" or "),
            self.fallback_index + 1,
            columns.join(", ")
        ))
    }
}

/// Rules for the forecast upload: series A then series B.
pub const FORECAST_RULES: [RoleRule; 2] = [
    RoleRule {
        role: ColumnRole::ForecastSeriesA,
        keywords: DETECTION.roles.series_a,
        fallback_index: DETECTION.roles.series_a_fallback,
    },
    RoleRule {
        role: ColumnRole::ForecastSeriesB,
        keywords: DETECTION.roles.series_b,
        fallback_index: DETECTION.roles.series_b_fallback,
    },
];

/// Rules for the historical upload.
pub const HISTORICAL_RULES: [RoleRule; 1] = [RoleRule {
    role: ColumnRole::PriceColumn,
    keywords: DETECTION.roles.price,
    fallback_index: DETECTION.roles.price_fallback,
}];

/// Evaluates `rules` in sequence; the first unresolvable rule is a schema error.
pub fn resolve_roles(
    columns: &[String],
    date_column: usize,
    rules: &[RoleRule],
) -> Result<Vec<ResolvedColumn>, ViewerError> {
    rules
        .iter()
        .map(|rule| {
            let resolved = rule
                .resolve(columns, date_column)
                .ok_or_else(|| rule.missing_error(columns));

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_role_inference {
                match &resolved {
                    Ok(col) => log::info!(
                        "Role {} -> '{}' (#{}, fallback: {})",
                        rule.role,
                        col.name,
                        col.index,
                        col.by_fallback
                    ),
                    Err(e) => log::info!("Role {} unresolved: {}", rule.role, e),
                }
            }

            resolved
        })
        .collect()
}

/// The two model series of a forecast table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastColumns {
    pub series_a: ResolvedColumn,
    pub series_b: ResolvedColumn,
}

pub fn resolve_forecast_columns(table: &NormalizedTable) -> Result<ForecastColumns, ViewerError> {
    let mut resolved = resolve_roles(&table.columns, table.date_column, &FORECAST_RULES)?;
    let series_b = resolved.pop();
    let series_a = resolved.pop();
    match (series_a, series_b) {
        (Some(series_a), Some(series_b)) => Ok(ForecastColumns { series_a, series_b }),
        _ => Err(ViewerError::Schema(
            "forecast rules did not yield two series".to_string(),
        )),
    }
}

pub fn resolve_price_column(table: &NormalizedTable) -> Result<ResolvedColumn, ViewerError> {
    resolve_roles(&table.columns, table.date_column, &HISTORICAL_RULES)?
        .pop()
        .ok_or_else(|| ViewerError::Schema("historical rules did not yield a column".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_table(columns: &[&str], date_column: usize) -> NormalizedTable {
        NormalizedTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            date_column,
            rows: Vec::new(),
        }
    }

    #[test]
    fn name_match_selects_model_columns() {
        let table = forecast_table(&["Date", "Pred_LSTM", "Pred_GRU"], 0);
        let cols = resolve_forecast_columns(&table).unwrap();
        assert_eq!(cols.series_a.name, "Pred_LSTM");
        assert_eq!(cols.series_b.name, "Pred_GRU");
        assert!(!cols.series_a.by_fallback);
        assert!(!cols.series_b.by_fallback);
    }

    #[test]
    fn name_match_ignores_position() {
        let table = forecast_table(&["Date", "gru_close", "Other", "lstm_close"], 0);
        let cols = resolve_forecast_columns(&table).unwrap();
        assert_eq!(cols.series_a.index, 3);
        assert_eq!(cols.series_b.index, 1);
    }

    #[test]
    fn positional_fallback_without_names() {
        let table = forecast_table(&["Date", "ValA", "ValB"], 0);
        let cols = resolve_forecast_columns(&table).unwrap();
        assert_eq!(cols.series_a.name, "ValA");
        assert_eq!(cols.series_b.name, "ValB");
        assert!(cols.series_a.by_fallback && cols.series_b.by_fallback);
        assert_eq!(cols.series_a.role, ColumnRole::ForecastSeriesA);
        assert_eq!(cols.series_b.role, ColumnRole::ForecastSeriesB);
    }

    #[test]
    fn resolution_is_idempotent() {
        let table = forecast_table(&["Tanggal", "x", "GRU (IDR)"], 0);
        let first = resolve_forecast_columns(&table).unwrap();
        let second = resolve_forecast_columns(&table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_fallback_is_schema_error() {
        let table = forecast_table(&["Date", "ValA"], 0);
        let err = resolve_forecast_columns(&table).unwrap_err();
        match err {
            ViewerError::Schema(msg) => assert!(msg.contains("GRU forecast")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fallback_never_picks_date_column() {
        let table = forecast_table(&["ValA", "Date", "ValB"], 1);
        assert!(resolve_forecast_columns(&table).is_err());
    }

    #[test]
    fn date_column_is_not_a_name_match() {
        // The date header mentions "close" but must not be chosen as price
        let table = forecast_table(&["close_date", "Adj", "Close"], 0);
        let col = resolve_price_column(&table).unwrap();
        assert_eq!(col.name, "Close");
        assert_eq!(col.role, ColumnRole::PriceColumn);
    }

    #[test]
    fn price_falls_back_to_second_column() {
        let table = forecast_table(&["Date", "Harga", "Volume"], 0);
        let col = resolve_price_column(&table).unwrap();
        assert_eq!(col.index, 1);
        assert!(col.by_fallback);
    }
}
