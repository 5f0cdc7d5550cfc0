use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic meaning of a column, inferred from its header name.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum ColumnRole {
    DateColumn,
    ForecastSeriesA, // LSTM
    ForecastSeriesB, // GRU
    PriceColumn,     // Historical close
    #[default]
    Unclassified,
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColumnRole::DateColumn => write!(f, "date"),
            ColumnRole::ForecastSeriesA => write!(f, "LSTM forecast"),
            ColumnRole::ForecastSeriesB => write!(f, "GRU forecast"),
            ColumnRole::PriceColumn => write!(f, "historical close price"),
            ColumnRole::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// A column picked for a role, remembered by position and by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    pub role: ColumnRole,
    pub index: usize,
    pub name: String,
    /// `true` when picked by position because no header matched
    pub by_fallback: bool,
}
