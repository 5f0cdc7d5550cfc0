use std::fmt;

/// Everything that can stop a render pass.
///
/// Malformed date or numeric cells never end up here: they become missing
/// values instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    /// The required forecast upload is missing
    NoFileProvided,
    /// The table lacks a usable column for some role
    Schema(String),
    /// The CSV text itself could not be tokenized
    Csv(String),
    /// An upload could not be read from disk
    Io(String),
}

impl ViewerError {
    /// Missing input is a warning; everything else is reported as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ViewerError::NoFileProvided)
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::NoFileProvided => write!(f, "No forecast file provided"),
            ViewerError::Schema(msg) => write!(f, "Schema error: {}", msg),
            ViewerError::Csv(msg) => write!(f, "CSV error: {}", msg),
            ViewerError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<csv::Error> for ViewerError {
    fn from(err: csv::Error) -> Self {
        ViewerError::Csv(err.to_string())
    }
}

impl From<anyhow::Error> for ViewerError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        ViewerError::Io(format!("{:#}", err))
    }
}
