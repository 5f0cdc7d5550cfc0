use csv::{ReaderBuilder, StringRecord};

use crate::domain::{RawTable, ViewerError};

/// Reads uploaded CSV bytes into a [`RawTable`].
///
/// The first record is the header. Short rows are padded with empty cells;
/// rows with more fields than the header are rejected.
pub struct CsvReader {
    delimiter: u8,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawTable, ViewerError> {
        // Invalid UTF-8 is replaced rather than rejected
        let text = String::from_utf8_lossy(bytes);
        self.read_str(&text)
    }

    pub fn read_str(&self, content: &str) -> Result<RawTable, ViewerError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| ViewerError::Csv(format!("Failed to read CSV header: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        // An empty upload yields a header of zero columns, not an error
        if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
            return Ok(RawTable::default());
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                ViewerError::Csv(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(Self::pad_record(index, &columns, &record)?);
        }

        Ok(RawTable::new(columns, rows))
    }

    fn pad_record(
        index: usize,
        columns: &[String],
        record: &StringRecord,
    ) -> Result<Vec<String>, ViewerError> {
        if record.len() > columns.len() {
            return Err(ViewerError::Csv(format!(
                "Expected {} fields in row {}, saw {}",
                columns.len(),
                index + 1,
                record.len()
            )));
        }

        let mut cells: Vec<String> = record.iter().map(str::to_string).collect();
        cells.resize(columns.len(), String::new());
        Ok(cells)
    }
}
