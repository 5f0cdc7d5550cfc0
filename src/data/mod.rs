// Upload handling, CSV reading and normalization
pub mod csv_reader;
pub mod date_parser;
pub mod normalizer;
pub mod upload;

// Re-export commonly used types
pub use csv_reader::CsvReader;
pub use normalizer::normalize;
pub use upload::{ForecastUploads, UploadSlot, UploadedFile};
