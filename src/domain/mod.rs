// Domain types and value objects
pub mod column_role;
pub mod error;
pub mod table;

// Re-export commonly used types
pub use column_role::{ColumnRole, ResolvedColumn};
pub use error::ViewerError;
pub use table::{DatedRow, NormalizedTable, RawTable};
