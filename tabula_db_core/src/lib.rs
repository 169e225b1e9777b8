pub mod error;
pub mod format;
pub mod table;
pub mod types;

pub use error::SchemaError;
pub use table::Table;
pub use types::{Cell, ColumnType, Row};
