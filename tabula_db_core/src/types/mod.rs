pub mod cell;
pub mod column_type;

pub use cell::Cell;
pub use column_type::ColumnType;

/// A row is a vector of cells, one per column
pub type Row = Vec<Cell>;
