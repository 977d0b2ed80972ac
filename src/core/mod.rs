//! Tabular utilities shared by the commands
//!
//! - `table`: in-memory table built from stat records, with left joins
//! - `files`: CSV reading and writing for tables

pub mod files;
pub mod table;

// Re-export commonly used items for convenience
pub use files::{read_table_csv, write_table_csv};
pub use table::{Suffixes, Table};
