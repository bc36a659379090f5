//! File format handlers for translation sources

pub mod table;

// Re-export main table types
pub use table::{Separator, Table, TextEncoding, read_table};
