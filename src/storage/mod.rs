//! Storage engine module
//!
//! This module contains the storage engine components:
//! - Value representation and the row codec
//! - The persisted table document format
//! - The table store and query iteration

pub mod document;
pub mod table;
pub mod value;

pub use document::{Row, TableData, HEADERS_KEY};
pub use table::{QueryRow, Table};
pub use value::{validate, RowId, Value};
