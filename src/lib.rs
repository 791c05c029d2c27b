//! FlatDB - A minimal embedded JSON document store written in Rust
//!
//! This library provides the core components for a file-backed store:
//! - Catalog (column schemas, data types)
//! - Storage engine (row codec, table files, query iteration)
//! - Database directory (create/open databases, table lifecycle)
//!
//! A database is a directory and every table inside it is a single JSON
//! file holding a header entry with the column schema plus one entry per
//! row, keyed by the row's identifier. Every operation re-reads the file
//! and an insert rewrites it as a whole, so a call always sees the latest
//! persisted state. There is no durability beyond the whole-file rewrite,
//! no indexing and no cross-process write coordination.

pub mod catalog;
pub mod database;
pub mod error;
pub mod storage;

pub use catalog::{Column, Schema, TypeTag};
pub use database::{create_database, open_database, Database};
pub use error::{Error, Result};
pub use storage::{QueryRow, Table, Value};
