//! Database directory for FlatDB
//!
//! A database is a directory; every table inside it is one JSON file. This
//! module maps database names to directories, enumerates table files, and
//! hands out table handles.

use crate::catalog::{Column, Schema};
use crate::error::{Error, Result};
use crate::storage::Table;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extension of table files inside a database directory
pub const TABLE_EXT: &str = "json";

/// Create a new database directory under `base_dir` and return a connection
///
/// Fails if a database with that name already exists.
pub fn create_database(base_dir: impl AsRef<Path>, name: &str) -> Result<Database> {
    let path = base_dir.as_ref().join(name);
    if path.exists() {
        return Err(Error::DatabaseAlreadyExists(name.to_string()));
    }
    fs::create_dir_all(&path)?;
    info!(database = name, path = %path.display(), "created database");
    Ok(Database {
        name: name.to_string(),
        path,
    })
}

/// Open a connection to an existing database directory under `base_dir`
///
/// Fails if no database with that name exists.
pub fn open_database(base_dir: impl AsRef<Path>, name: &str) -> Result<Database> {
    let path = base_dir.as_ref().join(name);
    if !path.is_dir() {
        return Err(Error::DatabaseNotFound(name.to_string()));
    }
    debug!(database = name, path = %path.display(), "opened database");
    Ok(Database {
        name: name.to_string(),
        path,
    })
}

/// A connection to one database directory
#[derive(Debug, Clone)]
pub struct Database {
    name: String,
    path: PathBuf,
}

impl Database {
    /// Database name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory backing this database
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new table with the given columns
    ///
    /// Writes a table file holding only the header entry and returns a
    /// handle to it. Fails if a table with that name already exists.
    pub fn create_table(&self, name: &str, columns: Vec<Column>) -> Result<Table> {
        if self.table_exists(name) {
            return Err(Error::TableAlreadyExists(name.to_string()));
        }
        let table = Table::create(name, self.table_path(name), Schema::from_columns(columns))?;
        info!(database = %self.name, table = name, "created table");
        Ok(table)
    }

    /// Get a handle to an existing table
    pub fn table(&self, name: &str) -> Result<Table> {
        if !self.table_exists(name) {
            return Err(Error::TableNotFound(name.to_string()));
        }
        Ok(Table::open(name, self.table_path(name)))
    }

    /// Check whether a table with this name exists
    pub fn table_exists(&self, name: &str) -> bool {
        self.table_path(name).is_file()
    }

    /// List the names of all tables in the database, sorted
    pub fn show_tables(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(TABLE_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Path of the file backing a table with this name
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.path.join(format!("{name}.{TABLE_EXT}"))
    }
}
