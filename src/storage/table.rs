//! Table storage for FlatDB
//!
//! This module owns the full lifecycle of one table's on-disk state: every
//! operation re-reads the backing file, works on the in-memory state, and a
//! mutation rewrites the whole file as a single unit.

use crate::catalog::Schema;
use crate::error::{Error, Result};
use crate::storage::document::{Row, TableData, HEADERS_KEY};
use crate::storage::value::{validate, RowId, Value};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// A handle to one persisted table
///
/// The handle holds no table state: `describe`, `count`, `all` and `query`
/// each see the latest persisted document at call time. Mutations on one
/// handle are serialized behind a mutex; two handles (or two processes)
/// writing the same file still race on the read-modify-rewrite cycle, which
/// is a documented limitation of the format.
#[derive(Debug)]
pub struct Table {
    name: String,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl Table {
    /// Open a handle to an existing table file
    pub(crate) fn open(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create the backing file for a new table, holding only the header
    /// entry, and return a handle to it
    pub(crate) fn create(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        schema: Schema,
    ) -> Result<Self> {
        let table = Self::open(name, path);
        table.persist(&TableData::empty(schema))?;
        Ok(table)
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stored column descriptor list, read fresh from storage
    pub fn describe(&self) -> Result<Schema> {
        Ok(self.load()?.schema)
    }

    /// Number of rows currently stored
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.row_count())
    }

    /// Insert one row, given positional values in schema column order
    ///
    /// The first value supplies the row identifier; inserting under an
    /// existing identifier replaces that row entirely. Validation failures
    /// abort the whole insert before anything is written.
    pub fn insert(&self, values: Vec<Value>) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();
        let mut data = self.load()?;

        if values.len() != data.schema.len() {
            return Err(Error::ArityMismatch {
                expected: data.schema.len(),
                found: values.len(),
            });
        }

        let mut row = Row::with_capacity(values.len());
        for (value, column) in values.into_iter().zip(data.schema.columns()) {
            let converted = validate(value, column)?;
            row.insert(column.name.clone(), converted);
        }

        // Row identifier is the converted first field
        let id = match row.first() {
            Some((_, value)) => RowId::new(value.clone()),
            // A table with no columns has nothing to key a row by
            None => {
                return Err(Error::ArityMismatch {
                    expected: 1,
                    found: 0,
                })
            }
        };
        // The header entry's key is reserved; a row stored under it would
        // clobber the schema
        if id.key_repr() == HEADERS_KEY {
            return Err(Error::ReservedRowId(id.key_repr()));
        }
        data.rows.insert(id, row);
        self.persist(&data)
    }

    /// Iterate all rows, ascending by row identifier
    ///
    /// The sequence is a snapshot taken from storage at call time.
    pub fn all(&self) -> Result<impl Iterator<Item = QueryRow>> {
        let data = self.load()?;
        Ok(data.rows.into_values().map(QueryRow::new))
    }

    /// Iterate the rows where every named field equals the expected value
    ///
    /// Matching is strict value equality; rows arrive in the same order as
    /// `all()`. A predicate naming a column absent from the schema fails
    /// fast with `Error::ColumnNotFound`.
    pub fn query(
        &self,
        predicates: &[(&str, Value)],
    ) -> Result<impl Iterator<Item = QueryRow>> {
        let data = self.load()?;
        for (name, _) in predicates {
            if !data.schema.has_column(name) {
                return Err(Error::ColumnNotFound(name.to_string()));
            }
        }
        let predicates: Vec<(String, Value)> = predicates
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Ok(data
            .rows
            .into_values()
            .filter(move |row| {
                predicates
                    .iter()
                    .all(|(name, expected)| row.get(name) == Some(expected))
            })
            .map(QueryRow::new))
    }

    fn load(&self) -> Result<TableData> {
        if !self.path.exists() {
            return Err(Error::TableNotFound(self.name.clone()));
        }
        let text = fs::read_to_string(&self.path)?;
        let data = TableData::from_json(&self.path.display().to_string(), &text)?;
        debug!(table = %self.name, rows = data.row_count(), "loaded table");
        Ok(data)
    }

    /// Rewrite the whole backing file as a single unit
    fn persist(&self, data: &TableData) -> Result<()> {
        let json = data.to_json()?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(table = %self.name, rows = data.row_count(), "persisted table");
        Ok(())
    }
}

/// A read-only projection of one row, materialized for iteration
///
/// Fields are exposed as a fixed name-to-value mapping, in schema column
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRow {
    fields: IndexMap<String, Value>,
}

impl QueryRow {
    fn new(row: Row) -> Self {
        Self { fields: row }
    }

    /// Get a field by column name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate (column name, value) pairs in schema column order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
