//! Persisted table document for FlatDB
//!
//! One table is one JSON object: a `"headers"` entry carrying the ordered
//! column descriptors, and one entry per row keyed by the row identifier's
//! textual form. This module converts between that document and the
//! in-memory table state.

use crate::catalog::{Column, Schema};
use crate::error::{Error, Result};
use crate::storage::value::{RowId, Value};
use indexmap::IndexMap;
use serde_json::{Map, Value as Json};
use std::collections::BTreeMap;

/// The reserved document key holding the column descriptors
pub const HEADERS_KEY: &str = "headers";

/// A stored row: column name to value, in schema column order
pub type Row = IndexMap<String, Value>;

/// Full in-memory state of one table
#[derive(Debug, Clone)]
pub struct TableData {
    /// The table's column declaration
    pub schema: Schema,
    /// Rows keyed by identifier, kept in ascending identifier order
    pub rows: BTreeMap<RowId, Row>,
}

impl TableData {
    /// A freshly created table: fixed schema, no rows
    pub fn empty(schema: Schema) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
        }
    }

    /// Number of stored rows (the header entry does not count)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Serialize to the on-disk document form
    pub fn to_json(&self) -> Result<String> {
        let mut doc = Map::new();
        doc.insert(
            HEADERS_KEY.to_string(),
            serde_json::to_value(self.schema.columns())?,
        );
        for (id, row) in &self.rows {
            doc.insert(id.key_repr(), serde_json::to_value(row)?);
        }
        Ok(serde_json::to_string(&Json::Object(doc))?)
    }

    /// Parse the on-disk document form
    ///
    /// `path` only labels errors. Any structural deviation from the
    /// documented format surfaces as `Error::Corrupted`.
    pub fn from_json(path: &str, text: &str) -> Result<Self> {
        let corrupted = |reason: String| Error::Corrupted {
            path: path.to_string(),
            reason,
        };

        let doc: Json = serde_json::from_str(text)
            .map_err(|e| corrupted(format!("not valid JSON: {e}")))?;
        let Json::Object(mut doc) = doc else {
            return Err(corrupted("top-level value is not an object".to_string()));
        };

        let headers = doc
            .remove(HEADERS_KEY)
            .ok_or_else(|| corrupted("missing 'headers' entry".to_string()))?;
        let columns: Vec<Column> = serde_json::from_value(headers)
            .map_err(|e| corrupted(format!("malformed 'headers' entry: {e}")))?;
        let schema = Schema::from_columns(columns);

        let mut rows = BTreeMap::new();
        if doc.is_empty() {
            return Ok(Self { schema, rows });
        }
        let id_tag = schema
            .id_column()
            .ok_or_else(|| corrupted("row entry in a table with no columns".to_string()))?
            .type_tag;
        for (key, entry) in doc {
            let id = RowId::parse(&key, id_tag)
                .ok_or_else(|| corrupted(format!("row key '{key}' is not a valid {id_tag}")))?;
            let row: Row = serde_json::from_value(entry)
                .map_err(|e| corrupted(format!("malformed row '{key}': {e}")))?;
            rows.insert(id, row);
        }

        Ok(Self { schema, rows })
    }
}
