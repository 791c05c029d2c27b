//! Value and row identifier types for FlatDB
//!
//! This module defines how field values are represented in memory, how they
//! are validated against a column declaration, and how row identifiers are
//! ordered and keyed in the persisted document.

use crate::catalog::{Column, TypeTag};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A field value in the store
///
/// Serialized untagged, so values take their natural JSON form. `Date` only
/// exists on the insert path: the codec folds it into its ISO-8601 text form
/// before anything is persisted, and reads never rehydrate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value (64-bit)
    Int(i64),
    /// Float value (64-bit)
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
    /// Date value
    Date(NaiveDate),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Value {
    /// Get the type name of this value (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
        }
    }

    /// Check whether this value conforms to a declared column type
    pub fn conforms_to(&self, tag: TypeTag) -> bool {
        matches!(
            (self, tag),
            (Value::Int(_), TypeTag::Int)
                | (Value::Float(_), TypeTag::Float)
                | (Value::Bool(_), TypeTag::Bool)
                | (Value::Text(_), TypeTag::Text)
                | (Value::Date(_), TypeTag::Date)
        )
    }

    /// The plain textual form used when the value keys a row in the
    /// persisted document
    pub fn key_repr(&self) -> String {
        match self {
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_repr())
    }
}

/// Validate one field value against one column declaration
///
/// The column's type tag resolves to a concrete runtime check; a `Date`
/// column requires an actual date value, not the text "date". On success a
/// date is converted to its canonical ISO-8601 text form and every other
/// value passes through unchanged. Pure function of its arguments.
pub fn validate(value: Value, column: &Column) -> Result<Value> {
    if !value.conforms_to(column.type_tag) {
        return Err(Error::TypeMismatch {
            column: column.name.clone(),
            expected: column.type_tag.name().to_string(),
            found: value.type_name().to_string(),
        });
    }
    match value {
        Value::Date(d) => Ok(Value::Text(d.format("%Y-%m-%d").to_string())),
        other => Ok(other),
    }
}

/// Row identifier - the value of a row's first field
///
/// Wraps `Value` with a total order so rows can be kept sorted. Within one
/// variant the order is natural (numeric for numbers, lexicographic for
/// text); identifiers of mixed types fall back to an arbitrary variant rank,
/// which the store documents as unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowId(Value);

impl RowId {
    /// Wrap a converted field value as a row identifier
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse an identifier back from its persisted key text, guided by the
    /// type of the table's first column
    pub fn parse(key: &str, tag: TypeTag) -> Option<Self> {
        let value = match tag {
            TypeTag::Int => Value::Int(key.parse().ok()?),
            TypeTag::Float => Value::Float(key.parse().ok()?),
            TypeTag::Bool => Value::Bool(key.parse().ok()?),
            // Date identifiers were folded to text by the codec on insert
            TypeTag::Text | TypeTag::Date => Value::Text(key.to_string()),
        };
        Some(Self(value))
    }

    /// The wrapped value
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// The textual form used as the row's key in the persisted document
    pub fn key_repr(&self) -> String {
        self.0.key_repr()
    }

    fn rank(&self) -> u8 {
        match self.0 {
            Value::Int(_) => 0,
            Value::Float(_) => 1,
            Value::Bool(_) => 2,
            Value::Text(_) => 3,
            Value::Date(_) => 4,
        }
    }
}

impl PartialOrd for RowId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RowId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
