//! Data types for FlatDB
//!
//! This module defines the closed set of column types supported by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column data types
///
/// Fixed at table-creation time; the tag decides which runtime values a
/// column accepts on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 text
    Text,
    /// Boolean
    Bool,
    /// Calendar date, persisted as an ISO-8601 string
    Date,
}

impl TypeTag {
    /// The name used in the persisted header and in error messages
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Text => "text",
            TypeTag::Bool => "bool",
            TypeTag::Date => "date",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
