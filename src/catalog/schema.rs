//! Schema definitions for FlatDB
//!
//! This module defines table schemas and column metadata.

use super::types::TypeTag;
use serde::{Deserialize, Serialize};

/// Column definition in a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Data type
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
        }
    }
}

/// Table schema - the ordered column declaration of a table
///
/// Immutable once the table has been created; column order defines the
/// required argument order for inserts, and the first column supplies the
/// row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema from a list of columns
    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Get all columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Check if column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    /// The column whose value acts as the row identifier
    pub fn id_column(&self) -> Option<&Column> {
        self.columns.first()
    }

    /// Get column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_schema() -> Schema {
        Schema::from_columns(vec![
            Column::new("id", TypeTag::Int),
            Column::new("name", TypeTag::Text),
            Column::new("birthday", TypeTag::Date),
        ])
    }

    #[test]
    fn test_schema_lookup() {
        let schema = users_schema();

        assert_eq!(schema.len(), 3);
        assert!(schema.has_column("name"));
        assert!(!schema.has_column("email"));
        assert_eq!(schema.id_column().unwrap().name, "id");
        assert_eq!(schema.column_names(), vec!["id", "name", "birthday"]);
    }

    #[test]
    fn test_column_serialized_form() {
        let col = Column::new("birthday", TypeTag::Date);
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(json, r#"{"name":"birthday","type":"date"}"#);

        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(back, col);
    }
}
