//! Common types and utilities for the Airtable OpenAPI generator
//!
//! This crate contains shared data structures, error types, and utilities
//! used across the parser, generator, and CLI components.

mod definition;

pub use definition::{BaseDefinition, FieldDefinition, TableDefinition};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Prefix of every component schema reference
pub const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// Errors that can occur while converting a single column
///
/// Every variant names the offending column so callers can surface it as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    #[error("Unable to infer the type of column {column}: unknown type {type_tag}")]
    UnknownColumnType { column: String, type_tag: String },

    #[error("Unable to infer the type of column {column}: unknown numerical format {format}")]
    UnresolvableNumberFormat { column: String, format: String },

    #[error("Unknown relationship type {relationship} in column {column}")]
    UnresolvableRelationship {
        column: String,
        relationship: String,
    },

    #[error(
        "Column {column} is unsupported. Lookup type columns cannot have result type {result_type}"
    )]
    UnsupportedLookupResult { column: String, result_type: String },

    #[error(
        "Column {column} is invalid. Rollup and Formula type columns cannot have result type {result_type}"
    )]
    InvalidIndirection { column: String, result_type: String },
}

impl ColumnError {
    /// Name of the column that failed to resolve
    pub fn column(&self) -> &str {
        match self {
            ColumnError::UnknownColumnType { column, .. }
            | ColumnError::UnresolvableNumberFormat { column, .. }
            | ColumnError::UnresolvableRelationship { column, .. }
            | ColumnError::UnsupportedLookupResult { column, .. }
            | ColumnError::InvalidIndirection { column, .. } => column,
        }
    }
}

/// Errors that can occur during document generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Table {table}: {source}")]
    Column {
        table: String,
        #[source]
        source: ColumnError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Primitive OpenAPI data types a column can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Number,
    Integer,
    String,
    Boolean,
}

/// OpenAPI schema fragment describing a single field
///
/// Serializes to exactly one of `{type}`, `{type: array, items}` or `{$ref}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaFragment {
    Scalar(ScalarType),
    Array(Box<SchemaFragment>),
    Ref(String),
}

impl SchemaFragment {
    pub fn number() -> Self {
        SchemaFragment::Scalar(ScalarType::Number)
    }

    pub fn integer() -> Self {
        SchemaFragment::Scalar(ScalarType::Integer)
    }

    pub fn string() -> Self {
        SchemaFragment::Scalar(ScalarType::String)
    }

    pub fn boolean() -> Self {
        SchemaFragment::Scalar(ScalarType::Boolean)
    }

    /// Array whose items are described by `items`
    pub fn array_of(items: SchemaFragment) -> Self {
        SchemaFragment::Array(Box::new(items))
    }

    /// Reference to a schema registered under `components.schemas`
    ///
    /// # Examples
    /// ```
    /// use airtable_oas_common::SchemaFragment;
    ///
    /// let fragment = SchemaFragment::component_ref("AirtableAttachment");
    /// assert_eq!(
    ///     fragment,
    ///     SchemaFragment::Ref("#/components/schemas/AirtableAttachment".to_string())
    /// );
    /// ```
    pub fn component_ref(name: &str) -> Self {
        SchemaFragment::Ref(format!("{}{}", COMPONENT_SCHEMA_PREFIX, name))
    }

    /// The primitive type, if this fragment is a plain scalar
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            SchemaFragment::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }
}

impl Serialize for SchemaFragment {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SchemaFragment::Scalar(scalar) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", scalar)?;
                map.end()
            }
            SchemaFragment::Array(items) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            SchemaFragment::Ref(path) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$ref", path)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_fragment_serialization() {
        let value = serde_json::to_value(SchemaFragment::boolean()).unwrap();
        assert_eq!(value, json!({"type": "boolean"}));
    }

    #[test]
    fn test_array_of_refs_serialization() {
        let fragment =
            SchemaFragment::array_of(SchemaFragment::component_ref("AirtableAttachment"));
        let value = serde_json::to_value(fragment).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "array",
                "items": {"$ref": "#/components/schemas/AirtableAttachment"}
            })
        );
    }

    #[test]
    fn test_scalar_type_accessor() {
        assert_eq!(SchemaFragment::integer().scalar_type(), Some(ScalarType::Integer));
        assert_eq!(
            SchemaFragment::array_of(SchemaFragment::string()).scalar_type(),
            None
        );
        assert_eq!(SchemaFragment::component_ref("X").scalar_type(), None);
    }

    #[test]
    fn test_column_error_names_column() {
        let err = ColumnError::UnresolvableNumberFormat {
            column: "Price".to_string(),
            format: "bogus".to_string(),
        };
        assert_eq!(err.column(), "Price");
        let message = err.to_string();
        assert!(message.contains("Price"));
        assert!(message.contains("bogus"));
    }

    #[test]
    fn test_generator_error_carries_table_context() {
        let err = GeneratorError::Column {
            table: "Tasks".to_string(),
            source: ColumnError::UnknownColumnType {
                column: "Mystery".to_string(),
                type_tag: "hologram".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("Tasks"));
        assert!(message.contains("Mystery"));
        assert!(message.contains("hologram"));
    }
}
