//! Intermediate representation of a parsed Airtable base
//!
//! The parser produces a [`BaseDefinition`] with every column already
//! resolved to a [`SchemaFragment`]; the generator only assembles documents.

use crate::SchemaFragment;

/// Airtable base with all column types resolved
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDefinition {
    /// Base identifier (e.g., "appXXXXXXXXXXXXXX"), used in the server URL
    pub id: String,

    /// Human-readable base name
    pub name: String,

    /// Tables in input order
    pub tables: Vec<TableDefinition>,
}

/// A single table of the base
#[derive(Debug, Clone, PartialEq)]
pub struct TableDefinition {
    /// Raw table name, used verbatim as a URL path segment
    pub name: String,

    /// Sanitized name used in schema and operation identifiers
    pub identifier: String,

    /// Fields in input column order
    pub fields: Vec<FieldDefinition>,
}

/// A resolved column
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub schema: SchemaFragment,

    /// Server-computed; excluded from write request bodies
    pub read_only: bool,
}

impl TableDefinition {
    /// Fields that may appear in create/update request bodies
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| !field.read_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writable_fields_skip_read_only() {
        let table = TableDefinition {
            name: "Tasks".to_string(),
            identifier: "Tasks".to_string(),
            fields: vec![
                FieldDefinition {
                    name: "Name".to_string(),
                    schema: SchemaFragment::string(),
                    read_only: false,
                },
                FieldDefinition {
                    name: "Number".to_string(),
                    schema: SchemaFragment::integer(),
                    read_only: true,
                },
            ],
        };

        let writable: Vec<&str> = table
            .writable_fields()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(writable, vec!["Name"]);
    }
}
