//! Converts an Airtable schema to BaseDefinition IR

use super::types::{AirtableSchema, Table};
use crate::type_resolver::{is_read_only, resolve_column_type};
use airtable_oas_common::{
    BaseDefinition, FieldDefinition, GeneratorError, Result, TableDefinition,
};

/// Characters that may not appear in schema or operation identifiers
const FORBIDDEN_IDENTIFIER_CHARS: &[char] = &[
    ';', '/', '?', ':', '@', '=', '&', '"', ' ', '<', '>', '#', '%', '{', '}', '|', '\\', '^',
    '~', '[', ']', '`',
];

/// Convert an Airtable schema to BaseDefinition
///
/// Stops at the first column that cannot be resolved; the error names the
/// table and the column.
pub fn convert_schema(schema: &AirtableSchema) -> Result<BaseDefinition> {
    let tables = schema
        .tables
        .iter()
        .map(convert_table)
        .collect::<Result<Vec<_>>>()?;

    Ok(BaseDefinition {
        id: schema.id.clone(),
        name: schema.name.clone(),
        tables,
    })
}

fn convert_table(table: &Table) -> Result<TableDefinition> {
    let mut fields = Vec::with_capacity(table.fields.len());

    for column in &table.fields {
        let schema = resolve_column_type(column).map_err(|source| GeneratorError::Column {
            table: table.name.clone(),
            source,
        })?;

        fields.push(FieldDefinition {
            name: column.name.clone(),
            schema,
            read_only: is_read_only(column),
        });
    }

    Ok(TableDefinition {
        name: table.name.clone(),
        identifier: sanitize_identifier(&table.name),
        fields,
    })
}

/// Strip characters that are not safe in identifiers from a table name
///
/// # Examples
/// ```
/// use airtable_oas_parser::airtable::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("My Table?"), "MyTable");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .filter(|ch| !FORBIDDEN_IDENTIFIER_CHARS.contains(ch))
        .collect()
}
