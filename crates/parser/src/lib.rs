//! Airtable schema parsing
//!
//! This crate handles parsing of Airtable base schemas into an intermediate
//! representation (`BaseDefinition`).
//!
//! ## Parsing Strategy
//!
//! Each column is classified into a [`ColumnType`] and resolved to an
//! OpenAPI schema fragment:
//! - Numeric columns → `number` or `integer` (by `typeOptions.format`)
//! - Text, date and select columns → `string`
//! - Multi-value and linked record columns → array of `string`
//! - Attachments → `$ref` to the shared `AirtableAttachment` schema
//! - Lookup, formula and rollup columns → resolved through their result type
//!
//! Server-computed columns are flagged read-only so the generator can leave
//! them out of write request bodies.

pub mod airtable;
mod json_filter;
mod type_resolver;

pub use airtable::AirtableParser;
pub use json_filter::{omit_key, remove_foreign_tables, FOREIGN_TABLE_KEY};
pub use type_resolver::{
    is_read_only, is_read_only_type, resolve_column_type, ColumnType, NestedResult, NumberFormat,
    Relationship, ATTACHMENT_SCHEMA,
};

use airtable_oas_common::{BaseDefinition, Result};

/// Parse an Airtable schema JSON string into a `BaseDefinition`
pub fn parse_airtable_schema(json: &str) -> Result<BaseDefinition> {
    AirtableParser::from_json(json)?.parse()
}
