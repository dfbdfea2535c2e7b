//! Airtable schema file parser

use super::types::AirtableSchema;
use airtable_oas_common::{BaseDefinition, GeneratorError, Result};
use std::fs;
use std::path::Path;

/// Airtable schema parser
///
/// Reads an Airtable base schema from a JSON export or an in-memory value
/// and converts it into the `BaseDefinition` IR.
pub struct AirtableParser {
    /// Loaded schema
    schema: AirtableSchema,
}

impl AirtableParser {
    /// Load schema from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = AirtableParser::from_file("base-schema.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read Airtable schema file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse schema from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: AirtableSchema = serde_json::from_str(json).map_err(|e| {
            GeneratorError::Parse(format!("Failed to parse Airtable schema JSON: {}", e))
        })?;

        Ok(Self::from_schema(schema))
    }

    /// Parse schema from an already decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let schema: AirtableSchema = serde_json::from_value(value).map_err(|e| {
            GeneratorError::Parse(format!("Failed to parse Airtable schema: {}", e))
        })?;

        Ok(Self::from_schema(schema))
    }

    /// Wrap an existing schema
    pub fn from_schema(schema: AirtableSchema) -> Self {
        Self { schema }
    }

    /// Parse schema into BaseDefinition IR
    pub fn parse(&self) -> Result<BaseDefinition> {
        super::converter::convert_schema(&self.schema)
    }

    /// Get reference to the underlying schema
    pub fn schema(&self) -> &AirtableSchema {
        &self.schema
    }
}
