//! OpenAPI document generation for Airtable bases
//!
//! This crate transforms parsed base definitions into an OpenAPI 3.0
//! document describing the Airtable REST API of that base:
//! - Shared attachment, thumbnail and delete-response schemas
//! - Five record schemas per table
//! - Collection and item paths per table with CRUD operations
//! - Bearer token security

pub mod components;
pub mod openapi;
mod options;
mod paths;

pub use openapi::OpenApiDocument;
pub use options::{GeneratorOptions, UpdateMethod, DEFAULT_API_VERSION, DEFAULT_SERVER_BASE};

use airtable_oas_common::{BaseDefinition, GeneratorError, Result};
use airtable_oas_parser::airtable::{convert_schema, AirtableSchema};
use indexmap::IndexMap;
use openapi::{Components, Info, Server};
use std::fs;
use std::path::Path;

/// OpenAPI version emitted
pub const OPENAPI_VERSION: &str = "3.0.0";

/// OpenAPI document generator
///
/// Transforms BaseDefinition IR into a complete OpenAPI document.
pub struct OpenApiGenerator {
    base_def: BaseDefinition,
    options: GeneratorOptions,
}

impl OpenApiGenerator {
    /// Create a new generator with default options
    pub fn new(base_def: BaseDefinition) -> Self {
        Self {
            base_def,
            options: GeneratorOptions::default(),
        }
    }

    /// Replace the generator options
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the OpenAPI document
    ///
    /// Tables whose schema names would clash with an earlier table get a
    /// numeric suffix on their identifier (`MyTable2`), used for both schema
    /// names and operation ids.
    pub fn generate(&self) -> Result<OpenApiDocument> {
        let mut schemas = components::shared_schemas();
        let mut path_items = IndexMap::new();

        for table in &self.base_def.tables {
            let names = components::register_table_schemas(&mut schemas, table);

            let (path, item) = paths::collection_path(table, &names);
            path_items.insert(path, item);
            let (path, item) = paths::item_path(table, &names, self.options.update_method);
            path_items.insert(path, item);
        }

        Ok(OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: format!("Airtable API for {}", self.base_def.name),
                version: self.options.api_version.clone(),
            },
            servers: vec![Server {
                url: self.options.server_url(&self.base_def.id),
            }],
            components: Components {
                schemas,
                security_schemes: components::security_schemes(),
            },
            paths: path_items,
        })
    }

    /// Render the document as JSON
    pub fn generate_json(&self, pretty: bool) -> Result<String> {
        let document = self.generate()?;
        let json = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Render the document as JSON into a file
    pub fn generate_to_file(&self, output_path: &Path, pretty: bool) -> Result<()> {
        let json = self.generate_json(pretty)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GeneratorError::Generation(format!("Failed to create output directory: {}", e))
            })?;
        }

        fs::write(output_path, json).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get reference to the base definition being generated
    pub fn base_def(&self) -> &BaseDefinition {
        &self.base_def
    }
}

/// Build the OpenAPI document for an Airtable schema
///
/// Any column that cannot be resolved aborts the build; no partial document
/// is produced.
///
/// # Examples
/// ```
/// use airtable_oas_generator::{build_document, GeneratorOptions};
/// use airtable_oas_parser::airtable::AirtableSchema;
///
/// let schema: AirtableSchema = serde_json::from_str(
///     r#"{"id": "appBase", "name": "Base", "tables": []}"#,
/// ).unwrap();
/// let document = build_document(&schema, &GeneratorOptions::default()).unwrap();
/// assert_eq!(document.info.title, "Airtable API for Base");
/// assert!(document.paths.is_empty());
/// ```
pub fn build_document(
    schema: &AirtableSchema,
    options: &GeneratorOptions,
) -> Result<OpenApiDocument> {
    let base_def = convert_schema(schema)?;
    OpenApiGenerator::new(base_def)
        .with_options(options.clone())
        .generate()
}
