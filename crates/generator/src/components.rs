//! Component schemas: shared Airtable objects and per-table record schemas

use crate::openapi::{ObjectSchema, SecurityScheme};
use airtable_oas_common::{SchemaFragment, TableDefinition};
use airtable_oas_parser::ATTACHMENT_SCHEMA;
use indexmap::IndexMap;

pub const THUMBNAIL_SCHEMA: &str = "AirtableThumbnail";
pub const THUMBNAILS_SCHEMA: &str = "AirtableThumbnails";
pub const DELETED_SCHEMA: &str = "AirtableDeleted";

/// Name of the bearer token security scheme
pub const BEARER_AUTH: &str = "BearerAuth";

/// Names of the five schemas registered for a table
///
/// `identifier` is the table identifier the names were built from; it also
/// prefixes the table's operation ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNames {
    pub identifier: String,
    pub read_fields: String,
    pub write_fields: String,
    pub read: String,
    pub read_request_body: String,
    pub write_request_body: String,
}

impl SchemaNames {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            read_fields: format!("Read{}Fields", identifier),
            write_fields: format!("Write{}Fields", identifier),
            read: format!("Read{}", identifier),
            read_request_body: format!("Read{}RequestBody", identifier),
            write_request_body: format!("Write{}RequestBody", identifier),
        }
    }

    fn all(&self) -> [&str; 5] {
        [
            self.read_fields.as_str(),
            self.write_fields.as_str(),
            self.read.as_str(),
            self.read_request_body.as_str(),
            self.write_request_body.as_str(),
        ]
    }
}

/// Schemas every document starts with
pub fn shared_schemas() -> IndexMap<String, ObjectSchema> {
    let thumbnail = ObjectSchema::with_properties([
        ("url", SchemaFragment::string()),
        ("width", SchemaFragment::integer()),
        ("height", SchemaFragment::integer()),
    ])
    .require(&["url", "width", "height"]);

    let thumbnails = ObjectSchema::with_properties([
        ("large", SchemaFragment::component_ref(THUMBNAIL_SCHEMA)),
        ("small", SchemaFragment::component_ref(THUMBNAIL_SCHEMA)),
    ])
    .require(&["large", "small"]);

    let attachment = ObjectSchema::with_properties([
        ("id", SchemaFragment::string()),
        ("size", SchemaFragment::integer()),
        ("url", SchemaFragment::string()),
        ("type", SchemaFragment::string()),
        ("filename", SchemaFragment::string()),
        ("thumbnails", SchemaFragment::component_ref(THUMBNAILS_SCHEMA)),
    ])
    .require(&["id", "size", "url", "type", "filename"]);

    let deleted = ObjectSchema::with_properties([
        ("id", SchemaFragment::string()),
        ("deleted", SchemaFragment::boolean()),
    ])
    .require(&["id", "deleted"]);

    IndexMap::from([
        (THUMBNAIL_SCHEMA.to_string(), thumbnail),
        (THUMBNAILS_SCHEMA.to_string(), thumbnails),
        (ATTACHMENT_SCHEMA.to_string(), attachment),
        (DELETED_SCHEMA.to_string(), deleted),
    ])
}

/// Security schemes every document declares
pub fn security_schemes() -> IndexMap<String, SecurityScheme> {
    IndexMap::from([(
        BEARER_AUTH.to_string(),
        SecurityScheme {
            scheme_type: "http".to_string(),
            scheme: "bearer".to_string(),
        },
    )])
}

/// First names for `identifier` that are all still free
///
/// Tried in order: `identifier`, `identifier2`, `identifier3`, ...
fn free_names(schemas: &IndexMap<String, ObjectSchema>, identifier: &str) -> SchemaNames {
    let mut names = SchemaNames::new(identifier);
    let mut suffix = 2;
    while names.all().iter().any(|name| schemas.contains_key(*name)) {
        names = SchemaNames::new(&format!("{}{}", identifier, suffix));
        suffix += 1;
    }
    names
}

/// Register the five record schemas of a table
///
/// If any of the names derived from the table identifier is already taken
/// (two tables sanitizing alike, or `A` next to `ARequestBody`), the
/// identifier gets a numeric suffix so no schema is overwritten.
pub fn register_table_schemas(
    schemas: &mut IndexMap<String, ObjectSchema>,
    table: &TableDefinition,
) -> SchemaNames {
    let names = free_names(schemas, &table.identifier);

    let read_fields = ObjectSchema::with_properties(
        table
            .fields
            .iter()
            .map(|field| (field.name.as_str(), field.schema.clone())),
    );
    let write_fields = ObjectSchema::with_properties(
        table
            .writable_fields()
            .map(|field| (field.name.as_str(), field.schema.clone())),
    );
    let read = ObjectSchema::with_properties([
        ("id", SchemaFragment::string()),
        ("createdTime", SchemaFragment::string()),
        ("fields", SchemaFragment::component_ref(&names.read_fields)),
    ]);
    let read_request_body = ObjectSchema::with_properties([(
        "fields",
        SchemaFragment::component_ref(&names.read_fields),
    )]);
    let write_request_body = ObjectSchema::with_properties([(
        "fields",
        SchemaFragment::component_ref(&names.write_fields),
    )]);

    schemas.insert(names.read_fields.clone(), read_fields);
    schemas.insert(names.write_fields.clone(), write_fields);
    schemas.insert(names.read.clone(), read);
    schemas.insert(names.read_request_body.clone(), read_request_body);
    schemas.insert(names.write_request_body.clone(), write_request_body);

    names
}
