//! OpenAPI 3.0 document model
//!
//! Only the subset emitted for Airtable bases is modelled. Maps are
//! insertion-ordered so documents follow table and column order.

use airtable_oas_common::SchemaFragment;
use indexmap::IndexMap;
use serde::Serialize;

/// `{"BearerAuth": []}` style security requirement
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenApiDocument {
    /// OpenAPI version ("3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Servers
    pub servers: Vec<Server>,

    /// Reusable components
    pub components: Components,

    /// API paths (endpoints)
    pub paths: IndexMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// Server information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub url: String,
}

/// Reusable components
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Components {
    /// Schemas
    pub schemas: IndexMap<String, ObjectSchema>,

    /// Security schemes
    #[serde(rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// Object schema with named properties
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectSchema {
    /// Required properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Properties
    pub properties: IndexMap<String, SchemaFragment>,
}

/// Security scheme definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityScheme {
    /// Scheme type (e.g., "http")
    #[serde(rename = "type")]
    pub scheme_type: String,

    /// HTTP authorization scheme (e.g., "bearer")
    pub scheme: String,
}

/// Path item (operations for a path)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

/// HTTP operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// Security requirements
    pub security: Vec<SecurityRequirement>,

    /// Parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

/// Parameter location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Path,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    pub required: bool,

    pub schema: SchemaFragment,
}

/// Request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    pub required: bool,

    /// Content types
    pub content: IndexMap<String, MediaType>,
}

/// Response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub description: String,

    /// Content types
    pub content: IndexMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaType {
    pub schema: SchemaFragment,
}

impl ObjectSchema {
    /// Object schema without required properties
    pub fn with_properties<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaFragment)>,
        K: Into<String>,
    {
        Self {
            required: Vec::new(),
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
        }
    }

    /// Mark properties as required
    pub fn require(mut self, names: &[&str]) -> Self {
        self.required = names.iter().map(|name| name.to_string()).collect();
        self
    }
}

impl OpenApiDocument {
    /// Get a component schema by name
    pub fn schema(&self, name: &str) -> Option<&ObjectSchema> {
        self.components.schemas.get(name)
    }
}
