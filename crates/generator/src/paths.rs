//! CRUD path synthesis for a table
//!
//! Each table gets a collection path (`/{table}`: list, create) and an item
//! path (`/{table}/{id}`: retrieve, update, delete). The raw table name is
//! used in paths; the registered schema identifier in operation ids.

use crate::components::{SchemaNames, BEARER_AUTH, DELETED_SCHEMA};
use crate::openapi::{
    MediaType, Operation, Parameter, ParameterLocation, PathItem, RequestBody, Response,
    SecurityRequirement,
};
use crate::options::UpdateMethod;
use airtable_oas_common::{SchemaFragment, TableDefinition};
use indexmap::IndexMap;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Optional query parameters of the list operation
const LIST_QUERY_PARAMETERS: &[(&str, ListParameterKind)] = &[
    ("fields[]", ListParameterKind::StringArray),
    ("filterByFormula", ListParameterKind::String),
    ("maxRecords", ListParameterKind::Integer),
    ("pageSize", ListParameterKind::Integer),
    ("offset", ListParameterKind::String),
    ("view", ListParameterKind::String),
    ("cellFormat", ListParameterKind::String),
    ("userLocale", ListParameterKind::String),
];

#[derive(Clone, Copy)]
enum ListParameterKind {
    String,
    Integer,
    StringArray,
}

impl ListParameterKind {
    fn schema(self) -> SchemaFragment {
        match self {
            ListParameterKind::String => SchemaFragment::string(),
            ListParameterKind::Integer => SchemaFragment::integer(),
            ListParameterKind::StringArray => SchemaFragment::array_of(SchemaFragment::string()),
        }
    }
}

/// `/{table}` with list and create operations
pub fn collection_path(table: &TableDefinition, names: &SchemaNames) -> (String, PathItem) {
    let list = Operation {
        operation_id: format!("list{}", names.identifier),
        security: bearer_security(),
        parameters: LIST_QUERY_PARAMETERS
            .iter()
            .map(|(name, kind)| Parameter {
                name: name.to_string(),
                location: ParameterLocation::Query,
                required: false,
                schema: kind.schema(),
            })
            .collect(),
        request_body: None,
        responses: ok_response(
            "List Objects Response",
            SchemaFragment::array_of(SchemaFragment::component_ref(&names.read)),
        ),
    };

    let create = Operation {
        operation_id: format!("create{}", names.identifier),
        security: bearer_security(),
        parameters: Vec::new(),
        request_body: Some(json_request_body(&names.write_request_body)),
        responses: ok_response(
            "Create Object Response",
            SchemaFragment::component_ref(&names.read),
        ),
    };

    let item = PathItem {
        get: Some(list),
        post: Some(create),
        ..Default::default()
    };

    (format!("/{}", table.name), item)
}

/// `/{table}/{id}` with retrieve, update and delete operations
pub fn item_path(
    table: &TableDefinition,
    names: &SchemaNames,
    update_method: UpdateMethod,
) -> (String, PathItem) {
    let retrieve = Operation {
        operation_id: format!("retrieve{}", names.identifier),
        security: bearer_security(),
        parameters: vec![id_parameter()],
        request_body: None,
        responses: ok_response(
            "Retrieve Object Response",
            SchemaFragment::component_ref(&names.read),
        ),
    };

    let update = Operation {
        operation_id: format!("update{}", names.identifier),
        security: bearer_security(),
        parameters: vec![id_parameter()],
        request_body: Some(json_request_body(&names.write_request_body)),
        responses: ok_response(
            "Update Object Response",
            SchemaFragment::component_ref(&names.read),
        ),
    };

    let delete = Operation {
        operation_id: format!("delete{}", names.identifier),
        security: bearer_security(),
        parameters: vec![id_parameter()],
        request_body: None,
        responses: ok_response(
            "Delete Object Response",
            SchemaFragment::component_ref(DELETED_SCHEMA),
        ),
    };

    let mut item = PathItem {
        get: Some(retrieve),
        delete: Some(delete),
        ..Default::default()
    };
    match update_method {
        UpdateMethod::Patch => item.patch = Some(update),
        UpdateMethod::Put => item.put = Some(update),
    }

    (format!("/{}/{{id}}", table.name), item)
}

fn bearer_security() -> Vec<SecurityRequirement> {
    vec![IndexMap::from([(BEARER_AUTH.to_string(), Vec::new())])]
}

fn id_parameter() -> Parameter {
    Parameter {
        name: "id".to_string(),
        location: ParameterLocation::Path,
        required: true,
        schema: SchemaFragment::string(),
    }
}

fn json_content(schema: SchemaFragment) -> IndexMap<String, MediaType> {
    IndexMap::from([(JSON_CONTENT_TYPE.to_string(), MediaType { schema })])
}

fn json_request_body(schema_name: &str) -> RequestBody {
    RequestBody {
        required: true,
        content: json_content(SchemaFragment::component_ref(schema_name)),
    }
}

fn ok_response(description: &str, schema: SchemaFragment) -> IndexMap<String, Response> {
    IndexMap::from([(
        "200".to_string(),
        Response {
            description: description.to_string(),
            content: json_content(schema),
        },
    )])
}
