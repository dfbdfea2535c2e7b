//! Integration test for column type resolution

use airtable_oas_common::ColumnError;
use airtable_oas_parser::airtable::Column;
use airtable_oas_parser::{is_read_only, resolve_column_type};
use serde_json::{json, Value};

fn column(value: Value) -> Column {
    serde_json::from_value(value).unwrap()
}

fn resolve(value: Value) -> Value {
    let fragment = resolve_column_type(&column(value)).unwrap();
    serde_json::to_value(fragment).unwrap()
}

fn resolve_err(value: Value) -> ColumnError {
    resolve_column_type(&column(value)).unwrap_err()
}

#[test]
fn test_every_column_type() {
    let string = json!({"type": "string"});
    let string_array = json!({"type": "array", "items": {"type": "string"}});
    let attachment = json!({"$ref": "#/components/schemas/AirtableAttachment"});

    let cases = vec![
        (json!({"type": "currency"}), json!({"type": "number"})),
        (json!({"type": "percent"}), json!({"type": "number"})),
        (json!({"type": "number"}), json!({"type": "number"})),
        (json!({"type": "multipleLookupValues"}), string_array.clone()),
        (json!({"type": "multipleRecordLinks"}), string_array.clone()),
        (
            json!({"type": "foreignKey", "typeOptions": {"relationship": "many"}}),
            string_array.clone(),
        ),
        (json!({"type": "count"}), json!({"type": "integer"})),
        (json!({"type": "autoNumber"}), json!({"type": "integer"})),
        (json!({"type": "multilineText"}), string.clone()),
        (json!({"type": "text"}), string.clone()),
        (json!({"type": "richText"}), string.clone()),
        (json!({"type": "date"}), string.clone()),
        (json!({"type": "dateTime"}), string.clone()),
        (json!({"type": "phone"}), string.clone()),
        (json!({"type": "enum"}), string.clone()),
        (json!({"type": "select"}), string.clone()),
        (json!({"type": "singleSelect"}), string.clone()),
        (json!({"type": "singleLineText"}), string.clone()),
        (json!({"type": "createdTime"}), string.clone()),
        (json!({"type": "lastModifiedTime"}), string.clone()),
        (json!({"type": "url"}), string.clone()),
        (json!({"type": "multipleAttachments"}), string_array.clone()),
        (json!({"type": "multiSelect"}), string_array.clone()),
        (json!({"type": "checkbox"}), json!({"type": "boolean"})),
        (
            json!({"type": "multipleAttachment"}),
            json!({"type": "array", "items": attachment.clone()}),
        ),
        (json!({"type": "attachment"}), attachment.clone()),
        (
            json!({"type": "lookup", "typeOptions": {"resultType": "singleLineText"}}),
            string_array.clone(),
        ),
        (
            json!({"type": "formula", "options": {"result": {"type": "checkbox"}}}),
            json!({"type": "boolean"}),
        ),
        (
            json!({"type": "rollup", "options": {"result": {"type": "count"}}}),
            json!({"type": "integer"}),
        ),
    ];

    for (mut input, expected) in cases {
        input["name"] = json!("Field");
        let tag = input["type"].clone();
        assert_eq!(resolve(input), expected, "column type {}", tag);
    }
}

#[test]
fn test_resolution_is_pure() {
    let input = json!({
        "name": "Total",
        "type": "rollup",
        "options": {"result": {"type": "number"}, "format": "integer"}
    });

    assert_eq!(resolve(input.clone()), resolve(input));
}

#[test]
fn test_number_format_variants() {
    assert_eq!(
        resolve(json!({"name": "N", "type": "number"})),
        json!({"type": "number"})
    );
    assert_eq!(
        resolve(json!({"name": "N", "type": "number", "typeOptions": {"format": "integer"}})),
        json!({"type": "integer"})
    );
    assert_eq!(
        resolve_err(json!({"name": "N", "type": "number", "typeOptions": {"format": "bogus"}})),
        ColumnError::UnresolvableNumberFormat {
            column: "N".to_string(),
            format: "bogus".to_string(),
        }
    );
}

#[test]
fn test_lookup_wrapping_foreign_key() {
    assert_eq!(
        resolve(json!({
            "name": "Linked",
            "type": "lookup",
            "typeOptions": {"resultType": "foreignKey"}
        })),
        json!({"type": "array", "items": {"type": "string"}})
    );
}

#[test]
fn test_lookup_wrapping_number() {
    assert_eq!(
        resolve(json!({
            "name": "Estimates",
            "type": "lookup",
            "typeOptions": {"resultType": "number", "format": "duration"}
        })),
        json!({"type": "array", "items": {"type": "integer"}})
    );
}

#[test]
fn test_lookup_unsupported_results() {
    for result_type in ["multipleAttachment", "attachment", "formula", "rollup"] {
        let err = resolve_err(json!({
            "name": "Files",
            "type": "lookup",
            "typeOptions": {"resultType": result_type}
        }));
        assert_eq!(
            err,
            ColumnError::UnsupportedLookupResult {
                column: "Files".to_string(),
                result_type: result_type.to_string(),
            }
        );
    }
}

#[test]
fn test_formula_wrapping_integer_number() {
    assert_eq!(
        resolve(json!({
            "name": "Rounded",
            "type": "formula",
            "options": {"result": {"type": "number"}, "format": "integer"}
        })),
        json!({"type": "integer"})
    );
}

#[test]
fn test_formula_wrapping_formula() {
    let err = resolve_err(json!({
        "name": "Nested",
        "type": "formula",
        "options": {"result": {"type": "formula"}}
    }));
    assert_eq!(
        err,
        ColumnError::InvalidIndirection {
            column: "Nested".to_string(),
            result_type: "formula".to_string(),
        }
    );
}

#[test]
fn test_rollup_wrapping_rollup() {
    let err = resolve_err(json!({
        "name": "Nested",
        "type": "rollup",
        "typeOptions": {"resultType": "rollup"}
    }));
    assert!(matches!(err, ColumnError::InvalidIndirection { .. }));
}

#[test]
fn test_formula_wrapping_attachment() {
    assert_eq!(
        resolve(json!({
            "name": "Picture",
            "type": "formula",
            "options": {"result": {"type": "attachment"}}
        })),
        json!({"$ref": "#/components/schemas/AirtableAttachment"})
    );
}

#[test]
fn test_unknown_type() {
    let err = resolve_err(json!({"name": "Mystery", "type": "hologram"}));
    assert_eq!(
        err,
        ColumnError::UnknownColumnType {
            column: "Mystery".to_string(),
            type_tag: "hologram".to_string(),
        }
    );
    assert!(err.to_string().contains("Mystery"));
    assert!(err.to_string().contains("hologram"));
}

#[test]
fn test_read_only_ignores_options() {
    let bare = column(json!({"name": "Total", "type": "formula"}));
    let with_options = column(json!({
        "name": "Total",
        "type": "formula",
        "options": {"result": {"type": "number"}}
    }));
    assert!(is_read_only(&bare));
    assert!(is_read_only(&with_options));

    let text = column(json!({"name": "Notes", "type": "multilineText", "typeOptions": {}}));
    assert!(!is_read_only(&text));
}
