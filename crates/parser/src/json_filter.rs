//! Generic JSON tree filtering

use serde_json::{Map, Value};

/// Key under which linked-record columns embed their whole foreign table
pub const FOREIGN_TABLE_KEY: &str = "foreignTable";

/// Return a copy of `value` with every object entry named `key` removed,
/// at any depth
///
/// # Examples
/// ```
/// use airtable_oas_parser::omit_key;
/// use serde_json::json;
///
/// let value = json!({"a": 1, "b": {"a": 2, "c": [{"a": 3, "d": 4}]}});
/// assert_eq!(omit_key(&value, "a"), json!({"b": {"c": [{"d": 4}]}}));
/// ```
pub fn omit_key(value: &Value, key: &str) -> Value {
    match value {
        Value::Object(object) => Value::Object(
            object
                .iter()
                .filter(|(name, _)| name.as_str() != key)
                .map(|(name, child)| (name.clone(), omit_key(child, key)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(|item| omit_key(item, key)).collect()),
        scalar => scalar.clone(),
    }
}

/// Strip embedded foreign tables from a raw Airtable schema
///
/// Live application state links tables to each other, so a raw export
/// would otherwise repeat (or, when serialized from the page, recurse into)
/// whole tables under every linked-record column.
pub fn remove_foreign_tables(schema: &Value) -> Value {
    omit_key(schema, FOREIGN_TABLE_KEY)
}
