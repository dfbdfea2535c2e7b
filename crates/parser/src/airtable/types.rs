//! Airtable schema type definitions
//!
//! Only the keys needed for type inference are modelled; everything else the
//! live application state carries is ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

/// Airtable base schema root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirtableSchema {
    /// Base identifier (e.g., "appXXXXXXXXXXXXXX")
    pub id: String,

    /// Base name
    pub name: String,

    /// Tables of the base
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// Table definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Columns
    #[serde(default)]
    pub fields: Vec<Column>,
}

/// Column (field) definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Airtable column type tag (e.g., "singleLineText", "lookup")
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Type specific options
    #[serde(rename = "typeOptions")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_options: Option<TypeOptions>,

    /// Options in the newer schema shape (formula/rollup `result`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TypeOptions>,
}

/// Options whose meaning depends on the column type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeOptions {
    /// Number format; `Some(None)` when the key is present but null
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Option<String>>,

    /// Link cardinality for `foreignKey` columns ("one" or "many")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,

    /// Result column type for `lookup` (and legacy formula/rollup) columns
    #[serde(rename = "resultType")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,

    /// Result descriptor for formula/rollup columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultDescriptor>,
}

/// Nested result descriptor (`{"type": "number", ...}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDescriptor {
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl Column {
    /// Create a column without options
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
            type_options: None,
            options: None,
        }
    }

    /// Set `typeOptions`
    pub fn with_type_options(mut self, type_options: TypeOptions) -> Self {
        self.type_options = Some(type_options);
        self
    }

    /// Set `options`
    pub fn with_options(mut self, options: TypeOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Distinguishes a present-but-null key from a missing one
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_missing_vs_null() {
        let missing: TypeOptions = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(missing.format, None);

        let null: TypeOptions = serde_json::from_str(r#"{"format": null}"#).unwrap();
        assert_eq!(null.format, Some(None));

        let set: TypeOptions = serde_json::from_str(r#"{"format": "integer"}"#).unwrap();
        assert_eq!(set.format, Some(Some("integer".to_string())));
    }

    #[test]
    fn test_column_ignores_unknown_keys() {
        let column: Column = serde_json::from_str(
            r#"{
                "id": "fldXXXXXXXXXXXXXX",
                "name": "Owner",
                "type": "foreignKey",
                "typeOptions": {
                    "relationship": "many",
                    "foreignTableId": "tblXXXXXXXXXXXXXX",
                    "symmetricColumnId": "fldYYYYYYYYYYYYYY"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(column.type_tag, "foreignKey");
        assert_eq!(
            column.type_options.and_then(|o| o.relationship),
            Some("many".to_string())
        );
    }

    #[test]
    fn test_result_descriptor() {
        let column: Column = serde_json::from_str(
            r#"{
                "name": "Total",
                "type": "formula",
                "options": { "result": { "type": "number", "options": { "precision": 2 } } }
            }"#,
        )
        .unwrap();

        let result = column.options.and_then(|o| o.result).unwrap();
        assert_eq!(result.type_tag, "number");
    }
}
