//! Type resolution from Airtable columns to OpenAPI schema fragments
//!
//! A [`Column`] is first classified into a [`ColumnType`], a closed sum type
//! carrying only the options valid for that column type. Classification fails
//! for unknown type tags and unsatisfiable options; resolution then maps the
//! classified type to a [`SchemaFragment`], recursing through `lookup`,
//! `formula` and `rollup` indirections.
//!
//! Every recursion step either reaches a non-indirect type or is rejected:
//! formula/rollup cannot wrap formula/rollup, lookups cannot wrap lookups,
//! and a number that delegates to its `result` does so with its format cleared.

use crate::airtable::{Column, TypeOptions};
use airtable_oas_common::{ColumnError, SchemaFragment};

/// Placeholder used in error messages for options that are absent
const MISSING: &str = "<missing>";

/// Schema name of the shared attachment component
pub const ATTACHMENT_SCHEMA: &str = "AirtableAttachment";

/// Classified Airtable column type
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
    Currency,
    Percent,
    Number(NumberFormat),
    MultipleLookupValues,
    MultipleRecordLinks,
    ForeignKey(Relationship),
    Count,
    AutoNumber,
    MultilineText,
    Text,
    RichText,
    Date,
    DateTime,
    Phone,
    Enum,
    Select,
    SingleSelect,
    SingleLineText,
    CreatedTime,
    LastModifiedTime,
    Url,
    MultipleAttachments,
    MultiSelect,
    Checkbox,
    MultipleAttachment,
    Attachment,
    Lookup(NestedResult),
    Formula(NestedResult),
    Rollup(NestedResult),
}

/// Format of a `number` column
#[derive(Debug, Clone, PartialEq)]
pub enum NumberFormat {
    Integer,
    Duration,
    Decimal,
    Currency,
    Percent,
    /// No `format` key
    Unspecified,
    /// `format` present but empty; the type comes from `result`
    Derived(NestedResult),
}

/// Cardinality of a `foreignKey` column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    One,
    Many,
}

/// The column type an indirection resolves through, plus the options the
/// synthetic column is built with
#[derive(Debug, Clone, PartialEq)]
pub struct NestedResult {
    pub result_type: String,
    pub options: TypeOptions,
}

impl NestedResult {
    fn new(result_type: &str, options: &TypeOptions) -> Self {
        Self {
            result_type: result_type.to_string(),
            options: options.clone(),
        }
    }

    /// Synthetic column standing in for the indirection target
    fn to_column(&self, name: &str) -> Column {
        Column::new(name, self.result_type.as_str()).with_type_options(self.options.clone())
    }
}

impl ColumnType {
    /// Classify a column by its type tag and options
    ///
    /// # Examples
    /// ```
    /// use airtable_oas_parser::airtable::Column;
    /// use airtable_oas_parser::{ColumnType, NumberFormat};
    ///
    /// let column = Column::new("Done", "checkbox");
    /// assert_eq!(ColumnType::from_column(&column).unwrap(), ColumnType::Checkbox);
    ///
    /// let column = Column::new("Score", "number");
    /// assert_eq!(
    ///     ColumnType::from_column(&column).unwrap(),
    ///     ColumnType::Number(NumberFormat::Unspecified)
    /// );
    /// ```
    pub fn from_column(column: &Column) -> Result<Self, ColumnError> {
        let column_type = match column.type_tag.as_str() {
            "currency" => ColumnType::Currency,
            "percent" => ColumnType::Percent,
            "number" => ColumnType::Number(NumberFormat::from_column(column)?),
            "multipleLookupValues" => ColumnType::MultipleLookupValues,
            "multipleRecordLinks" => ColumnType::MultipleRecordLinks,
            "foreignKey" => ColumnType::ForeignKey(Relationship::from_column(column)?),
            "count" => ColumnType::Count,
            "autoNumber" => ColumnType::AutoNumber,
            "multilineText" => ColumnType::MultilineText,
            "text" => ColumnType::Text,
            "richText" => ColumnType::RichText,
            "date" => ColumnType::Date,
            "dateTime" => ColumnType::DateTime,
            "phone" => ColumnType::Phone,
            "enum" => ColumnType::Enum,
            "select" => ColumnType::Select,
            "singleSelect" => ColumnType::SingleSelect,
            "singleLineText" => ColumnType::SingleLineText,
            "createdTime" => ColumnType::CreatedTime,
            "lastModifiedTime" => ColumnType::LastModifiedTime,
            "url" => ColumnType::Url,
            "multipleAttachments" => ColumnType::MultipleAttachments,
            "multiSelect" => ColumnType::MultiSelect,
            "checkbox" => ColumnType::Checkbox,
            "multipleAttachment" => ColumnType::MultipleAttachment,
            "attachment" => ColumnType::Attachment,
            "lookup" => ColumnType::Lookup(lookup_result(column)?),
            "formula" => ColumnType::Formula(computed_result(column)?),
            "rollup" => ColumnType::Rollup(computed_result(column)?),
            other => {
                return Err(ColumnError::UnknownColumnType {
                    column: column.name.clone(),
                    type_tag: other.to_string(),
                })
            }
        };

        Ok(column_type)
    }

    /// Resolve the classified type to a schema fragment
    ///
    /// `column` is the name reported in errors.
    pub fn resolve(&self, column: &str) -> Result<SchemaFragment, ColumnError> {
        let fragment = match self {
            ColumnType::Currency | ColumnType::Percent => SchemaFragment::number(),
            ColumnType::Number(format) => return format.resolve(column),
            ColumnType::Count | ColumnType::AutoNumber => SchemaFragment::integer(),
            ColumnType::MultilineText
            | ColumnType::Text
            | ColumnType::RichText
            | ColumnType::Date
            | ColumnType::DateTime
            | ColumnType::Phone
            | ColumnType::Enum
            | ColumnType::Select
            | ColumnType::SingleSelect
            | ColumnType::SingleLineText
            | ColumnType::CreatedTime
            | ColumnType::LastModifiedTime
            | ColumnType::Url => SchemaFragment::string(),
            ColumnType::Checkbox => SchemaFragment::boolean(),
            ColumnType::MultipleLookupValues
            | ColumnType::MultipleRecordLinks
            | ColumnType::MultipleAttachments
            | ColumnType::MultiSelect => SchemaFragment::array_of(SchemaFragment::string()),
            // Both cardinalities are linked record id lists
            ColumnType::ForeignKey(Relationship::One | Relationship::Many) => {
                SchemaFragment::array_of(SchemaFragment::string())
            }
            ColumnType::Attachment => SchemaFragment::component_ref(ATTACHMENT_SCHEMA),
            ColumnType::MultipleAttachment => {
                SchemaFragment::array_of(SchemaFragment::component_ref(ATTACHMENT_SCHEMA))
            }
            ColumnType::Lookup(nested) => return resolve_lookup(column, nested),
            ColumnType::Formula(nested) | ColumnType::Rollup(nested) => {
                return resolve_computed(column, nested)
            }
        };

        Ok(fragment)
    }
}

impl NumberFormat {
    fn from_column(column: &Column) -> Result<Self, ColumnError> {
        let Some(options) = column.type_options.as_ref() else {
            return Ok(NumberFormat::Unspecified);
        };

        match &options.format {
            None => Ok(NumberFormat::Unspecified),
            Some(Some(format)) if !format.is_empty() => match format.as_str() {
                "integer" => Ok(NumberFormat::Integer),
                "duration" => Ok(NumberFormat::Duration),
                "decimal" => Ok(NumberFormat::Decimal),
                "currency" => Ok(NumberFormat::Currency),
                "percent" => Ok(NumberFormat::Percent),
                other => Err(ColumnError::UnresolvableNumberFormat {
                    column: column.name.clone(),
                    format: other.to_string(),
                }),
            },
            Some(_) => match options.result.as_ref() {
                Some(result) => {
                    let cleared = TypeOptions {
                        format: None,
                        ..options.clone()
                    };
                    Ok(NumberFormat::Derived(NestedResult::new(
                        &result.type_tag,
                        &cleared,
                    )))
                }
                None => Err(ColumnError::UnresolvableNumberFormat {
                    column: column.name.clone(),
                    format: MISSING.to_string(),
                }),
            },
        }
    }

    fn resolve(&self, column: &str) -> Result<SchemaFragment, ColumnError> {
        match self {
            NumberFormat::Integer | NumberFormat::Duration => Ok(SchemaFragment::integer()),
            NumberFormat::Decimal
            | NumberFormat::Currency
            | NumberFormat::Percent
            | NumberFormat::Unspecified => Ok(SchemaFragment::number()),
            NumberFormat::Derived(nested) => resolve_computed(column, nested),
        }
    }
}

impl Relationship {
    fn from_column(column: &Column) -> Result<Self, ColumnError> {
        let relationship = column
            .type_options
            .as_ref()
            .and_then(|options| options.relationship.as_deref());

        match relationship {
            Some("one") => Ok(Relationship::One),
            Some("many") => Ok(Relationship::Many),
            other => Err(ColumnError::UnresolvableRelationship {
                column: column.name.clone(),
                relationship: other.unwrap_or(MISSING).to_string(),
            }),
        }
    }
}

/// `typeOptions.resultType` of a lookup column
///
/// A lookup without one has no type at all, so it is reported as unknown.
fn lookup_result(column: &Column) -> Result<NestedResult, ColumnError> {
    column
        .type_options
        .as_ref()
        .and_then(|options| {
            options
                .result_type
                .as_deref()
                .map(|result_type| NestedResult::new(result_type, options))
        })
        .ok_or_else(|| ColumnError::UnknownColumnType {
            column: column.name.clone(),
            type_tag: MISSING.to_string(),
        })
}

/// Nested result of a formula/rollup column
///
/// Accepted shapes, in order: `options.result.type`, `typeOptions.result.type`,
/// `typeOptions.resultType`. The options object the type was found in is
/// forwarded to the synthetic column.
fn computed_result(column: &Column) -> Result<NestedResult, ColumnError> {
    if let Some(options) = column.options.as_ref() {
        if let Some(result) = options.result.as_ref() {
            return Ok(NestedResult::new(&result.type_tag, options));
        }
    }

    if let Some(options) = column.type_options.as_ref() {
        if let Some(result) = options.result.as_ref() {
            return Ok(NestedResult::new(&result.type_tag, options));
        }
        if let Some(result_type) = options.result_type.as_deref() {
            return Ok(NestedResult::new(result_type, options));
        }
    }

    Err(ColumnError::UnknownColumnType {
        column: column.name.clone(),
        type_tag: column.type_tag.clone(),
    })
}

fn resolve_lookup(column: &str, nested: &NestedResult) -> Result<SchemaFragment, ColumnError> {
    let unsupported = || ColumnError::UnsupportedLookupResult {
        column: column.to_string(),
        result_type: nested.result_type.clone(),
    };

    match nested.result_type.as_str() {
        "foreignKey" => return Ok(SchemaFragment::array_of(SchemaFragment::string())),
        "multipleAttachment" | "attachment" | "formula" | "rollup" | "lookup" => {
            return Err(unsupported())
        }
        _ => {}
    }

    let resolved = resolve_column_type(&nested.to_column(column))?;
    resolved
        .scalar_type()
        .map(|scalar| SchemaFragment::array_of(SchemaFragment::Scalar(scalar)))
        .ok_or_else(unsupported)
}

fn resolve_computed(column: &str, nested: &NestedResult) -> Result<SchemaFragment, ColumnError> {
    if matches!(nested.result_type.as_str(), "formula" | "rollup") {
        return Err(ColumnError::InvalidIndirection {
            column: column.to_string(),
            result_type: nested.result_type.clone(),
        });
    }

    resolve_column_type(&nested.to_column(column))
}

/// Resolve a column to its OpenAPI schema fragment
///
/// # Examples
/// ```
/// use airtable_oas_common::SchemaFragment;
/// use airtable_oas_parser::airtable::Column;
/// use airtable_oas_parser::resolve_column_type;
///
/// let column = Column::new("Tags", "multiSelect");
/// assert_eq!(
///     resolve_column_type(&column).unwrap(),
///     SchemaFragment::array_of(SchemaFragment::string())
/// );
/// ```
pub fn resolve_column_type(column: &Column) -> Result<SchemaFragment, ColumnError> {
    ColumnType::from_column(column)?.resolve(&column.name)
}

/// Check if a column type tag denotes a server-computed (read-only) column
pub fn is_read_only_type(type_tag: &str) -> bool {
    // TODO: attachments become writable once upload URLs are modelled
    matches!(
        type_tag,
        "rollup"
            | "lookup"
            | "formula"
            | "count"
            | "autoNumber"
            | "attachment"
            | "multipleAttachment"
    )
}

/// Check if a column is read-only; depends on the type tag alone
pub fn is_read_only(column: &Column) -> bool {
    is_read_only_type(&column.type_tag)
}
