//! Airtable base schema parser
//!
//! Parses the schema description of an Airtable base (the object Airtable's
//! web application keeps in memory, or a JSON export of it) into the
//! `BaseDefinition` IR.
//!
//! ## Schema shape
//! ```json
//! {
//!   "id": "appXXXXXXXXXXXXXX",
//!   "name": "Project Tracker",
//!   "tables": [
//!     {
//!       "name": "Tasks",
//!       "fields": [
//!         { "name": "Done", "type": "checkbox" },
//!         { "name": "Estimate", "type": "number", "typeOptions": { "format": "integer" } }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use airtable_oas_parser::airtable::AirtableParser;
//!
//! let parser = AirtableParser::from_file("base-schema.json")?;
//! let base_def = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use converter::{convert_schema, sanitize_identifier};
pub use parser::AirtableParser;
pub use types::*;
