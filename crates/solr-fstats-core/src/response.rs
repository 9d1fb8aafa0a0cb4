//! Solr response types.
//!
//! Only the keys the statistics need are mapped; anything else in the body is
//! ignored. A missing key fails the decode instead of being probed for.

use serde::Deserialize;

/// Body of `GET /solr/{core}/schema?wt=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaResponse {
    /// The schema definition.
    pub schema: Schema,
}

/// Schema definition of a core.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    /// Statically declared fields.
    pub fields: Vec<SchemaField>,
}

/// A declared schema field.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaField {
    /// Field name.
    pub name: String,
}

impl SchemaResponse {
    /// Returns the declared field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.schema.fields.iter().map(|field| field.name.as_str())
    }
}

/// Body of a `select` request with `wt=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectResponse {
    /// Result set header.
    pub response: ResultSet,
}

/// Result set of a `select` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    /// Total number of matching records, independent of `rows`.
    #[serde(rename = "numFound")]
    pub num_found: u64,
}
