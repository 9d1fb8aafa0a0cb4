//! Field enumeration.
//!
//! The schema endpoint lists statically declared fields only. Fields created
//! through dynamic field patterns show up in the CSV header of a `select`
//! request instead, so [`FieldStrategy::SchemaAndObserved`] merges both.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::client::{SolrClient, Transport};
use crate::error::{FstatsError, Result};
use crate::response::SchemaResponse;

/// How the set of reported fields is discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStrategy {
    /// Only fields declared in the schema.
    Schema,
    /// Schema fields plus fields present in returned documents.
    #[default]
    SchemaAndObserved,
}

impl FieldStrategy {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::SchemaAndObserved => "schema+observed",
        }
    }
}

impl fmt::Display for FieldStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the sorted, deduplicated set of fields to report on.
pub fn enumerate_fields<T: Transport>(
    client: &SolrClient<T>,
    strategy: FieldStrategy,
) -> Result<BTreeSet<String>> {
    let mut fields = schema_fields(client)?;
    info!(count = fields.len(), "schema fields discovered");

    if strategy == FieldStrategy::SchemaAndObserved {
        let observed = observed_fields(client)?;
        let before = fields.len();
        fields.extend(observed);
        info!(
            added = fields.len() - before,
            "observed fields merged into schema fields"
        );
    }

    Ok(fields)
}

/// Fields declared in the core's schema.
pub fn schema_fields<T: Transport>(client: &SolrClient<T>) -> Result<BTreeSet<String>> {
    let url = client.connection().schema_url()?;
    let schema: SchemaResponse = client.get_json(&url)?;
    Ok(schema.field_names().map(str::to_owned).collect())
}

/// Fields named in the CSV header of an empty `select` result.
pub fn observed_fields<T: Transport>(client: &SolrClient<T>) -> Result<Vec<String>> {
    let url = client.connection().observed_fields_url()?;
    let body = client.get_text(&url)?;

    let lines: Vec<&str> = body.lines().filter(|line| !line.trim().is_empty()).collect();
    let [header] = lines.as_slice() else {
        return Err(FstatsError::MalformedFieldListResponse {
            url: url.to_string(),
            lines: lines.len(),
            body,
        });
    };

    let fields = parse_field_list(header)?;
    debug!(count = fields.len(), "observed fields");
    Ok(fields)
}

/// Parses one comma-separated header line, honoring quotes.
fn parse_field_list(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(line.as_bytes());

    let mut fields = Vec::new();
    if let Some(record) = reader.records().next() {
        fields.extend(
            record?
                .iter()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned),
        );
    }
    Ok(fields)
}
