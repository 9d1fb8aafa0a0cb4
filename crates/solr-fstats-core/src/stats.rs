//! Record counting and per-field statistics.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info, info_span};

use crate::client::{SolrClient, Transport};
use crate::error::Result;
use crate::response::SelectResponse;

/// Column names of a statistics row, in output order.
pub const COLUMNS: [&str; 5] = [
    "field_name",
    "existing",
    "existing_percentage",
    "notexisting",
    "notexisting_percentage",
];

/// Share of records, in percent.
///
/// Always displayed with exactly two fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Computes `100 * part / total`.
    ///
    /// An empty index yields `0.00` rather than dividing by zero.
    #[must_use]
    pub fn of(part: u64, total: u64) -> Self {
        if total == 0 {
            return Self(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = part as f64 / total as f64;
        Self(ratio * 100.0)
    }

    /// Raw value in percent.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Coverage of a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStatistic {
    /// Field name.
    pub field_name: String,
    /// Records with a value for the field.
    pub existing: u64,
    /// `existing` as a share of all records.
    pub existing_percentage: Percentage,
    /// Records without a value for the field.
    pub notexisting: u64,
    /// `notexisting` as a share of all records.
    pub notexisting_percentage: Percentage,
}

impl FieldStatistic {
    /// Builds a statistic from raw counts.
    pub fn new(field_name: impl Into<String>, existing: u64, notexisting: u64, total: u64) -> Self {
        Self {
            field_name: field_name.into(),
            existing,
            existing_percentage: Percentage::of(existing, total),
            notexisting,
            notexisting_percentage: Percentage::of(notexisting, total),
        }
    }

    /// Row values in [`COLUMNS`] order.
    #[must_use]
    pub fn to_record(&self) -> [String; COLUMNS.len()] {
        [
            self.field_name.clone(),
            self.existing.to_string(),
            self.existing_percentage.to_string(),
            self.notexisting.to_string(),
            self.notexisting_percentage.to_string(),
        ]
    }

    /// Sum of both counts; equals the record total on a static index.
    #[must_use]
    pub fn counted(&self) -> u64 {
        self.existing + self.notexisting
    }
}

/// Total number of records in the core.
pub fn records_total<T: Transport>(client: &SolrClient<T>) -> Result<u64> {
    let url = client.connection().total_url()?;
    let response: SelectResponse = client.get_json(&url)?;
    Ok(response.response.num_found)
}

/// Number of records where `field` has (or, negated, lacks) a value.
pub fn field_total<T: Transport>(client: &SolrClient<T>, field: &str, negate: bool) -> Result<u64> {
    let url = client.connection().field_total_url(field, negate)?;
    let response: SelectResponse = client.get_json(&url)?;
    Ok(response.response.num_found)
}

/// Queries existing and missing counts for one field.
pub fn field_statistic<T: Transport>(
    client: &SolrClient<T>,
    field: &str,
    records_total: u64,
) -> Result<FieldStatistic> {
    let span = info_span!("field", name = %field);
    let _guard = span.enter();

    let existing = field_total(client, field, false)?;
    let notexisting = field_total(client, field, true)?;
    if existing + notexisting != records_total {
        debug!(
            existing,
            notexisting, records_total, "counts do not add up; index changed during run?"
        );
    }

    Ok(FieldStatistic::new(field, existing, notexisting, records_total))
}

/// Computes statistics for every field, in iteration order.
///
/// Stops at the first failed request.
pub fn field_statistics<T: Transport>(
    client: &SolrClient<T>,
    fields: &BTreeSet<String>,
    records_total: u64,
) -> Result<Vec<FieldStatistic>> {
    let stats = fields
        .iter()
        .map(|field| field_statistic(client, field, records_total))
        .collect::<Result<Vec<_>>>()?;
    info!(fields = stats.len(), "field statistics computed");
    Ok(stats)
}
