//! Field coverage statistics for Solr cores.
//!
//! For every field of a core this crate counts the records that carry a value
//! for the field and the records that do not, and reports both as counts and
//! percentages of the total record count.
//!
//! # Pipeline
//!
//! The steps run strictly in sequence and the first failed request aborts the
//! whole run:
//!
//! 1. [`enumerate_fields`] - schema fields, optionally merged with the fields
//!    observed in returned documents
//! 2. [`records_total`] - unfiltered record count
//! 3. [`field_statistics`] - one present and one absent query per field
//! 4. [`write_report`] - CSV (or table) output, sorted by field name
//!
//! # Example
//!
//! ```no_run
//! use solr_fstats_core::{OutputFormat, SolrClient, SolrConnection, StatsOptions, run, write_report};
//!
//! fn main() -> solr_fstats_core::Result<()> {
//!     let client = SolrClient::connect(SolrConnection::local("books"))?;
//!     let stats = run(&client, &StatsOptions::default())?;
//!     write_report(std::io::stdout().lock(), &stats, OutputFormat::Csv)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod connection;
pub mod error;
pub mod fields;
pub mod report;
pub mod response;
pub mod stats;

pub use client::{HttpTransport, RawResponse, SolrClient, Transport};
pub use connection::{DEFAULT_HOST, DEFAULT_PORT, SolrConnection};
pub use error::{FstatsError, Result};
pub use fields::{FieldStrategy, enumerate_fields};
pub use report::{OutputFormat, write_csv, write_report, write_table};
pub use stats::{COLUMNS, FieldStatistic, Percentage, field_statistics, records_total};

pub use reqwest::{StatusCode, Url};

use tracing::{info, info_span};

/// Options controlling a statistics run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// How the reported fields are discovered.
    pub strategy: FieldStrategy,
}

/// Collects statistics for every field of the client's core.
///
/// Returns rows sorted by field name. Nothing is returned on partial failure.
pub fn run<T: Transport>(client: &SolrClient<T>, options: &StatsOptions) -> Result<Vec<FieldStatistic>> {
    let span = info_span!("core", core = %client.connection().core);
    let _guard = span.enter();

    let fields = enumerate_fields(client, options.strategy)?;
    let total = records_total(client)?;
    info!(fields = fields.len(), total, strategy = %options.strategy, "starting field statistics");

    field_statistics(client, &fields, total)
}
