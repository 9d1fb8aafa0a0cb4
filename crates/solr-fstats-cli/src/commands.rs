use std::io;

use anyhow::{Context, Result};
use solr_fstats_core::{
    FieldStatistic, OutputFormat, SolrClient, SolrConnection, StatsOptions, Transport, run,
    write_report,
};
use tracing::info;

use crate::cli::Cli;

/// Connection parameters from the parsed arguments.
pub fn connection_from_cli(cli: &Cli) -> SolrConnection {
    SolrConnection::new(cli.host.clone(), cli.port, cli.core.clone())
}

/// Run options from the parsed arguments.
pub fn options_from_cli(cli: &Cli) -> StatsOptions {
    StatsOptions {
        strategy: cli.fields.into(),
    }
}

/// Collects statistics over the network and prints them to stdout.
pub fn run_stats(cli: &Cli) -> Result<()> {
    let connection = connection_from_cli(cli);
    let client = SolrClient::connect(connection).context("create HTTP client")?;
    let stats = collect(&client, &options_from_cli(cli))?;
    emit(io::stdout().lock(), &stats, cli.format.into())
}

/// Runs the pipeline; nothing is printed unless every request succeeded.
pub fn collect<T: Transport>(
    client: &SolrClient<T>,
    options: &StatsOptions,
) -> Result<Vec<FieldStatistic>> {
    let stats = run(client, options)
        .with_context(|| format!("collect field statistics for {}", client.connection()))?;
    info!(rows = stats.len(), "field statistics collected");
    Ok(stats)
}

/// Writes the report.
pub fn emit<W: io::Write>(writer: W, stats: &[FieldStatistic], format: OutputFormat) -> Result<()> {
    write_report(writer, stats, format).context("write report")
}
