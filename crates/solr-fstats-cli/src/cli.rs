//! CLI argument definitions for solr-fstats.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use solr_fstats_core::{DEFAULT_HOST, DEFAULT_PORT, FieldStrategy, OutputFormat};

/// Long options that may also be spelled with a single dash.
const LEGACY_FLAGS: [&str; 3] = ["core", "host", "port"];

#[derive(Parser)]
#[command(
    name = "solr-fstats",
    version,
    about = "returns field statistics of a Solr index; prints the output as pure CSV data \
             (all values are quoted) to stdout",
    long_about = "Returns field statistics of a Solr index.\n\n\
                  For every field the number and percentage of records with and without \
                  a value are printed as pure CSV data (all values are quoted) to stdout."
)]
pub struct Cli {
    /// Solr core to use.
    #[arg(long = "core", value_name = "CORE")]
    pub core: String,

    /// Hostname or IP address of the Solr instance to use.
    #[arg(long = "host", value_name = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port of the Solr instance to use.
    #[arg(long = "port", value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Which fields to report on.
    #[arg(long = "fields", value_enum, default_value = "observed")]
    pub fields: FieldsArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses the process arguments, accepting single-dash legacy flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// CLI field enumeration choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FieldsArg {
    /// Fields declared in the schema only.
    Schema,
    /// Schema fields plus fields found in stored documents.
    Observed,
}

impl From<FieldsArg> for FieldStrategy {
    fn from(arg: FieldsArg) -> Self {
        match arg {
            FieldsArg::Schema => Self::Schema,
            FieldsArg::Observed => Self::SchemaAndObserved,
        }
    }
}

/// CLI output format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Table,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Table => Self::Table,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Rewrites `-core`, `-host` and `-port` (optionally `=value`) to their
/// double-dash form. Everything after `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(legacy_long_form) {
                Some(long) => OsString::from(long),
                None => arg,
            }
        })
        .collect()
}

fn legacy_long_form(arg: &str) -> Option<String> {
    let flag = arg.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LEGACY_FLAGS.contains(&name).then(|| format!("-{arg}"))
}
