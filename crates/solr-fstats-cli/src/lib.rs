//! CLI library components for solr-fstats.

pub mod cli;
pub mod commands;
pub mod logging;
