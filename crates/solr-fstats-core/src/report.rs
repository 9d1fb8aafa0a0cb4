//! Report output.

use std::io::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::error::Result;
use crate::stats::{COLUMNS, FieldStatistic};

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fully quoted CSV.
    #[default]
    Csv,
    /// Human-readable table.
    Table,
}

/// Writes the report in the requested format.
pub fn write_report<W: Write>(
    writer: W,
    stats: &[FieldStatistic],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(writer, stats),
        OutputFormat::Table => write_table(writer, stats),
    }
}

/// Writes a header row and one fully quoted row per statistic.
///
/// Rows keep the order of `stats`. Lines end with the platform terminator.
pub fn write_csv<W: Write>(writer: W, stats: &[FieldStatistic]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(line_terminator())
        .from_writer(writer);

    writer.write_record(COLUMNS)?;
    for stat in stats {
        writer.write_record(stat.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the statistics as a table.
pub fn write_table<W: Write>(mut writer: W, stats: &[FieldStatistic]) -> Result<()> {
    let mut table = Table::new();
    table.set_header(COLUMNS.iter().map(|name| header_cell(name)));
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for index in 1..COLUMNS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for stat in stats {
        table.add_row(stat.to_record());
    }
    writeln!(writer, "{table}")?;
    writer.flush()?;
    Ok(())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

#[cfg(windows)]
fn line_terminator() -> csv::Terminator {
    csv::Terminator::CRLF
}

#[cfg(not(windows))]
fn line_terminator() -> csv::Terminator {
    csv::Terminator::Any(b'\n')
}
