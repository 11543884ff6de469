//! Result rendering for the menu.

use std::io::{self, Write};

use schedule_types::ScheduleItem;

use crate::config::OutputFormat;

/// Writes the column header row.
pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<10}{:<10}{:<10}{:<10}{:<6}{:<10}{:<10}{:<20}",
        "Subject",
        "Catalog",
        "Section",
        "Component",
        "Session",
        "Units",
        "TotEnrl",
        "CapEnrol",
        "Instructor"
    )
}

/// Writes one entry as a table row.
pub fn write_row<W: Write>(out: &mut W, item: &ScheduleItem) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:<10}{:<10}{:<10}{:<10}{:<6}{:<10}{:<10}{:<20}",
        item.subject,
        item.catalog,
        item.section,
        item.component,
        item.session,
        item.units,
        item.total_enrollment,
        item.capacity_enrollment,
        item.instructor
    )
}

/// Writes query results, or `not_found` when there are none.
///
/// A table always starts with the header row.
pub fn write_results<W: Write>(
    out: &mut W,
    items: &[&ScheduleItem],
    format: OutputFormat,
    not_found: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            write_header(out)?;
            for item in items {
                write_row(out, item)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, items)?;
            writeln!(out)?;
        }
    }

    if items.is_empty() {
        writeln!(out, "{}", not_found)?;
    }
    Ok(())
}
