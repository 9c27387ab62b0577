use std::io;

use serde::Serialize;

use crate::{
    domain::{DateKey, Period},
    EntryIndex, TimesheetError,
};

const HEADER: [&str; 6] = ["Date", "Task", "Hours", "Minutes", "Description", "Project"];

/// One line of a timesheet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub date: DateKey,
    pub task: String,
    pub hours: u32,
    pub minutes: u32,
    pub description: String,
    pub project: Option<String>,
}

/// Rows for every entry of the period, in the period's date order.
pub fn export_rows(period: &Period, index: &EntryIndex) -> Vec<ExportRow> {
    period
        .dates()
        .into_iter()
        .flat_map(|date| index.entries_on(date))
        .map(|entry| ExportRow {
            date: entry.key(),
            task: entry.task_type.clone(),
            hours: entry.hours,
            minutes: entry.minutes,
            description: entry.description.clone(),
            project: entry.project.as_ref().map(|p| p.name.clone()),
        })
        .collect()
}

/// Write `rows` as CSV, header first. The header is written even when there
/// are no rows.
pub fn write_csv<W: io::Write>(rows: &[ExportRow], writer: W) -> Result<(), TimesheetError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    tracing::debug!(rows = rows.len(), "wrote csv export");
    Ok(())
}
