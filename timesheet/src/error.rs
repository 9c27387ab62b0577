use thiserror::Error;

use crate::domain::PeriodKind;

/// Errors that can occur when feeding data into the timesheet engine.
///
/// Well-formed input never produces an error; these cover malformed server
/// data and call patterns the engine refuses to guess at.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("invalid date key: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateKey(String),
    #[error("entry {id} has {minutes} minutes, expected 0-59")]
    InvalidMinutes { id: String, minutes: u32 },
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: String, end: String },
    #[error("copying the previous period is not supported for {0} periods")]
    ReplicationUnsupported(PeriodKind),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
