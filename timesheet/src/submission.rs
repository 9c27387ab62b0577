use crate::{
    domain::{CalendarDate, Period, SubmitPeriodRequest},
    EntryIndex,
};

/// Whether any entry on any of `dates` is still unsubmitted. This decides if
/// the bulk "submit timesheet" action is enabled.
///
/// The gate only reads the index. Submitted flags change when the caller
/// refetches the period after a successful submit and rebuilds the index
/// with [`EntryIndex::replace_range`]; a failed submit leaves every flag as
/// it was.
pub fn has_unsubmitted(dates: &[CalendarDate], index: &EntryIndex) -> bool {
    dates
        .iter()
        .flat_map(|&date| index.entries_on(date))
        .any(|entry| !entry.is_submitted())
}

/// The submit action is offered for a period only while it has something
/// left to submit.
pub fn submission_request(period: &Period, index: &EntryIndex) -> Option<SubmitPeriodRequest> {
    if has_unsubmitted(&period.dates(), index) {
        Some(SubmitPeriodRequest::for_period(period))
    } else {
        tracing::debug!(anchor = %period.anchor, "nothing to submit in period");
        None
    }
}
