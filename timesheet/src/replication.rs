use crate::{
    domain::{CalendarDate, DateRange, Period, PeriodKind, ReplicationRequest},
    monday_on_or_before, TimesheetError,
};

/// Only weekly periods can be seeded from the previous period.
pub fn supports_replication(kind: PeriodKind) -> bool {
    matches!(kind, PeriodKind::Weekly)
}

/// Monday to Sunday of the week before the one containing
/// `current_week_anchor`.
pub fn previous_week_range(current_week_anchor: CalendarDate) -> DateRange {
    let start = monday_on_or_before(current_week_anchor).add_days(-7);
    DateRange::new_unchecked(start, start.add_days(6))
}

pub fn build_replication_request(range: DateRange) -> ReplicationRequest {
    ReplicationRequest::from(range)
}

/// Request for copying the previous week into `period`. Monthly periods are
/// refused so the caller can tell the user instead of copying.
pub fn replication_request_for(period: &Period) -> Result<ReplicationRequest, TimesheetError> {
    if !supports_replication(period.kind) {
        return Err(TimesheetError::ReplicationUnsupported(period.kind));
    }

    let range = previous_week_range(period.anchor);
    tracing::debug!(start = %range.start, end = %range.end, "built replication request");
    Ok(build_replication_request(range))
}
