use serde::Serialize;

use crate::{
    domain::{CalendarDate, DateKey, Period, PeriodKind, TimeEntry, WorkedTime},
    paginate, EntryIndex, Page,
};

/// Worked time on a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTotal {
    pub date: CalendarDate,
    pub worked: WorkedTime,
}

/// Worked time over a whole period compared against the period's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodTotal {
    pub worked: WorkedTime,
    pub target: WorkedTime,
    pub met: bool,
}

impl PeriodTotal {
    /// Minutes still missing to reach the target, zero once met.
    pub fn remaining(&self) -> WorkedTime {
        WorkedTime::from_minutes(
            self.target
                .total_minutes()
                .saturating_sub(self.worked.total_minutes()),
        )
    }
}

/// Sum of all entries, summed in minutes and normalized.
pub fn day_total(entries: &[TimeEntry]) -> WorkedTime {
    entries.iter().map(TimeEntry::worked).sum()
}

pub fn day_totals(dates: &[CalendarDate], index: &EntryIndex) -> Vec<DayTotal> {
    dates
        .iter()
        .map(|&date| DayTotal {
            date,
            worked: day_total(index.entries_on(date)),
        })
        .collect()
}

pub fn period_total(period: &Period, index: &EntryIndex) -> PeriodTotal {
    period_total_for(period.kind, &period.dates(), index)
}

/// Total over `dates` (days without entries add nothing) against the fixed
/// target for `kind`.
pub fn period_total_for(kind: PeriodKind, dates: &[CalendarDate], index: &EntryIndex) -> PeriodTotal {
    let worked: WorkedTime = dates
        .iter()
        .map(|&date| day_total(index.entries_on(date)))
        .sum();
    let target = kind.target();

    tracing::debug!(%kind, %worked, %target, "computed period total");

    PeriodTotal {
        worked,
        target,
        met: worked.total_minutes() >= target.total_minutes(),
    }
}

/// Everything a calendar cell needs for one day of a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary<'a> {
    pub date: CalendarDate,
    pub key: DateKey,
    pub total: WorkedTime,
    pub page: Page<'a>,
}

impl DaySummary<'_> {
    pub fn entry_count(&self) -> usize {
        self.page.visible.len() + self.page.overflow.len()
    }

    pub fn has_unsubmitted(&self) -> bool {
        self.page
            .visible
            .iter()
            .chain(self.page.overflow)
            .any(|e| !e.is_submitted())
    }
}

/// Per-day summaries in period order, paginated at `limit` entries per day.
pub fn summarize_days<'a>(period: &Period, index: &'a EntryIndex, limit: usize) -> Vec<DaySummary<'a>> {
    period
        .dates()
        .into_iter()
        .map(|date| {
            let entries = index.entries_on(date);
            DaySummary {
                date,
                key: date.key(),
                total: day_total(entries),
                page: paginate(entries, limit),
            }
        })
        .collect()
}
