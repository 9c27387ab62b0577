use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::{CalendarDate, DateRange, WorkedTime};

/// The kind of window a timesheet is viewed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PeriodKind {
    Weekly,
    Monthly,
}

impl PeriodKind {
    /// Expected tracked time for a full period: 40h per week, 184h per month.
    pub fn target(&self) -> WorkedTime {
        match self {
            PeriodKind::Weekly => WorkedTime::from_minutes(40 * 60),
            PeriodKind::Monthly => WorkedTime::from_minutes(184 * 60),
        }
    }
}

/// Direction to move when navigating between periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// A viewing window anchored at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub kind: PeriodKind,
    pub anchor: CalendarDate,
}

impl Period {
    pub fn new(kind: PeriodKind, anchor: CalendarDate) -> Self {
        Self { kind, anchor }
    }

    pub fn weekly(anchor: CalendarDate) -> Self {
        Self::new(PeriodKind::Weekly, anchor)
    }

    pub fn monthly(anchor: CalendarDate) -> Self {
        Self::new(PeriodKind::Monthly, anchor)
    }

    /// Ordered calendar dates covered by this period.
    pub fn dates(&self) -> Vec<CalendarDate> {
        match self.kind {
            PeriodKind::Weekly => crate::week_range(self.anchor).to_vec(),
            PeriodKind::Monthly => crate::month_range(self.anchor),
        }
    }

    /// First and last date of the period.
    pub fn range(&self) -> DateRange {
        match self.kind {
            PeriodKind::Weekly => {
                let start = crate::monday_on_or_before(self.anchor);
                DateRange::new_unchecked(start, start.add_days(6))
            }
            PeriodKind::Monthly => {
                let days = crate::month_range(self.anchor);
                let start = days.first().copied().unwrap_or(self.anchor);
                let end = days.last().copied().unwrap_or(self.anchor);
                DateRange::new_unchecked(start, end)
            }
        }
    }

    pub fn navigate(&self, direction: Direction) -> Self {
        crate::navigate(*self, direction)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.range().contains(date)
    }
}
