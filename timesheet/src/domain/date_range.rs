use serde::Serialize;

use super::{CalendarDate, DateKey};
use crate::TimesheetError;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, TimesheetError> {
        if start > end {
            return Err(TimesheetError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self { start, end })
    }

    pub(crate) fn new_unchecked(start: CalendarDate, end: CalendarDate) -> Self {
        debug_assert!(start <= end, "range start {start} is after end {end}");
        Self { start, end }
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the range, ascending.
    pub fn dates(&self) -> Vec<CalendarDate> {
        let mut dates = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            dates.push(current);
            current = current.add_days(1);
        }
        dates
    }

    pub fn start_key(&self) -> DateKey {
        self.start.key()
    }

    pub fn end_key(&self) -> DateKey {
        self.end.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn rejects_reversed_range() {
        let a = CalendarDate::new(date!(2025 - 06 - 02));
        let b = CalendarDate::new(date!(2025 - 06 - 08));
        assert!(DateRange::new(a, b).is_ok());
        assert!(DateRange::new(a, a).is_ok());
        assert!(matches!(
            DateRange::new(b, a),
            Err(TimesheetError::InvalidRange { .. })
        ));
    }

    #[test]
    fn dates_are_inclusive() {
        let range = DateRange::new(
            CalendarDate::new(date!(2024 - 02 - 27)),
            CalendarDate::new(date!(2024 - 03 - 01)),
        )
        .unwrap();
        let keys: Vec<String> = range.dates().iter().map(|d| d.to_string()).collect();
        assert_eq!(
            keys,
            vec!["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01"]
        );
    }
}
