//! Date lists for weekly and monthly timesheet periods.
//!
//! Weeks start on Monday. Every place that needs the start of a week goes
//! through [`monday_on_or_before`].

use time::Weekday;

use crate::domain::{CalendarDate, Direction, Period, PeriodKind};

/// The Monday starting the week that contains `date`.
pub fn monday_on_or_before(date: CalendarDate) -> CalendarDate {
    match date.weekday() {
        Weekday::Sunday => date.add_days(-6),
        weekday => date.add_days(-i64::from(weekday.number_days_from_monday())),
    }
}

/// The seven days, Monday to Sunday, of the week containing `anchor`.
pub fn week_range(anchor: CalendarDate) -> [CalendarDate; 7] {
    let monday = monday_on_or_before(anchor);
    std::array::from_fn(|offset| monday.add_days(offset as i64))
}

/// Every day of `anchor`'s month, from the 1st to the last day.
pub fn month_range(anchor: CalendarDate) -> Vec<CalendarDate> {
    let first = anchor.first_of_month();
    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == first.month() {
        days.push(current);
        current = current.add_days(1);
    }
    days
}

/// Move a period one step forward or backward.
///
/// Weekly periods shift their anchor by seven days. Monthly periods move to
/// the 1st of the neighbouring month, rolling the year over at December and
/// January.
pub fn navigate(period: Period, direction: Direction) -> Period {
    match period.kind {
        PeriodKind::Weekly => {
            let days = match direction {
                Direction::Next => 7,
                Direction::Prev => -7,
            };
            Period::weekly(period.anchor.add_days(days))
        }
        PeriodKind::Monthly => {
            let mut year = period.anchor.year();
            let mut month = i32::from(period.anchor.month()) - 1;
            match direction {
                Direction::Next => month += 1,
                Direction::Prev => month -= 1,
            }
            if month > 11 {
                month = 0;
                year += 1;
            } else if month < 0 {
                month = 11;
                year -= 1;
            }

            let anchor = CalendarDate::from_ymd(year, month as u8 + 1, 1)
                .unwrap_or_else(|| period.anchor.first_of_month());
            Period::monthly(anchor)
        }
    }
}

/// Navigate `steps` periods at once; negative steps go backward.
pub fn shift(period: Period, steps: i32) -> Period {
    let direction = if steps < 0 {
        Direction::Prev
    } else {
        Direction::Next
    };
    (0..steps.unsigned_abs()).fold(period, |p, _| navigate(p, direction))
}

/// The period of the given kind containing today.
pub fn current(kind: PeriodKind) -> Period {
    current_at(kind, CalendarDate::today())
}

pub fn current_at(kind: PeriodKind, today: CalendarDate) -> Period {
    Period::new(kind, today)
}

/// Layout of a month view: the month's days preceded by the tail of the
/// previous month so that the first row starts on a Monday.
///
/// The padding is for display only. [`month_range`] is still the period's
/// date list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading: Vec<CalendarDate>,
    pub days: Vec<CalendarDate>,
}

impl MonthGrid {
    /// Rows of seven cells. Padding cells are `None`; only the first row is
    /// padded and the last row may be shorter than seven.
    pub fn weeks(&self) -> Vec<Vec<Option<CalendarDate>>> {
        let cells: Vec<Option<CalendarDate>> = self
            .leading
            .iter()
            .map(|_| None)
            .chain(self.days.iter().copied().map(Some))
            .collect();
        cells.chunks(7).map(|row| row.to_vec()).collect()
    }
}

pub fn month_grid(anchor: CalendarDate) -> MonthGrid {
    let days = month_range(anchor);
    let first = anchor.first_of_month();
    let grid_start = monday_on_or_before(first);

    let mut leading = Vec::new();
    let mut current = grid_start;
    while current < first {
        leading.push(current);
        current = current.add_days(1);
    }

    MonthGrid { leading, days }
}
