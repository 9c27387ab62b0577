use std::fmt::Write;

use time::Weekday;
use timesheet::{
    domain::Period, month_grid, period_total, submission_request, summarize_days, EntryIndex,
};

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// One line per day with its total and entry count, then the period total
/// and whether the period can still be submitted.
pub fn summary(period: &Period, index: &EntryIndex, overflow_limit: usize) -> String {
    let range = period.range();
    let mut out = String::new();
    let _ = writeln!(out, "{} {}..{}", period.kind, range.start, range.end);

    for day in summarize_days(period, index, overflow_limit) {
        let _ = write!(
            out,
            "{} {}  {:>8}  {} entries",
            weekday_label(day.date.weekday()),
            day.key,
            day.total.to_string(),
            day.entry_count()
        );
        if day.page.has_overflow() {
            let _ = write!(out, " (+{} more)", day.page.overflow.len());
        }
        if day.has_unsubmitted() {
            out.push_str("  unsubmitted");
        }
        out.push('\n');
    }

    let total = period_total(period, index);
    let _ = write!(out, "Total {} / {}", total.worked, total.target);
    if total.met {
        out.push_str("  target met\n");
    } else {
        let _ = writeln!(out, "  {} remaining", total.remaining());
    }

    match submission_request(period, index) {
        Some(request) => {
            let _ = writeln!(out, "Submit: {}..{}", request.start, request.end);
        }
        None => out.push_str("Submit: nothing to submit\n"),
    }
    out
}

/// Month calendar for the month containing the period anchor. Days with
/// entries are marked with `*`.
pub fn grid(period: &Period, index: &EntryIndex) -> String {
    let anchor = period.anchor;
    let mut out = String::new();
    let _ = writeln!(out, "{:04}-{:02}", anchor.year(), anchor.month());
    out.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");

    for week in month_grid(anchor).weeks() {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(date) => {
                    let mark = if index.entries_on(*date).is_empty() { ' ' } else { '*' };
                    format!(" {:>2}{}", date.day(), mark)
                }
                None => "    ".to_string(),
            })
            .collect();
        out.push_str(cells.concat().trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet::domain::{CalendarDate, TimeEntry};

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn summary_lists_every_day_of_the_week() {
        let index = EntryIndex::group_by_date(vec![
            TimeEntry::new("1", date(2025, 6, 9), 8, 0),
            TimeEntry::new("2", date(2025, 6, 10), 7, 30).with_submitted(true),
        ]);
        let text = summary(&Period::weekly(date(2025, 6, 11)), &index, 5);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "weekly 2025-06-09..2025-06-15");
        assert!(lines[1].starts_with("Mon 2025-06-09"));
        assert!(lines[1].ends_with("unsubmitted"));
        assert!(!lines[2].contains("unsubmitted"));
        assert!(lines[7].starts_with("Sun 2025-06-15"));
        assert_eq!(lines[8], "Total 15h 30m / 40h 0m  24h 30m remaining");
        assert_eq!(lines[9], "Submit: 2025-06-09..2025-06-15");
    }

    #[test]
    fn summary_shows_overflow_count() {
        let busy = date(2025, 6, 12);
        let index = EntryIndex::group_by_date((0..7).map(|i| TimeEntry::new(format!("e{i}"), busy, 1, 0)));
        let text = summary(&Period::weekly(busy), &index, 5);
        assert!(text.contains("7 entries (+2 more)"));
    }

    #[test]
    fn submitted_week_has_nothing_to_submit() {
        let index = EntryIndex::group_by_date(vec![
            TimeEntry::new("1", date(2025, 6, 9), 8, 0).with_submitted(true),
        ]);
        let text = summary(&Period::weekly(date(2025, 6, 9)), &index, 5);
        assert!(text.ends_with("Submit: nothing to submit\n"));
    }

    #[test]
    fn grid_pads_leading_days() {
        // June 2025 starts on a Sunday
        let index = EntryIndex::group_by_date(vec![TimeEntry::new("1", date(2025, 6, 2), 8, 0)]);
        let text = grid(&Period::monthly(date(2025, 6, 20)), &index);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2025-06");
        assert_eq!(lines[2], format!("{}  1", " ".repeat(24)));
        assert!(lines[3].starts_with("  2*  3 "));
        assert_eq!(lines.len(), 2 + 6);
    }
}
