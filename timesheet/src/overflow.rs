use crate::domain::{DateKey, TimeEntry};

/// Entries shown per day in the month grid before the rest are folded away.
pub const DEFAULT_OVERFLOW_LIMIT: usize = 5;

/// A day's entries split into the ones shown directly and the ones behind
/// the overflow disclosure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub visible: &'a [TimeEntry],
    pub overflow: &'a [TimeEntry],
}

impl Page<'_> {
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }
}

/// Split `entries` after the first `limit` items. No ordering is imposed:
/// callers that want a particular order sort before paginating.
pub fn paginate(entries: &[TimeEntry], limit: usize) -> Page<'_> {
    let (visible, overflow) = entries.split_at(limit.min(entries.len()));
    Page { visible, overflow }
}

/// Which day's overflow panel is open, if any. Opening one day closes any
/// other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowState {
    open: Option<DateKey>,
}

impl OverflowState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn toggle(&self, key: &DateKey) -> Self {
        let open = match &self.open {
            Some(current) if current == key => None,
            _ => Some(key.clone()),
        };
        Self { open }
    }

    pub fn is_open(&self, key: &DateKey) -> bool {
        self.open.as_ref() == Some(key)
    }

    pub fn open_key(&self) -> Option<&DateKey> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalendarDate;
    use time::macros::date;

    fn entries(n: usize) -> Vec<TimeEntry> {
        (0..n)
            .map(|i| {
                TimeEntry::new(
                    format!("e-{i}"),
                    CalendarDate::new(date!(2025 - 06 - 09)),
                    1,
                    0,
                )
            })
            .collect()
    }

    #[test]
    fn splits_after_limit() {
        let day = entries(7);
        let page = paginate(&day, DEFAULT_OVERFLOW_LIMIT);
        assert_eq!(page.visible.len(), 5);
        assert_eq!(page.overflow.len(), 2);
        assert!(page.has_overflow());
        assert_eq!(page.overflow[0].id.as_str(), "e-5");

        let rejoined: Vec<TimeEntry> = page
            .visible
            .iter()
            .chain(page.overflow)
            .cloned()
            .collect();
        assert_eq!(rejoined, day);
    }

    #[test]
    fn short_days_have_no_overflow() {
        let day = entries(3);
        let page = paginate(&day, 5);
        assert_eq!(page.visible.len(), 3);
        assert!(!page.has_overflow());

        let page = paginate(&[], 5);
        assert!(page.visible.is_empty() && page.overflow.is_empty());
    }

    #[test]
    fn exactly_at_limit() {
        let day = entries(5);
        assert!(!paginate(&day, 5).has_overflow());
        assert_eq!(paginate(&day, 0).overflow.len(), 5);
    }

    #[test]
    fn toggle_keeps_at_most_one_open() {
        let monday = CalendarDate::new(date!(2025 - 06 - 09)).key();
        let tuesday = CalendarDate::new(date!(2025 - 06 - 10)).key();

        let state = OverflowState::closed().toggle(&monday);
        assert!(state.is_open(&monday));

        let state = state.toggle(&tuesday);
        assert!(state.is_open(&tuesday));
        assert!(!state.is_open(&monday));

        let state = state.toggle(&tuesday);
        assert_eq!(state.open_key(), None);
        assert_eq!(state, OverflowState::closed());
    }
}
