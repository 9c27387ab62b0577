use std::collections::BTreeMap;

use crate::domain::{CalendarDate, DateKey, DateRange, EntryId, TimeEntry};

/// Time entries grouped by the [`DateKey`] of their date.
///
/// The index is never mutated in place. Every update returns a new index so
/// that earlier snapshots stay valid. Two merge paths exist:
///
/// - [`EntryIndex::upsert`] / [`EntryIndex::remove`] apply a single entry
///   returned by an add/edit/delete call.
/// - [`EntryIndex::replace_range`] swaps in a refetched range wholesale,
///   used after submitting or copying a period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryIndex {
    buckets: BTreeMap<DateKey, Vec<TimeEntry>>,
}

impl EntryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat list of entries by date, keeping input order within a day.
    pub fn group_by_date(entries: impl IntoIterator<Item = TimeEntry>) -> Self {
        let mut buckets: BTreeMap<DateKey, Vec<TimeEntry>> = BTreeMap::new();
        for entry in entries {
            buckets.entry(entry.key()).or_default().push(entry);
        }

        tracing::debug!(days = buckets.len(), "grouped time entries by date");
        Self { buckets }
    }

    /// Entries registered on `date`; empty when there are none.
    pub fn entries_on(&self, date: CalendarDate) -> &[TimeEntry] {
        self.entries_for_key(&date.key())
    }

    pub fn entries_for_key(&self, key: &DateKey) -> &[TimeEntry] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace the entry with the same id in the entry's date bucket, or
    /// append it to that bucket.
    pub fn upsert(&self, entry: TimeEntry) -> Self {
        let key = entry.key();

        let elsewhere = self
            .buckets
            .iter()
            .any(|(k, bucket)| *k != key && bucket.iter().any(|e| e.id == entry.id));
        if elsewhere {
            tracing::warn!(
                id = %entry.id,
                date = %key,
                "entry id already indexed under another date, leaving that copy in place"
            );
        }

        let mut buckets = self.buckets.clone();
        let bucket = buckets.entry(key).or_default();
        match bucket.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => *existing = entry,
            None => bucket.push(entry),
        }

        Self { buckets }
    }

    /// Remove the entry with `id` from the bucket for `date`. Unknown ids
    /// leave the index unchanged.
    pub fn remove(&self, date: CalendarDate, id: &EntryId) -> Self {
        let key = date.key();
        let mut buckets = self.buckets.clone();

        if let Some(bucket) = buckets.get_mut(&key) {
            bucket.retain(|e| &e.id != id);
            if bucket.is_empty() {
                buckets.remove(&key);
            }
        }

        Self { buckets }
    }

    /// Replace every bucket inside `range` with `entries`, as refetched from
    /// the server. Buckets outside the range are kept; response entries
    /// outside the range are dropped.
    pub fn replace_range(&self, range: DateRange, entries: impl IntoIterator<Item = TimeEntry>) -> Self {
        let mut buckets: BTreeMap<DateKey, Vec<TimeEntry>> = self
            .buckets
            .iter()
            .filter(|(key, _)| !range.contains(key.date()))
            .map(|(key, bucket)| (key.clone(), bucket.clone()))
            .collect();

        let mut replaced = 0;
        for entry in entries {
            if !range.contains(entry.date) {
                tracing::warn!(
                    id = %entry.id,
                    date = %entry.date,
                    "ignoring refetched entry outside {}..={}",
                    range.start,
                    range.end
                );
                continue;
            }
            buckets.entry(entry.key()).or_default().push(entry);
            replaced += 1;
        }

        tracing::debug!(
            start = %range.start,
            end = %range.end,
            entries = replaced,
            "replaced date range in entry index"
        );
        Self { buckets }
    }

    /// Number of indexed entries.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Buckets in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[TimeEntry])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

impl FromIterator<TimeEntry> for EntryIndex {
    fn from_iter<I: IntoIterator<Item = TimeEntry>>(iter: I) -> Self {
        Self::group_by_date(iter)
    }
}
