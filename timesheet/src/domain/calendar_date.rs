use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Duration, Month, OffsetDateTime, Weekday};

use super::DateKey;

/// A day on the calendar, without any time-of-day or timezone.
///
/// Two dates are equal iff their year, month and day match. Nothing in the
/// engine converts through UTC to compare or key dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    /// Build a date from its components, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Today in the host's local timezone.
    pub fn today() -> Self {
        let now = match OffsetDateTime::now_local() {
            Ok(now) => now,
            Err(e) => {
                tracing::warn!("local offset unavailable, using UTC for today: {}", e);
                OffsetDateTime::now_utc()
            }
        };
        Self(now.date())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn as_date(&self) -> Date {
        self.0
    }

    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.replace_day(1).unwrap_or(self.0))
    }

    pub fn key(&self) -> DateKey {
        DateKey::encode(*self)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for Date {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key().as_str())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateKey::decode(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn from_ymd_rejects_missing_days() {
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2024, 13, 1).is_none());
        assert_eq!(
            CalendarDate::from_ymd(2024, 2, 29),
            Some(CalendarDate::new(date!(2024 - 02 - 29)))
        );
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        let d = CalendarDate::new(date!(2024 - 12 - 30));
        assert_eq!(d.add_days(3), CalendarDate::new(date!(2025 - 01 - 02)));
        assert_eq!(d.add_days(-30), CalendarDate::new(date!(2024 - 11 - 30)));
    }

    #[test]
    fn first_of_month() {
        let d = CalendarDate::new(date!(2024 - 02 - 29));
        assert_eq!(d.first_of_month(), CalendarDate::new(date!(2024 - 02 - 01)));
    }

    #[test]
    fn serializes_as_date_key() {
        let d = CalendarDate::new(date!(2025 - 06 - 09));
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2025-06-09\"");

        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2025-06-31\"").is_err());
    }
}
