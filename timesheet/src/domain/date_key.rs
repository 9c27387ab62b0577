use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};

use super::CalendarDate;
use crate::TimesheetError;

/// Canonical `YYYY-MM-DD` key for a [`CalendarDate`].
///
/// Built from the date's own year/month/day, so the key of a date never
/// depends on the host timezone. This is the join key between calendar days
/// and time entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey {
    key: String,
    date: CalendarDate,
}

impl DateKey {
    pub fn encode(date: CalendarDate) -> Self {
        Self {
            key: format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day()),
            date,
        }
    }

    /// Parse a `YYYY-MM-DD` string into a date. Impossible dates such as
    /// `2023-02-29` are rejected.
    pub fn decode(key: &str) -> Result<CalendarDate, TimesheetError> {
        Date::parse(key, format_description!("[year]-[month]-[day]"))
            .map(CalendarDate::new)
            .map_err(|_| TimesheetError::InvalidDateKey(key.to_string()))
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl From<CalendarDate> for DateKey {
    fn from(date: CalendarDate) -> Self {
        Self::encode(date)
    }
}

impl FromStr for DateKey {
    type Err = TimesheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).map(Self::encode)
    }
}

impl TryFrom<String> for DateKey {
    type Error = TimesheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.key
    }
}
