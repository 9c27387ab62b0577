use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CalendarDate, DateKey, SubmissionStatus, WorkedTime};
use crate::TimesheetError;

/// Identifier of a time entry, as assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The project a time entry is booked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

impl ProjectRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Metadata of a file attached to a time entry. The file itself lives in
/// external storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub file_name: String,
    pub url: String,
}

/// A block of worked time registered on a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTimeEntry")]
pub struct TimeEntry {
    pub id: EntryId,
    pub date: CalendarDate,
    pub hours: u32,
    pub minutes: u32,
    pub description: String,
    pub task_type: String,
    pub project: Option<ProjectRef>,
    pub submitted: SubmissionStatus,
    pub attachments: Vec<Attachment>,
}

impl TimeEntry {
    /// Minutes of 60 or more are carried into hours.
    pub fn new(id: impl Into<EntryId>, date: CalendarDate, hours: u32, minutes: u32) -> Self {
        let carried = minutes / 60;
        Self {
            id: id.into(),
            date,
            hours: hours + carried,
            minutes: minutes % 60,
            description: String::new(),
            task_type: String::new(),
            project: None,
            submitted: SubmissionStatus::Unsubmitted,
            attachments: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    pub fn with_project(mut self, project: ProjectRef) -> Self {
        self.project = Some(project);
        self
    }

    pub fn with_submitted(mut self, submitted: impl Into<SubmissionStatus>) -> Self {
        self.submitted = submitted.into();
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn key(&self) -> DateKey {
        self.date.key()
    }

    pub fn worked(&self) -> WorkedTime {
        WorkedTime::from_hours_minutes(u64::from(self.hours), u64::from(self.minutes))
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_submitted()
    }
}

// Raw type, the shape the server sends for a time entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeEntry {
    id: String,
    date: String,
    hours: u32,
    #[serde(default)]
    minutes: u32,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    task_type: Option<String>,
    #[serde(default)]
    project: Option<ProjectRef>,
    #[serde(default)]
    submitted: bool,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl TryFrom<RawTimeEntry> for TimeEntry {
    type Error = TimesheetError;

    fn try_from(raw: RawTimeEntry) -> Result<Self, Self::Error> {
        let date = DateKey::decode(&raw.date)?;
        if raw.minutes > 59 {
            return Err(TimesheetError::InvalidMinutes {
                id: raw.id,
                minutes: raw.minutes,
            });
        }

        Ok(TimeEntry {
            id: EntryId::new(raw.id),
            date,
            hours: raw.hours,
            minutes: raw.minutes,
            description: raw.description.unwrap_or_default(),
            task_type: raw.task_type.unwrap_or_default(),
            project: raw.project,
            submitted: raw.submitted.into(),
            attachments: raw.attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn deserializes_server_payload() {
        let json = r#"{
            "id": "e-1",
            "date": "2025-06-09",
            "hours": 7,
            "minutes": 30,
            "description": "Sprint planning",
            "taskType": "Meeting",
            "project": { "id": "p-9", "name": "Apollo" },
            "submitted": true,
            "attachments": [
                { "id": "a-1", "fileName": "notes.pdf", "url": "https://files.example/a-1" }
            ]
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, EntryId::new("e-1"));
        assert_eq!(entry.date, CalendarDate::new(date!(2025 - 06 - 09)));
        assert_eq!(entry.worked(), WorkedTime::from_hours_minutes(7, 30));
        assert_eq!(entry.task_type, "Meeting");
        assert_eq!(entry.project, Some(ProjectRef::new("p-9", "Apollo")));
        assert!(entry.is_submitted());
        assert_eq!(entry.attachments.len(), 1);
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{ "id": "e-2", "date": "2025-06-10", "hours": 1, "description": null }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.minutes, 0);
        assert_eq!(entry.description, "");
        assert!(entry.project.is_none());
        assert!(!entry.is_submitted());
        assert!(entry.attachments.is_empty());
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        let json = r#"{ "id": "e-3", "date": "2025-06-10", "hours": 1, "minutes": 60 }"#;
        let err = serde_json::from_str::<TimeEntry>(json).unwrap_err();
        assert!(err.to_string().contains("expected 0-59"));
    }

    #[test]
    fn rejects_utc_timestamps_as_dates() {
        let json = r#"{ "id": "e-4", "date": "2025-06-10T22:00:00Z", "hours": 1 }"#;
        assert!(serde_json::from_str::<TimeEntry>(json).is_err());
    }

    #[test]
    fn serializes_camel_case_with_bool_submitted() {
        let entry = TimeEntry::new("e-5", CalendarDate::new(date!(2025 - 06 - 11)), 2, 15)
            .with_task_type("Development")
            .with_submitted(true);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["date"], "2025-06-11");
        assert_eq!(value["taskType"], "Development");
        assert_eq!(value["submitted"], true);

        let back: TimeEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn new_carries_minutes() {
        let entry = TimeEntry::new("e-6", CalendarDate::new(date!(2025 - 06 - 11)), 1, 90);
        assert_eq!((entry.hours, entry.minutes), (2, 30));
    }
}
