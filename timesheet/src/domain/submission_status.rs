use serde::{Deserialize, Serialize};

/// Submission state of a single time entry. Sent over the wire as a boolean.
///
/// The only transition is `Unsubmitted -> Submitted`, and it is observed from
/// server data after a successful bulk submit; the engine never flips it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(from = "bool", into = "bool")]
pub enum SubmissionStatus {
    #[default]
    Unsubmitted,
    Submitted,
}

impl SubmissionStatus {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }
}

impl From<bool> for SubmissionStatus {
    fn from(value: bool) -> Self {
        if value {
            SubmissionStatus::Submitted
        } else {
            SubmissionStatus::Unsubmitted
        }
    }
}

impl From<SubmissionStatus> for bool {
    fn from(val: SubmissionStatus) -> Self {
        val.is_submitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_bool() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::Submitted).unwrap(),
            "true"
        );
        let status: SubmissionStatus = serde_json::from_str("false").unwrap();
        assert_eq!(status, SubmissionStatus::Unsubmitted);
    }
}
