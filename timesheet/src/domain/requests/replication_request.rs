use serde::Serialize;

use super::RangeQuery;
use crate::domain::{DateKey, DateRange};

/// Source range handed to the remote "copy previous period" operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplicationRequest {
    pub start: DateKey,
    pub end: DateKey,
}

impl From<DateRange> for ReplicationRequest {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start_key(),
            end: range.end_key(),
        }
    }
}

impl RangeQuery for ReplicationRequest {
    fn as_query(&self) -> String {
        format!("start={}&end={}", self.start, self.end)
    }
}
