use serde::Serialize;

use super::RangeQuery;
use crate::domain::{DateKey, DateRange, Period};

/// Parameters for fetching the time entries of an inclusive date range,
/// optionally on behalf of another user (manager/admin views).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchEntriesRequest {
    pub start: DateKey,
    pub end: DateKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl FetchEntriesRequest {
    pub fn new(range: DateRange) -> Self {
        Self {
            start: range.start_key(),
            end: range.end_key(),
            user_id: None,
        }
    }

    pub fn for_period(period: &Period) -> Self {
        Self::new(period.range())
    }

    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

impl RangeQuery for FetchEntriesRequest {
    fn as_query(&self) -> String {
        match &self.user_id {
            Some(user_id) => format!("start={}&end={}&userId={}", self.start, self.end, user_id),
            None => format!("start={}&end={}", self.start, self.end),
        }
    }
}
