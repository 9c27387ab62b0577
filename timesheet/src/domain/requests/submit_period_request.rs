use serde::Serialize;

use super::RangeQuery;
use crate::domain::{DateKey, Period};

/// Bulk submission of every entry within a period's date list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitPeriodRequest {
    pub start: DateKey,
    pub end: DateKey,
}

impl SubmitPeriodRequest {
    pub fn for_period(period: &Period) -> Self {
        let range = period.range();
        Self {
            start: range.start_key(),
            end: range.end_key(),
        }
    }
}

impl RangeQuery for SubmitPeriodRequest {
    fn as_query(&self) -> String {
        format!("start={}&end={}", self.start, self.end)
    }
}
