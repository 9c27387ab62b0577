mod fetch_entries_request;
mod replication_request;
mod submit_period_request;

pub use fetch_entries_request::FetchEntriesRequest;
pub use replication_request::ReplicationRequest;
pub use submit_period_request::SubmitPeriodRequest;

/// Requests that can be expressed as a URL query string for the remote
/// timesheet endpoints.
pub trait RangeQuery {
    fn as_query(&self) -> String;
}
