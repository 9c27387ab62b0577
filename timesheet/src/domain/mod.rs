mod calendar_date;
mod date_key;
mod date_range;
mod period;
mod requests;
mod submission_status;
mod time_entry;
mod worked_time;

pub use calendar_date::*;
pub use date_key::*;
pub use date_range::*;
pub use period::*;
pub use requests::*;
pub use submission_status::*;
pub use time_entry::*;
pub use worked_time::*;
