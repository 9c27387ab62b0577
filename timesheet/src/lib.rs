mod aggregate;
mod calendar;
pub mod domain;
mod error;
mod export;
mod index;
mod overflow;
mod replication;
mod submission;

pub use aggregate::*;
pub use calendar::*;
pub use error::*;
pub use export::*;
pub use index::*;
pub use overflow::*;
pub use replication::*;
pub use submission::*;
