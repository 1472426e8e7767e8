//! Types shared between the API layer and the registry.

mod axis;
mod ballot;
mod subject;

pub use axis::Axis;
pub use ballot::{Ballot, BallotSlot, BookCode};
pub use subject::Subject;

/// Teacher IDs are random UUIDs in their hyphenated string form.
pub type TeacherId = String;
