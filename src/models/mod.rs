//! Timetable domain models.
//!
//! Provides the data types exchanged with the external schedule
//! generator and consumed by the layout engine.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generator wire | Meaning |
//! |-------------|----------------|---------|
//! | TimeBlock | block | One weekly meeting of a course section/group |
//! | ScheduleCandidate | schedule | One full weekly combination |
//! | SectionInfo | section | Chosen section/group per course |
//! | ExceptionKind | topon type | Approved overlap (full/partial) |

mod block;
mod candidate;
mod interval;

pub use block::{BlockKey, TimeBlock};
pub use candidate::{
    Classification, ConflictKind, ExceptionKind, GroupLabel, ScheduleCandidate, SectionInfo,
};
pub use interval::Interval;
