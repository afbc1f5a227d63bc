//! Group scheduling over a single day's grid of 48 half-hour slots.
//!
//! A [`Group`] owns one [`DaySchedule`] per member; the [`scheduler`]
//! functions compute the group's common free time and place all-or-nothing
//! reservations across every member, rolling back on any conflict.
//!
//! Everything is in-memory and single-threaded; wall-clock conversion and
//! persistence belong to the surrounding application.

pub mod error;
pub mod group;
pub mod model;
pub mod scheduler;

pub use error::ScheduleError;
pub use group::Group;
pub use model::{DaySchedule, SLOTS_PER_DAY, TimeRange, coalesce_free};
pub use scheduler::{book, query_available, query_available_for, quorum_available};
