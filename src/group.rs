use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::model::DaySchedule;

/// Named collection of members, each owning exactly one [`DaySchedule`].
///
/// Schedules are owned by the map directly: replacing or removing a member
/// discards its schedule, and dropping the group tears all of them down.
#[derive(Debug, Clone, Default)]
pub struct Group {
    members: HashMap<String, DaySchedule>,
}

impl Group {
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
        }
    }

    /// Add a member with a fully free schedule. An existing member's schedule
    /// is discarded and replaced, not merged.
    pub fn add(&mut self, id: impl Into<String>) {
        self.add_with(id, DaySchedule::new());
    }

    /// Same replacement semantics, with a caller-supplied schedule.
    pub fn add_with(&mut self, id: impl Into<String>, schedule: DaySchedule) {
        self.members.insert(id.into(), schedule);
    }

    /// No-op when the member is absent.
    pub fn remove(&mut self, id: &str) {
        self.members.remove(id);
    }

    pub fn get(&self, id: &str) -> Result<&DaySchedule, ScheduleError> {
        self.members
            .get(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut DaySchedule, ScheduleError> {
        self.members
            .get_mut(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))
    }

    /// Iteration order is unspecified; callers that need determinism go
    /// through [`Group::member_ids`].
    pub fn members(&self) -> impl Iterator<Item = (&str, &DaySchedule)> {
        self.members.iter().map(|(id, s)| (id.as_str(), s))
    }

    /// Member ids in sorted order. Booking commits in this order so a partial
    /// failure rolls back deterministically.
    pub fn member_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.members.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
