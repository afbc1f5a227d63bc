use crate::group::Group;
use crate::model::{coalesce_free, SLOTS_PER_DAY, TimeRange};

// ── Group availability ────────────────────────────────────────────

/// Slot-wise AND of free status across all members. An empty group is
/// vacuously fully available.
pub fn common_free_slots(group: &Group) -> [bool; SLOTS_PER_DAY] {
    let mut common = [true; SLOTS_PER_DAY];
    for (_, schedule) in group.members() {
        for (i, free) in schedule.slots().iter().enumerate() {
            if !free {
                common[i] = false;
            }
        }
    }
    common
}

/// Maximal common free ranges across the whole group, ascending. Read-only:
/// no member schedule is touched. Same coalescing rule as
/// [`DaySchedule::free_ranges`](crate::model::DaySchedule::free_ranges).
pub fn query_available(group: &Group) -> Vec<TimeRange> {
    coalesce_free(&common_free_slots(group))
}

/// Like [`query_available`], keeping only ranges of at least `min_slots`.
pub fn query_available_for(group: &Group, min_slots: usize) -> Vec<TimeRange> {
    let mut free = query_available(group);
    free.retain(|r| r.len() >= min_slots);
    free
}

/// Ranges where at least `min_present` members are simultaneously free.
/// Useful when a meeting does not need the whole group. Returns nothing for
/// an empty group or a zero threshold.
pub fn quorum_available(group: &Group, min_present: usize) -> Vec<TimeRange> {
    if group.is_empty() || min_present == 0 {
        return Vec::new();
    }

    let mut counts = [0usize; SLOTS_PER_DAY];
    for (_, schedule) in group.members() {
        for (i, free) in schedule.slots().iter().enumerate() {
            if *free {
                counts[i] += 1;
            }
        }
    }

    let reachable: Vec<bool> = counts.iter().map(|&c| c >= min_present).collect();
    coalesce_free(&reachable)
}
