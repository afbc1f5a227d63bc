use serde::{Deserialize, Serialize};

/// Number of half-hour slots in one day's grid.
pub const SLOTS_PER_DAY: usize = 48;

/// Half-open interval `[from, to)` of slot indices.
///
/// Slot `i` covers the half-hour window starting `i * 30` minutes after
/// midnight. A range is valid when `from < to && to <= SLOTS_PER_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: usize,
    pub to: usize,
}

impl TimeRange {
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(from < to, "TimeRange from must be before to");
        Self { from, to }
    }

    /// Number of slots covered.
    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    /// True when the range addresses a positive number of slots inside the grid.
    pub fn is_valid(&self) -> bool {
        self.from < self.to && self.to <= SLOTS_PER_DAY
    }

    /// Error-shaped validity check for boundary callers; the grid operations
    /// themselves signal invalid ranges through their return value.
    pub fn validate(&self) -> Result<(), crate::error::ScheduleError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(crate::error::ScheduleError::InvalidRange {
                from: self.from,
                to: self.to,
            })
        }
    }
}

/// Coalesce consecutive free slots into maximal disjoint ranges, ascending.
pub fn coalesce_free(slots: &[bool]) -> Vec<TimeRange> {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &free) in slots.iter().enumerate() {
        match (free, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push(TimeRange::new(s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push(TimeRange::new(s, slots.len()));
    }

    ranges
}

/// One person's occupancy bitmap over the daily grid. `true` = free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDaySchedule")]
pub struct DaySchedule {
    /// Always exactly `SLOTS_PER_DAY` long.
    slots: Vec<bool>,
}

/// Unvalidated wire shape; [`DaySchedule`] deserializes through this so the
/// length-48 invariant holds for every constructed value.
#[derive(Deserialize)]
struct RawDaySchedule {
    slots: Vec<bool>,
}

impl TryFrom<RawDaySchedule> for DaySchedule {
    type Error = String;

    fn try_from(raw: RawDaySchedule) -> Result<Self, Self::Error> {
        if raw.slots.len() != SLOTS_PER_DAY {
            return Err(format!(
                "schedule must have exactly {SLOTS_PER_DAY} slots, got {}",
                raw.slots.len()
            ));
        }
        Ok(Self { slots: raw.slots })
    }
}

impl Default for DaySchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl DaySchedule {
    /// A fully free day.
    pub fn new() -> Self {
        Self {
            slots: vec![true; SLOTS_PER_DAY],
        }
    }

    /// Mark every slot in `range` occupied. Fails without mutating anything
    /// if the range is invalid or any slot in it is already occupied — the
    /// whole range transitions or nothing does.
    pub fn occupy(&mut self, range: TimeRange) -> bool {
        if !range.is_valid() {
            return false;
        }
        if self.slots[range.from..range.to].iter().any(|free| !free) {
            return false;
        }
        for slot in &mut self.slots[range.from..range.to] {
            *slot = false;
        }
        true
    }

    /// Mark every slot in `[from, min(to, 48))` free. Out-of-grid bounds and
    /// reversed ranges degrade to a no-op instead of failing; rollback calls
    /// this on ranges whose slots may already be free. Idempotent.
    pub fn release(&mut self, range: TimeRange) {
        let to = range.to.min(SLOTS_PER_DAY);
        for slot in &mut self.slots[range.from.min(to)..to] {
            *slot = true;
        }
    }

    /// Non-mutating conflict probe: true iff the range is valid and every
    /// slot in it is free.
    pub fn is_free(&self, range: TimeRange) -> bool {
        range.is_valid() && self.slots[range.from..range.to].iter().all(|&free| free)
    }

    /// Maximal disjoint free ranges in ascending order, computed eagerly.
    pub fn free_ranges(&self) -> Vec<TimeRange> {
        coalesce_free(&self.slots)
    }

    /// Read view of the grid.
    pub fn slots(&self) -> &[bool] {
        &self.slots
    }

    pub fn free_slot_count(&self) -> usize {
        self.slots.iter().filter(|&&free| free).count()
    }
}
