use tracing::debug;

use crate::group::Group;
use crate::model::TimeRange;

/// Occupy `range` on every member's schedule, all-or-nothing.
///
/// Members are attempted in sorted-id order. The first member whose
/// `occupy` fails aborts the call: every member occupied so far has
/// `release(range)` applied to restore its prior state, and the call
/// returns false. Rollback is scoped to `range` only, so pre-existing
/// bookings adjacent to it survive untouched.
///
/// An empty group books vacuously. Not safe for concurrent callers on the
/// same group: atomicity relies on sequential rollback, not isolation.
pub fn book(group: &mut Group, range: TimeRange) -> bool {
    if !range.is_valid() {
        debug!("rejecting booking with invalid range [{}, {})", range.from, range.to);
        return false;
    }

    let ids: Vec<String> = group.member_ids().into_iter().map(str::to_owned).collect();

    for (done, id) in ids.iter().enumerate() {
        let occupied = group
            .get_mut(id)
            .map(|schedule| schedule.occupy(range))
            .unwrap_or(false);

        if !occupied {
            debug!(
                "booking [{}, {}) blocked by {id}, rolling back {done} members",
                range.from, range.to
            );
            for prior in &ids[..done] {
                if let Ok(schedule) = group.get_mut(prior) {
                    schedule.release(range);
                }
            }
            return false;
        }
    }

    debug!("booked [{}, {}) across {} members", range.from, range.to, ids.len());
    true
}
