//! End-to-end exercise of the public API: seed a team, find the common
//! window, book it, and verify rollback restores conflicting attempts.

use dayslot::{Group, TimeRange, book, query_available, query_available_for, quorum_available};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn plan_a_team_meeting() {
    init_tracing();

    let mut team = Group::new();
    team.add("tom");
    team.add("lily");
    team.add("joe");

    // Seed existing commitments through the same API a caller would use.
    assert!(team.get_mut("lily").unwrap().occupy(TimeRange::new(22, 28)));
    assert!(team.get_mut("joe").unwrap().occupy(TimeRange::new(24, 26)));

    let windows = query_available(&team);
    assert_eq!(windows, vec![TimeRange::new(0, 22), TimeRange::new(28, 48)]);

    // Book the first common window.
    assert!(book(&mut team, windows[0]));
    assert_eq!(query_available(&team), vec![TimeRange::new(28, 48)]);

    // A range crossing lily's and joe's commitments cannot be booked, and
    // the failed attempt leaves every calendar exactly as it was.
    let before: Vec<_> = team
        .member_ids()
        .into_iter()
        .map(|id| team.get(id).unwrap().clone())
        .collect();
    assert!(!book(&mut team, TimeRange::new(20, 23)));
    let after: Vec<_> = team
        .member_ids()
        .into_iter()
        .map(|id| team.get(id).unwrap().clone())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn shorter_meetings_and_partial_attendance() {
    init_tracing();

    let mut team = Group::new();
    team.add("ana");
    team.add("ben");
    assert!(team.get_mut("ana").unwrap().occupy(TimeRange::new(0, 20)));
    assert!(team.get_mut("ben").unwrap().occupy(TimeRange::new(21, 40)));

    // Only [20, 21) and [40, 48) are common; a two-slot meeting needs quorum.
    assert_eq!(
        query_available_for(&team, 2),
        vec![TimeRange::new(40, 48)]
    );
    assert_eq!(quorum_available(&team, 1), vec![TimeRange::new(0, 48)]);
}

#[test]
fn membership_changes_affect_availability() {
    init_tracing();

    let mut team = Group::new();
    team.add("ana");
    assert!(team.get_mut("ana").unwrap().occupy(TimeRange::new(0, 48)));
    assert!(query_available(&team).is_empty());

    team.remove("ana");
    assert_eq!(query_available(&team), vec![TimeRange::new(0, 48)]);

    // Re-adding replaces the old calendar with a fresh one.
    team.add("ana");
    assert_eq!(query_available(&team), vec![TimeRange::new(0, 48)]);
}
