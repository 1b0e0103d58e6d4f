//! Integration tests for completion toggling and progress derivation.

use court_schedule::{
    compute_progress, generate_schedule, reset_progress, summarize_progress, toggle_match,
    CompletionState, ScheduleError, Variant,
};

#[test]
fn toggle_twice_restores_the_flag() {
    let schedule = generate_schedule(6, Variant::Seeded).unwrap();
    let start = CompletionState::empty_for(&schedule);

    let once = toggle_match(&schedule, &start, 1, 1).unwrap();
    assert!(once.is_complete(1, 1));
    assert!(!start.is_complete(1, 1));

    let twice = toggle_match(&schedule, &once, 1, 1).unwrap();
    assert_eq!(twice, start);
}

#[test]
fn toggle_outside_schedule_is_rejected() {
    let schedule = generate_schedule(4, Variant::FixedOpening).unwrap();
    let state = CompletionState::empty_for(&schedule);
    assert_eq!(
        toggle_match(&schedule, &state, 3, 0),
        Err(ScheduleError::MatchNotFound { round: 3, court: 0 })
    );
    assert_eq!(
        toggle_match(&schedule, &state, 0, 2),
        Err(ScheduleError::MatchNotFound { round: 0, court: 2 })
    );
}

#[test]
fn progress_counts_both_teams_of_each_completed_match() {
    let schedule = generate_schedule(4, Variant::FixedOpening).unwrap();
    let mut state = CompletionState::empty_for(&schedule);
    state = toggle_match(&schedule, &state, 0, 0).unwrap(); // 1 vs 2
    state = toggle_match(&schedule, &state, 1, 0).unwrap(); // 1 vs 3

    let counts = compute_progress(&schedule, &state);
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[&1], 2);
    assert_eq!(counts[&2], 1);
    assert_eq!(counts[&3], 1);
    assert_eq!(counts[&4], 0);
}

#[test]
fn progress_sum_is_twice_completed_matches() {
    for n in [5, 8, 11, 15] {
        let schedule = generate_schedule(n, Variant::LoadBalanced).unwrap();
        let mut state = CompletionState::empty_for(&schedule);
        for r in (0..schedule.rounds.len()).step_by(2) {
            state = toggle_match(&schedule, &state, r, r % 2).unwrap();
        }
        let summary = summarize_progress(&schedule, &state);
        let total: u32 = summary.counts.values().sum();
        assert_eq!(total as usize, 2 * summary.completed);
        assert_eq!(summary.completed, state.completed_count());
        assert!(!summary.finished);
    }
}

#[test]
fn completing_everything_finishes_the_schedule() {
    let schedule = generate_schedule(4, Variant::LoadBalanced).unwrap();
    let mut state = CompletionState::empty_for(&schedule);
    for r in 0..schedule.rounds.len() {
        for c in 0..2 {
            state = toggle_match(&schedule, &state, r, c).unwrap();
        }
    }
    let summary = summarize_progress(&schedule, &state);
    assert!(summary.finished);
    assert_eq!(summary.completed, 6);
    assert!(summary.counts.values().all(|&n| n == 3));
}

#[test]
fn reset_clears_flags_and_keeps_shape() {
    let schedule = generate_schedule(7, Variant::Seeded).unwrap();
    let mut state = CompletionState::empty_for(&schedule);
    state = toggle_match(&schedule, &state, 0, 0).unwrap();
    state = toggle_match(&schedule, &state, 2, 1).unwrap();

    let cleared = reset_progress(&state);
    assert_eq!(cleared, CompletionState::empty_for(&schedule));
    assert_eq!(cleared.completed_count(), 0);
    assert!(compute_progress(&schedule, &cleared).values().all(|&n| n == 0));
}

#[test]
fn completion_map_round_trips_through_schedule_shape() {
    let schedule = generate_schedule(6, Variant::FixedOpening).unwrap();
    let mut state = CompletionState::empty_for(&schedule);
    state = toggle_match(&schedule, &state, 0, 1).unwrap();
    state = toggle_match(&schedule, &state, 2, 0).unwrap();

    let map = state.to_map();
    assert_eq!(map.len(), 2);
    assert!(map[&0].contains(&1));
    assert_eq!(CompletionState::from_map(&schedule, &map), state);

    let applied = state.apply_to(&schedule);
    for (r, round) in applied.rounds.iter().enumerate() {
        for (c, m) in round.matches.iter().enumerate() {
            assert_eq!(m.complete, state.is_complete(r, c));
        }
    }
}

#[test]
fn stored_flags_outside_the_schedule_are_ignored() {
    let schedule = generate_schedule(4, Variant::FixedOpening).unwrap();
    let mut map = court_schedule::CompletionMap::new();
    map.entry(0).or_default().insert(5);
    map.entry(9).or_default().insert(0);
    map.entry(1).or_default().insert(1);

    let state = CompletionState::from_map(&schedule, &map);
    assert_eq!(state.completed_count(), 1);
    assert!(state.is_complete(1, 1));
}
