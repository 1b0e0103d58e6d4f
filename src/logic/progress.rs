//! Completion toggling and progress derivation.

use crate::models::{CompletionState, Progress, ProgressCounters, Schedule, ScheduleError};

/// Flip the completion flag of the match at (`round`, `court`). Returns the new state; the
/// input is left untouched.
pub fn toggle_match(
    schedule: &Schedule,
    completion: &CompletionState,
    round: usize,
    court: usize,
) -> Result<CompletionState, ScheduleError> {
    if schedule.get(round, court).is_none() {
        return Err(ScheduleError::MatchNotFound { round, court });
    }
    // Reshape so the flags always mirror the schedule, whatever state we were handed.
    let mut next = CompletionState::from_map(schedule, &completion.to_map());
    let flag = &mut next.rounds[round][court];
    *flag = !*flag;
    Ok(next)
}

/// Every match incomplete; the shape of the state is kept.
pub fn reset_progress(completion: &CompletionState) -> CompletionState {
    CompletionState {
        rounds: completion
            .rounds
            .iter()
            .map(|flags| vec![false; flags.len()])
            .collect(),
    }
}

/// Completed matches per team, every team in `[1, N]` present.
pub fn compute_progress(schedule: &Schedule, completion: &CompletionState) -> ProgressCounters {
    let mut counts: ProgressCounters = (1..=schedule.team_count).map(|t| (t, 0)).collect();
    for (r, round) in schedule.rounds.iter().enumerate() {
        for (c, m) in round.matches.iter().enumerate() {
            if !completion.is_complete(r, c) {
                continue;
            }
            for team in m.pair.teams() {
                *counts.entry(team).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Per-team counts plus the overall completion state.
pub fn summarize_progress(schedule: &Schedule, completion: &CompletionState) -> Progress {
    let counts = compute_progress(schedule, completion);
    let total = schedule.match_count();
    let completed = schedule
        .rounds
        .iter()
        .enumerate()
        .map(|(r, round)| {
            (0..round.matches.len())
                .filter(|&c| completion.is_complete(r, c))
                .count()
        })
        .sum();
    Progress {
        counts,
        completed,
        total,
        finished: total > 0 && completed == total,
    }
}
