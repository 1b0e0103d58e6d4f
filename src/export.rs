//! CSV export of a schedule.

use crate::models::{CompletionState, Schedule, ScheduleError, TeamId};
use serde::Serialize;

#[derive(Serialize)]
struct MatchRow {
    round: usize,
    court: usize,
    team_a: TeamId,
    team_b: TeamId,
    complete: bool,
}

/// One row per match, rounds and courts numbered from 1.
pub fn schedule_to_csv(
    schedule: &Schedule,
    completion: &CompletionState,
) -> Result<String, ScheduleError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (r, round) in schedule.rounds.iter().enumerate() {
        for (c, m) in round.matches.iter().enumerate() {
            writer
                .serialize(MatchRow {
                    round: r + 1,
                    court: c + 1,
                    team_a: m.pair.a,
                    team_b: m.pair.b,
                    complete: completion.is_complete(r, c),
                })
                .map_err(|e| ScheduleError::Export(e.to_string()))?;
        }
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ScheduleError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ScheduleError::Export(e.to_string()))
}
