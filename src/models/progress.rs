//! Completion flags per match and the progress derived from them.

use crate::models::schedule::Schedule;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Stored form of completion: round index -> completed court indices.
pub type CompletionMap = BTreeMap<usize, BTreeSet<usize>>;

/// Completed-match count per team, for every team in `[1, N]`.
pub type ProgressCounters = BTreeMap<TeamId, u32>;

/// One flag per match, shaped like the schedule it belongs to.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletionState {
    pub rounds: Vec<Vec<bool>>,
}

impl CompletionState {
    /// All matches of `schedule` incomplete.
    pub fn empty_for(schedule: &Schedule) -> Self {
        Self {
            rounds: schedule
                .rounds
                .iter()
                .map(|r| vec![false; r.matches.len()])
                .collect(),
        }
    }

    /// Rebuild from the stored mapping. Entries that fall outside the schedule are ignored.
    pub fn from_map(schedule: &Schedule, map: &CompletionMap) -> Self {
        let mut state = Self::empty_for(schedule);
        for (&round, courts) in map {
            if let Some(flags) = state.rounds.get_mut(round) {
                for &court in courts {
                    if let Some(flag) = flags.get_mut(court) {
                        *flag = true;
                    }
                }
            }
        }
        state
    }

    pub fn to_map(&self) -> CompletionMap {
        self.rounds
            .iter()
            .enumerate()
            .filter_map(|(round, flags)| {
                let courts: BTreeSet<usize> = flags
                    .iter()
                    .enumerate()
                    .filter(|&(_, &done)| done)
                    .map(|(court, _)| court)
                    .collect();
                (!courts.is_empty()).then_some((round, courts))
            })
            .collect()
    }

    pub fn is_complete(&self, round: usize, court: usize) -> bool {
        self.rounds
            .get(round)
            .and_then(|r| r.get(court))
            .copied()
            .unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.rounds.iter().flatten().filter(|&&done| done).count()
    }

    /// Schedule copy with each match's `complete` flag set from this state.
    pub fn apply_to(&self, schedule: &Schedule) -> Schedule {
        let mut out = schedule.clone();
        for (r, round) in out.rounds.iter_mut().enumerate() {
            for (c, m) in round.matches.iter_mut().enumerate() {
                m.complete = self.is_complete(r, c);
            }
        }
        out
    }
}

/// Progress view for the surface: per-team counts plus overall completion.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub counts: ProgressCounters,
    pub completed: usize,
    pub total: usize,
    pub finished: bool,
}
