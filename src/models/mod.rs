//! Data structures for the court scheduler: teams, pairs, rounds, schedules, completion state.

mod progress;
mod schedule;
mod team;

pub use progress::{CompletionMap, CompletionState, Progress, ProgressCounters};
pub use schedule::{
    Match, Round, Schedule, ScheduleError, Variant, COURTS, MAX_TEAMS, MIN_TEAMS,
};
pub use team::{Pair, TeamId};
