//! Round-robin court scheduler: library with models, scheduling logic and storage.

pub mod config;
pub mod export;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use export::schedule_to_csv;
pub use logic::{
    clamp_team_count, compute_progress, generate_pairs, generate_schedule, reset_progress,
    summarize_progress, toggle_match, validate_team_count, Planner, RoundBuilder, ScheduleCache,
    Snapshot,
};
pub use models::{
    CompletionMap, CompletionState, Match, Pair, Progress, ProgressCounters, Round, Schedule,
    ScheduleError, TeamId, Variant, COURTS, MAX_TEAMS, MIN_TEAMS,
};
pub use store::{JsonFileStore, MemoryStore, ScheduleStore};
