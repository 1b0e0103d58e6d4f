//! Scheduling logic: pair generation, round building, progress, caching.

mod cache;
mod pairs;
mod planner;
mod progress;
mod rounds;
mod seeding;

pub use cache::ScheduleCache;
pub use pairs::{generate_pairs, pair_count};
pub use planner::{Planner, Snapshot};
pub use progress::{compute_progress, reset_progress, summarize_progress, toggle_match};
pub use rounds::{
    clamp_team_count, generate_schedule, validate_team_count, RoundBuilder, FIXED_OPENING,
};
pub use seeding::seeded_order;
