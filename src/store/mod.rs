//! Persistence of schedules and completion flags, keyed by team count.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{CompletionMap, Schedule, ScheduleError};

/// Key-value store for one schedule and one completion mapping per team count.
///
/// Reads never fail: anything missing or unreadable comes back as absent/empty.
pub trait ScheduleStore {
    fn load(&self, team_count: u32) -> Option<Schedule>;

    fn save(&mut self, team_count: u32, schedule: &Schedule) -> Result<(), ScheduleError>;

    fn load_completion(&self, team_count: u32) -> CompletionMap;

    fn save_completion(
        &mut self,
        team_count: u32,
        completion: &CompletionMap,
    ) -> Result<(), ScheduleError>;

    /// Write schedule and completion for `team_count` together, as one snapshot.
    fn save_snapshot(
        &mut self,
        team_count: u32,
        schedule: &Schedule,
        completion: &CompletionMap,
    ) -> Result<(), ScheduleError> {
        self.save(team_count, schedule)?;
        self.save_completion(team_count, completion)
    }
}
