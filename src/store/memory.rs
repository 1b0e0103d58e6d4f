//! In-process store.

use crate::models::{CompletionMap, Schedule, ScheduleError};
use crate::store::ScheduleStore;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    schedules: HashMap<u32, Schedule>,
    completion: HashMap<u32, CompletionMap>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleStore for MemoryStore {
    fn load(&self, team_count: u32) -> Option<Schedule> {
        self.schedules.get(&team_count).cloned()
    }

    fn save(&mut self, team_count: u32, schedule: &Schedule) -> Result<(), ScheduleError> {
        self.schedules.insert(team_count, schedule.clone());
        Ok(())
    }

    fn load_completion(&self, team_count: u32) -> CompletionMap {
        self.completion.get(&team_count).cloned().unwrap_or_default()
    }

    fn save_completion(
        &mut self,
        team_count: u32,
        completion: &CompletionMap,
    ) -> Result<(), ScheduleError> {
        self.completion.insert(team_count, completion.clone());
        Ok(())
    }
}
