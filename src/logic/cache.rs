//! Memoized schedules, one immutable entry per team count.

use crate::logic::rounds::generate_schedule;
use crate::models::{Schedule, ScheduleError, Variant, MAX_TEAMS, MIN_TEAMS};
use std::collections::HashMap;
use std::sync::Arc;

/// Schedules already generated for one variant, keyed by team count.
#[derive(Clone, Debug)]
pub struct ScheduleCache {
    variant: Variant,
    entries: HashMap<u32, Arc<Schedule>>,
}

impl ScheduleCache {
    /// Empty cache; entries are built on first request.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            entries: HashMap::new(),
        }
    }

    /// Cache with every supported team count built up front.
    pub fn precomputed(variant: Variant) -> Self {
        let mut cache = Self::new(variant);
        for team_count in MIN_TEAMS..=MAX_TEAMS {
            if let Ok(schedule) = generate_schedule(team_count, variant) {
                cache.entries.insert(team_count, Arc::new(schedule));
            }
        }
        log::info!(
            "Precomputed {} {:?} schedules",
            cache.entries.len(),
            variant
        );
        cache
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, team_count: u32) -> Option<Arc<Schedule>> {
        self.entries.get(&team_count).cloned()
    }

    /// Cached schedule for `team_count`, generating it on first use.
    pub fn get_or_build(&mut self, team_count: u32) -> Result<Arc<Schedule>, ScheduleError> {
        if let Some(schedule) = self.entries.get(&team_count) {
            return Ok(Arc::clone(schedule));
        }
        let schedule = Arc::new(generate_schedule(team_count, self.variant)?);
        self.entries.insert(team_count, Arc::clone(&schedule));
        Ok(schedule)
    }
}
