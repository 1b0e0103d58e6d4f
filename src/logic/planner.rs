//! Planner: the stateful wrapper between the surface, the cache and the store.

use crate::export::schedule_to_csv;
use crate::logic::cache::ScheduleCache;
use crate::logic::progress::{reset_progress, summarize_progress, toggle_match};
use crate::logic::rounds::validate_team_count;
use crate::models::{CompletionState, Progress, Schedule, ScheduleError, Variant};
use crate::store::ScheduleStore;
use serde::Serialize;

/// Everything the surface shows for one team count.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    /// Schedule with each match's `complete` flag filled in.
    pub schedule: Schedule,
    pub completion: CompletionState,
    pub progress: Progress,
}

impl Snapshot {
    fn new(schedule: &Schedule, completion: CompletionState) -> Self {
        Self {
            schedule: completion.apply_to(schedule),
            progress: summarize_progress(schedule, &completion),
            completion,
        }
    }
}

/// Owns the store and the schedule cache. Each mutation is computed in memory and then
/// written back as a whole.
pub struct Planner<S> {
    store: S,
    cache: ScheduleCache,
}

impl<S: ScheduleStore> Planner<S> {
    /// Planner with every supported team count precomputed for `variant`.
    pub fn new(store: S, variant: Variant) -> Self {
        Self::with_cache(store, ScheduleCache::precomputed(variant))
    }

    pub fn with_cache(store: S, cache: ScheduleCache) -> Self {
        Self { store, cache }
    }

    pub fn variant(&self) -> Variant {
        self.cache.variant()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored schedule and completion, or a fresh cached schedule (persisted) if nothing usable
    /// is stored.
    fn current(&mut self, team_count: u32) -> Result<(Schedule, CompletionState), ScheduleError> {
        let team_count = validate_team_count(team_count)?;
        let stored = self
            .store
            .load(team_count)
            .filter(|s| s.team_count == team_count && s.is_well_formed());
        match stored {
            Some(schedule) => {
                let map = self.store.load_completion(team_count);
                let completion = CompletionState::from_map(&schedule, &map);
                Ok((schedule, completion))
            }
            None => {
                log::info!("No stored schedule for {} teams, generating", team_count);
                self.fresh(team_count)
            }
        }
    }

    fn fresh(&mut self, team_count: u32) -> Result<(Schedule, CompletionState), ScheduleError> {
        let schedule = self.cache.get_or_build(team_count)?.as_ref().clone();
        let completion = CompletionState::empty_for(&schedule);
        self.persist(team_count, &schedule, &completion)?;
        Ok((schedule, completion))
    }

    fn persist(
        &mut self,
        team_count: u32,
        schedule: &Schedule,
        completion: &CompletionState,
    ) -> Result<(), ScheduleError> {
        self.store
            .save_snapshot(team_count, &completion.apply_to(schedule), &completion.to_map())
    }

    /// Load (or generate) the schedule for `team_count`.
    pub fn open(&mut self, team_count: u32) -> Result<Snapshot, ScheduleError> {
        let (schedule, completion) = self.current(team_count)?;
        Ok(Snapshot::new(&schedule, completion))
    }

    /// Replace the stored schedule with the cached one and clear every completion flag.
    /// The pairing is the same on every call for a given team count.
    pub fn regenerate(&mut self, team_count: u32) -> Result<Snapshot, ScheduleError> {
        let team_count = validate_team_count(team_count)?;
        let (schedule, completion) = self.fresh(team_count)?;
        log::info!(
            "Regenerated schedule for {} teams ({} rounds)",
            team_count,
            schedule.rounds.len()
        );
        Ok(Snapshot::new(&schedule, completion))
    }

    pub fn toggle(
        &mut self,
        team_count: u32,
        round: usize,
        court: usize,
    ) -> Result<Snapshot, ScheduleError> {
        let (schedule, completion) = self.current(team_count)?;
        let completion = toggle_match(&schedule, &completion, round, court)?;
        self.persist(team_count, &schedule, &completion)?;
        Ok(Snapshot::new(&schedule, completion))
    }

    /// Mark every match incomplete, keeping the schedule.
    pub fn reset(&mut self, team_count: u32) -> Result<Snapshot, ScheduleError> {
        let (schedule, completion) = self.current(team_count)?;
        let completion = reset_progress(&completion);
        self.persist(team_count, &schedule, &completion)?;
        Ok(Snapshot::new(&schedule, completion))
    }

    pub fn progress(&mut self, team_count: u32) -> Result<Progress, ScheduleError> {
        let (schedule, completion) = self.current(team_count)?;
        Ok(summarize_progress(&schedule, &completion))
    }

    pub fn export_csv(&mut self, team_count: u32) -> Result<String, ScheduleError> {
        let (schedule, completion) = self.current(team_count)?;
        schedule_to_csv(&schedule, &completion)
    }
}
