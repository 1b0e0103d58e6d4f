//! JSON file store: one document holding every team count's snapshot.
//!
//! The file is read once when the store is opened and rewritten in full on every save.

use crate::models::{CompletionMap, Schedule, ScheduleError};
use crate::store::ScheduleStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Stored entry for one team count. Snapshots stay as raw JSON until read so that one malformed
/// entry does not take the others down with it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct StoredEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schedule: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<u32, StoredEntry>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing or unreadable file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("Ignoring malformed schedule file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::warn!("Could not read schedule file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        log::info!(
            "Opened schedule store {} ({} team counts stored)",
            path.display(),
            entries.len()
        );
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// When the entry for `team_count` was last written.
    pub fn saved_at(&self, team_count: u32) -> Option<DateTime<Utc>> {
        self.entries.get(&team_count).and_then(|e| e.saved_at)
    }

    fn persist(&self) -> Result<(), ScheduleError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ScheduleError::Storage(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| {
            ScheduleError::Storage(format!("writing {}: {}", self.path.display(), e))
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(
        &self,
        team_count: u32,
        what: &str,
        value: Option<&serde_json::Value>,
    ) -> Option<T> {
        let value = value?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!(
                    "Discarding malformed stored {} for {} teams: {}",
                    what,
                    team_count,
                    e
                );
                None
            }
        }
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self, team_count: u32) -> Option<Schedule> {
        let entry = self.entries.get(&team_count)?;
        self.decode(team_count, "schedule", entry.schedule.as_ref())
    }

    fn save(&mut self, team_count: u32, schedule: &Schedule) -> Result<(), ScheduleError> {
        let value =
            serde_json::to_value(schedule).map_err(|e| ScheduleError::Storage(e.to_string()))?;
        let entry = self.entries.entry(team_count).or_default();
        entry.schedule = Some(value);
        entry.saved_at = Some(Utc::now());
        self.persist()
    }

    fn load_completion(&self, team_count: u32) -> CompletionMap {
        self.entries
            .get(&team_count)
            .and_then(|entry| self.decode(team_count, "completion", entry.completion.as_ref()))
            .unwrap_or_default()
    }

    fn save_completion(
        &mut self,
        team_count: u32,
        completion: &CompletionMap,
    ) -> Result<(), ScheduleError> {
        let value =
            serde_json::to_value(completion).map_err(|e| ScheduleError::Storage(e.to_string()))?;
        let entry = self.entries.entry(team_count).or_default();
        entry.completion = Some(value);
        entry.saved_at = Some(Utc::now());
        self.persist()
    }

    /// Both parts land in the entry before the file is rewritten once.
    fn save_snapshot(
        &mut self,
        team_count: u32,
        schedule: &Schedule,
        completion: &CompletionMap,
    ) -> Result<(), ScheduleError> {
        let schedule =
            serde_json::to_value(schedule).map_err(|e| ScheduleError::Storage(e.to_string()))?;
        let completion =
            serde_json::to_value(completion).map_err(|e| ScheduleError::Storage(e.to_string()))?;
        let entry = self.entries.entry(team_count).or_default();
        entry.schedule = Some(schedule);
        entry.completion = Some(completion);
        entry.saved_at = Some(Utc::now());
        self.persist()
    }
}
