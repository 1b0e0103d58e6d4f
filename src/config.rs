//! Server configuration read from the environment.
//!
//! HOST, PORT, SCHEDULE_FILE, SCHEDULE_VARIANT and DEFAULT_TEAMS; each falls back to a default.

use crate::logic::clamp_team_count;
use crate::models::{Variant, MIN_TEAMS};
use std::path::PathBuf;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub schedule_file: PathBuf,
    pub variant: Variant,
    pub default_teams: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            schedule_file: PathBuf::from("schedules.json"),
            variant: Variant::default(),
            default_teams: MIN_TEAMS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let variant = match lookup("SCHEDULE_VARIANT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("{}; using {:?}", e, defaults.variant);
                defaults.variant
            }),
            None => defaults.variant,
        };
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            schedule_file: lookup("SCHEDULE_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.schedule_file),
            variant,
            default_teams: lookup("DEFAULT_TEAMS")
                .and_then(|n| n.parse().ok())
                .map(clamp_team_count)
                .unwrap_or(defaults.default_teams),
        }
    }
}
