//! Schedule, Round, Match, generation Variant and ScheduleError.

use crate::models::team::{Pair, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Concurrent matches per round.
pub const COURTS: usize = 2;
/// Smallest supported team count.
pub const MIN_TEAMS: u32 = 4;
/// Largest supported team count.
pub const MAX_TEAMS: u32 = 15;

/// Errors that can occur while building or addressing a schedule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Team count outside the supported range.
    InvalidArgument { team_count: u32 },
    /// No further full round can be formed from the remaining pairs.
    ScheduleExhausted,
    /// No match at this (round, court) position.
    MatchNotFound { round: usize, court: usize },
    /// Persisting a snapshot failed.
    Storage(String),
    /// Rendering CSV failed.
    Export(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidArgument { team_count } => write!(
                f,
                "Team count {} is outside the supported range {}..={}",
                team_count, MIN_TEAMS, MAX_TEAMS
            ),
            ScheduleError::ScheduleExhausted => write!(f, "No full round can be formed"),
            ScheduleError::MatchNotFound { round, court } => {
                write!(f, "No match at round {} court {}", round, court)
            }
            ScheduleError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ScheduleError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Generation policy used by the round builder.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Round 1 is forced to (1,2),(3,4); the rest is load-balanced.
    FixedOpening,
    /// Pairs with the fewest matches played between their teams go first.
    LoadBalanced,
    /// Pairs shuffled once with a PRNG keyed by the team count.
    #[default]
    Seeded,
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed-opening" | "fixed" => Ok(Variant::FixedOpening),
            "load-balanced" | "balanced" => Ok(Variant::LoadBalanced),
            "seeded" => Ok(Variant::Seeded),
            other => Err(format!("unknown schedule variant '{}'", other)),
        }
    }
}

/// One match on one court.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub pair: Pair,
    pub complete: bool,
}

impl Match {
    pub fn new(pair: Pair) -> Self {
        Self {
            pair,
            complete: false,
        }
    }
}

/// Matches played at the same time, at most one per court.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub matches: Vec<Match>,
}

impl Round {
    pub fn from_pairs(pairs: &[Pair]) -> Self {
        Self {
            matches: pairs.iter().copied().map(Match::new).collect(),
        }
    }

    /// True if some match in this round already involves `team`.
    pub fn has_team(&self, team: TeamId) -> bool {
        self.matches.iter().any(|m| m.pair.involves(team))
    }

    pub fn is_full(&self) -> bool {
        self.matches.len() >= COURTS
    }
}

/// Ordered rounds for one team count.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub team_count: u32,
    pub variant: Variant,
    pub rounds: Vec<Round>,
}

impl Schedule {
    pub fn new(team_count: u32, variant: Variant, rounds: Vec<Round>) -> Self {
        Self {
            team_count,
            variant,
            rounds,
        }
    }

    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }

    pub fn get(&self, round: usize, court: usize) -> Option<&Match> {
        self.rounds.get(round).and_then(|r| r.matches.get(court))
    }

    /// Every scheduled pair in round order, court order within a round.
    pub fn pairs(&self) -> impl Iterator<Item = Pair> + '_ {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter().map(|m| m.pair))
    }

    /// Checks the structural invariants: full disjoint rounds, canonical pairs of known teams,
    /// no pair scheduled twice.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = HashSet::new();
        for round in &self.rounds {
            if round.matches.len() != COURTS {
                return false;
            }
            for (i, m) in round.matches.iter().enumerate() {
                let p = m.pair;
                if p.a == 0 || p.a >= p.b || p.b > self.team_count {
                    return false;
                }
                if round.matches[..i].iter().any(|o| o.pair.overlaps(&p)) {
                    return false;
                }
                if !seen.insert(p) {
                    return false;
                }
            }
        }
        true
    }
}
