//! Round building: greedy packing of pairs into full, team-disjoint rounds.

use crate::logic::pairs::generate_pairs;
use crate::logic::seeding::seeded_order;
use crate::models::{
    Match, Pair, Round, Schedule, ScheduleError, TeamId, Variant, COURTS, MAX_TEAMS, MIN_TEAMS,
};
use std::collections::HashMap;

/// Pairs forced into round 1 by `Variant::FixedOpening`.
pub const FIXED_OPENING: [Pair; COURTS] = [Pair { a: 1, b: 2 }, Pair { a: 3, b: 4 }];

/// Reject team counts outside `[MIN_TEAMS, MAX_TEAMS]`.
pub fn validate_team_count(team_count: u32) -> Result<u32, ScheduleError> {
    if (MIN_TEAMS..=MAX_TEAMS).contains(&team_count) {
        Ok(team_count)
    } else {
        Err(ScheduleError::InvalidArgument { team_count })
    }
}

/// Force a user-supplied team count into the supported range.
pub fn clamp_team_count(team_count: u32) -> u32 {
    team_count.clamp(MIN_TEAMS, MAX_TEAMS)
}

/// Greedy round builder.
///
/// Each round scans the remaining pairs in order and takes a pair when neither team is already
/// on a court this round, until all courts are filled. A round that cannot be filled ends the
/// build; pairs still remaining at that point are never scheduled.
#[derive(Clone, Debug)]
pub struct RoundBuilder {
    remaining: Vec<Pair>,
    played: HashMap<TeamId, u32>,
    /// Re-sort remaining pairs by matches played before every round.
    rebalance: bool,
    opening: Vec<Pair>,
}

impl RoundBuilder {
    /// Builder that scans `pairs` in the given order without re-sorting.
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self {
            remaining: pairs,
            played: HashMap::new(),
            rebalance: false,
            opening: Vec::new(),
        }
    }

    /// Prefer pairs whose teams have played the fewest matches so far.
    pub fn load_balanced(mut self) -> Self {
        self.rebalance = true;
        self
    }

    /// Emit `opening` as round 1 ahead of any greedy round. Its pairs leave the candidate pool
    /// and count as one match played for each of their teams.
    pub fn with_opening(mut self, opening: &[Pair]) -> Self {
        self.remaining.retain(|p| !opening.contains(p));
        for pair in opening {
            for team in pair.teams() {
                *self.played.entry(team).or_insert(0) += 1;
            }
        }
        self.opening = opening.to_vec();
        self
    }

    /// Pairs not yet placed in a round.
    pub fn remaining(&self) -> &[Pair] {
        &self.remaining
    }

    /// Matches played so far by `team` in the rounds built.
    pub fn played(&self, team: TeamId) -> u32 {
        self.played.get(&team).copied().unwrap_or(0)
    }

    /// Build the next round, or `ScheduleExhausted` if the remaining pairs can't fill every court.
    /// On exhaustion nothing is consumed.
    pub fn next_round(&mut self) -> Result<Round, ScheduleError> {
        if self.rebalance {
            // sort_by_key is stable: equal loads keep their previous relative order
            let played = &self.played;
            self.remaining.sort_by_key(|p| {
                played.get(&p.a).copied().unwrap_or(0) + played.get(&p.b).copied().unwrap_or(0)
            });
        }

        let mut round = Round::default();
        let mut taken = Vec::with_capacity(COURTS);
        for (idx, pair) in self.remaining.iter().enumerate() {
            if round.is_full() {
                break;
            }
            if round.has_team(pair.a) || round.has_team(pair.b) {
                continue;
            }
            round.matches.push(Match::new(*pair));
            taken.push(idx);
        }
        if !round.is_full() {
            return Err(ScheduleError::ScheduleExhausted);
        }

        for idx in taken.into_iter().rev() {
            self.remaining.remove(idx);
        }
        for m in &round.matches {
            for team in m.pair.teams() {
                *self.played.entry(team).or_insert(0) += 1;
            }
        }
        Ok(round)
    }

    /// Run to exhaustion and return every round built, opening round first.
    pub fn build(mut self) -> Vec<Round> {
        let mut rounds = Vec::new();
        if !self.opening.is_empty() {
            rounds.push(Round::from_pairs(&self.opening));
        }
        while let Ok(round) = self.next_round() {
            rounds.push(round);
        }
        if !self.remaining.is_empty() {
            log::debug!(
                "Round builder stopped after {} rounds with {} pairs unscheduled",
                rounds.len(),
                self.remaining.len()
            );
        }
        rounds
    }
}

/// Generate the schedule for `team_count` teams with the given policy.
///
/// Deterministic for every variant: the same inputs always yield the same rounds.
pub fn generate_schedule(team_count: u32, variant: Variant) -> Result<Schedule, ScheduleError> {
    let team_count = validate_team_count(team_count)?;
    let pairs = generate_pairs(team_count)?;
    let builder = match variant {
        Variant::FixedOpening => RoundBuilder::new(pairs)
            .load_balanced()
            .with_opening(&FIXED_OPENING),
        Variant::LoadBalanced => RoundBuilder::new(pairs).load_balanced(),
        Variant::Seeded => RoundBuilder::new(seeded_order(pairs, u64::from(team_count))),
    };
    let rounds = builder.build();
    log::debug!(
        "Generated {:?} schedule for {} teams: {} rounds",
        variant,
        team_count,
        rounds.len()
    );
    Ok(Schedule::new(team_count, variant, rounds))
}
