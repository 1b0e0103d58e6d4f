//! Pair generation: every unordered team pair for N teams.

use crate::models::{Pair, ScheduleError};

/// All pairs `(i, j)` with `1 <= i < j <= team_count`, in lexicographic order.
///
/// Needs at least two teams; there is no upper bound here (range checks live in the builder).
pub fn generate_pairs(team_count: u32) -> Result<Vec<Pair>, ScheduleError> {
    if team_count < 2 {
        return Err(ScheduleError::InvalidArgument { team_count });
    }
    let mut pairs = Vec::with_capacity(pair_count(team_count));
    for a in 1..=team_count {
        for b in (a + 1)..=team_count {
            pairs.push(Pair { a, b });
        }
    }
    Ok(pairs)
}

/// Number of pairs `generate_pairs` yields for `team_count` teams.
pub fn pair_count(team_count: u32) -> usize {
    let n = team_count as usize;
    n * n.saturating_sub(1) / 2
}
