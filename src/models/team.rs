//! Team identity and unordered team pairs.

use serde::{Deserialize, Serialize};

/// Team identifier in `[1, N]`.
pub type TeamId = u32;

/// An unordered pair of distinct teams, always stored smaller id first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Pair {
    pub a: TeamId,
    pub b: TeamId,
}

impl Pair {
    /// Canonical pair for two teams in either order. `None` if both ids are the same team.
    pub fn new(x: TeamId, y: TeamId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.a == team || self.b == team
    }

    /// True when the two pairs share a team (cannot be played in the same round).
    pub fn overlaps(&self, other: &Pair) -> bool {
        self.involves(other.a) || self.involves(other.b)
    }

    pub fn teams(&self) -> [TeamId; 2] {
        [self.a, self.b]
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.a, self.b)
    }
}
