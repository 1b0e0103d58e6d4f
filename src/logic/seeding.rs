//! Deterministic ordering of the candidate pairs, keyed by the team count.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// PRNG used for schedule seeding. ChaCha8 output is stable across platforms and releases.
fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fisher-Yates shuffle of `items` driven by `seed`. Same seed and input, same output.
pub fn seeded_order<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = seeded_rng(seed);
    items.shuffle(&mut rng);
    items
}
