use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::warn;

use crate::Element;

/// Random permutation of `1..=size`.
///
/// The same seed always yields the same permutation.
pub fn shuffled(size: u32, seed: u64) -> Vec<Element> {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut out: Vec<Element> = (1..=Element::from(size)).collect();
    out.shuffle(&mut rng);
    out
}

/// Seed for runs where none was configured.
pub fn random_seed() -> u64 {
    OsRng.next_u64()
}

/// The configured seed, or a fresh one logged at `warn` so the run can be
/// repeated with `--seed`.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured.unwrap_or_else(|| {
        let seed = random_seed();
        warn!(seed, "no --seed given, drew a random one");
        seed
    })
}
