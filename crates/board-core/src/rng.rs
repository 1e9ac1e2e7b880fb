//! Deterministic per-replica RNG.
//!
//! # Determinism strategy
//!
//! Each replica gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (replica_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive replica indices uniformly across the seed
//! space.  This means:
//!
//! - Replicas never share RNG state, so results do not depend on whether
//!   replicas run sequentially or on a thread pool.
//! - A fixed global seed reproduces every replica's seat draw exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-replica deterministic RNG.
///
/// Create one per replica at the start of its seat draw.  The type is
/// `!Sync` to prevent accidental sharing across threads — each Rayon worker
/// holds the rngs for its own replicas only.
pub struct ReplicaRng(SmallRng);

impl ReplicaRng {
    /// Seed deterministically from the run's global seed and a replica index.
    pub fn new(global_seed: u64, replica: u32) -> Self {
        let seed = global_seed ^ (replica as u64).wrapping_mul(MIXING_CONSTANT);
        ReplicaRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
