//! Deterministic RNG streams.
//!
//! Every cell evaluation draws from its own ChaCha8 stream seeded from
//! `(master seed, tick, phase, cell index)`. Draw sequences therefore cannot
//! depend on which worker thread processes a cell or in what order, which is
//! what makes parallel phases reproducible: identical seed and configuration
//! give identical runs at any thread count.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// SplitMix64 finalizer. Decorrelates the structured (seed, tick, phase,
/// cell) tuples before they become ChaCha seeds.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// The RNG stream for one cell evaluation.
pub fn cell_stream(seed: u64, tick: u64, phase: u64, cell: u64) -> ChaCha8Rng {
    let mut state = splitmix64(seed);
    state = splitmix64(state ^ tick);
    state = splitmix64(state ^ phase);
    state = splitmix64(state ^ cell);
    ChaCha8Rng::seed_from_u64(state)
}

/// The RNG stream for initial population placement.
pub fn placement_stream(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(splitmix64(seed))
}
