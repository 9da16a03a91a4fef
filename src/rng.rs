// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! # Design Philosophy
//!
//! The path engine never owns its randomness: callers pass an `Rng` handle in.
//! This keeps the two modes of use honest:
//! 1. **Reproducibility**: tests and benchmarks seed a `StdRng` and get
//!    bit-identical path matrices on every run
//! 2. **Exploration**: interactive consumers take an entropy-seeded generator
//!    and accept that runs are not repeatable
//!
//! Standard-normal variates come from `rand_distr::StandardNormal` (a
//! Ziggurat-based sampler), one draw per path per time step.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Deterministic generator from a fixed seed. Same seed, same draw sequence.
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Non-reproducible generator seeded from OS entropy, for exploratory runs.
pub fn rng_from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Single standard-normal draw: Z ~ N(0,1)
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
