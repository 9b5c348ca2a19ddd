//! The single, per-world deterministic PRNG, per spec §4.F.
//!
//! Unlike a per-agent RNG scheme, the world holds exactly one `SimRng` and
//! advances it only at the two points the spec allows: spawn-wave resolution
//! (step 2) and pursuer subtype selection. Every other tick step is a pure
//! function of existing state, which is what makes I5 (determinism) provable.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG, seeded once from `WorldConfig::rng_seed`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a non-empty slice.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Sample an angle uniformly in `[0, 2π)`, used by the spawn service's
    /// rejection sampling.
    #[inline]
    pub fn gen_angle(&mut self) -> f32 {
        self.gen_range(0.0f32..std::f32::consts::TAU)
    }
}
