//! Sources of seeds for generators constructed without an explicit one.

use rand::Rng;

/// Largest seed produced by [`HostSeed`].
pub const HOST_SEED_MAX: i64 = i32::MAX as i64;

/// Supplies a seed when a generator is built without one.
pub trait SeedSource {
    fn next_seed(&mut self) -> i64;
}

/// Non-deterministic seeds in `[0, HOST_SEED_MAX]`, drawn from the thread-local
/// RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSeed;

impl SeedSource for HostSeed {
    fn next_seed(&mut self) -> i64 {
        rand::thread_rng().gen_range(0..=HOST_SEED_MAX)
    }
}

/// Always yields the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub i64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> i64 {
        self.0
    }
}

impl<F> SeedSource for F
where
    F: FnMut() -> i64,
{
    fn next_seed(&mut self) -> i64 {
        self()
    }
}
