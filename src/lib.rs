mod error;
mod mt19937;
mod seed;

pub use error::InvalidRange;
pub use mt19937::{Mt19937, FALLBACK_SEED, RAND_MAX, RAND_MIN};
pub use seed::{FixedSeed, HostSeed, SeedSource, HOST_SEED_MAX};
