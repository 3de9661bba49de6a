//! MT19937 pseudo-random number generator, 32-bit-safe variant.
//!
//! Seeding splits each state word into 16-bit halves so no intermediate
//! product leaves 32 bits. The state is regenerated in bulk once all 624 words
//! have been consumed.

use crate::error::InvalidRange;
use crate::seed::{HostSeed, SeedSource};

use rand::{RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const UMASK: u32 = 0x80000000;
const LMASK: u32 = 0x7fffffff;
const A: u32 = 0x9908b0df;
const SEED_MUL_LO: u32 = 0x8965;
const SEED_MUL_HI: u32 = 0x6c07;
const U: u32 = 11;
const S: u32 = 7;
const T: u32 = 15;
const L: u32 = 18;
const D: u32 = 0x001fffff;
const B: u32 = 0x9d2c5680;
const C: u32 = 0xefc60000;
const E: u32 = 0x00003fff;

/// Seed used when a generator is drawn from before it was ever initialised.
pub const FALLBACK_SEED: i64 = 5489;
/// Lower bound of the full range covered by [`Mt19937::rand_default`].
pub const RAND_MIN: i64 = 0;
/// Upper bound of the full range covered by [`Mt19937::rand_default`].
pub const RAND_MAX: i64 = u32::MAX as i64;

#[derive(Debug, Clone)]
struct Words {
    words: [u32; N],
    cursor: usize,
}

impl Words {
    fn seeded(seed: i64) -> Self {
        let mut words = [0; N];
        words[0] = (seed & 0xffffffff) as u32;

        let mut lo = (seed & 0xffff) as u32;
        let mut hi = ((seed >> 16) & 0xffff) as u32;
        for (i, word) in words.iter_mut().enumerate().skip(1) {
            // 16-bit halves of: F * (x ^ (x >> 30)) + i
            lo ^= hi >> 14;
            let carry = SEED_MUL_LO * lo + i as u32;
            hi = (SEED_MUL_LO * hi + SEED_MUL_HI * lo + (carry >> 16)) & 0xffff;
            lo = carry & 0xffff;
            *word = (hi << 16) | lo;
        }

        Self { words, cursor: N }
    }

    fn refill(&mut self) {
        let w = &mut self.words;
        for i in 0..(N - M) {
            w[i] = twist(w[i + M], w[i], w[i + 1]);
        }
        for i in (N - M)..(N - 1) {
            w[i] = twist(w[i + M - N], w[i], w[i + 1]);
        }
        w[N - 1] = twist(w[M - 1], w[N - 1], w[0]);
        self.cursor = 0;
    }

    fn next_word(&mut self) -> u32 {
        if self.cursor >= N {
            self.refill();
        }
        let word = self.words[self.cursor];
        self.cursor += 1;
        word
    }
}

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Ready(Box<Words>),
}

impl State {
    fn ready(&mut self) -> &mut Words {
        if let State::Uninitialized = self {
            *self = State::Ready(Box::new(Words::seeded(FALLBACK_SEED)));
        }
        match self {
            State::Ready(words) => words,
            State::Uninitialized => unreachable!("state initialised above"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Mt19937 {
    seed: i64,
    state: State,
}

impl Mt19937 {
    /// Create a generator. Without a seed, one is drawn from [`HostSeed`].
    pub fn new(seed: Option<i64>) -> Self {
        Self::with_seed_source(seed, &mut HostSeed)
    }

    /// Create a generator, drawing a seed from `source` if none is given.
    pub fn with_seed_source<S: SeedSource>(seed: Option<i64>, source: &mut S) -> Self {
        let seed = seed.unwrap_or_else(|| source.next_seed());
        let mut rng = Self {
            seed,
            state: State::Uninitialized,
        };
        rng.init(seed);
        rng
    }

    /// Re-seed the state. The seed reported by [`Mt19937::seed`] is unchanged.
    pub fn init(&mut self, seed: i64) {
        self.state = State::Ready(Box::new(Words::seeded(seed)));
    }

    /// The seed the generator was constructed with.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn int32(&mut self) -> u32 {
        temper(self.state.ready().next_word())
    }

    /// Generate a u32 in range [0, 2^31 - 1].
    pub fn int31(&mut self) -> u32 {
        (self.int32() >> 1) & LMASK
    }

    /// Generate an integer in the given range (inclusive).
    ///
    /// Reduces a 32-bit draw modulo the range size, so ranges whose size does
    /// not divide 2^32 are slightly biased towards their low end.
    pub fn rand(&mut self, min: i64, max: i64) -> Result<i64, InvalidRange> {
        if min > max {
            return Err(InvalidRange);
        }
        let span = i128::from(max) - i128::from(min) + 1;
        let offset = i128::from(self.int32()) % span;
        Ok((i128::from(min) + offset) as i64)
    }

    /// Generate an integer in [`RAND_MIN`, `RAND_MAX`].
    pub fn rand_default(&mut self) -> i64 {
        i64::from(self.int32())
    }

    /// Generate a float in the given range (inclusive).
    pub fn rand_float(&mut self, min: f64, max: f64) -> Result<f64, InvalidRange> {
        if min > max {
            return Err(InvalidRange);
        }
        let frac = f64::from(self.int32()) / f64::from(u32::MAX);
        Ok(min + frac * (max - min))
    }

    /// Generate a float in range [0, 1].
    pub fn rand_float_default(&mut self) -> f64 {
        f64::from(self.int32()) / f64::from(u32::MAX)
    }
}

impl Default for Mt19937 {
    /// A generator seeded with [`FALLBACK_SEED`] on its first draw.
    fn default() -> Self {
        Self {
            seed: FALLBACK_SEED,
            state: State::Uninitialized,
        }
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.int32()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.int32());
        let hi = u64::from(self.int32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.int32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(Some(i64::from_le_bytes(seed)))
    }
}

fn twist(m: u32, u: u32, v: u32) -> u32 {
    let y = (u & UMASK) | (v & LMASK);
    let mag = if v & 1 > 0 { A } else { 0 };
    m ^ ((y >> 1) & LMASK) ^ mag
}

fn temper(mut y: u32) -> u32 {
    y ^= (y >> U) & D;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^ ((y >> L) & E)
}
