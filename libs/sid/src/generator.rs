//! Sid generation.

use std::sync::LazyLock;

use chrono::Utc;
use rand::Rng;

use crate::base62;
use crate::counter::MonotonicCounter;
use crate::types::{COUNTER_LEN, FIXED_LEN, RADIX, RANDOM_LEN, TIMESTAMP_LEN};

/// The generator behind [`crate::create`] and friends.
static DEFAULT_GENERATOR: LazyLock<SidGenerator> = LazyLock::new(SidGenerator::new);

/// Produces Sid strings.
///
/// A generator owns its [`MonotonicCounter`]; Sids from one generator with the
/// same prefix sort in creation order (up to 3844 per millisecond). Random
/// characters come from the calling thread's `rand::rng()`, so no RNG state is
/// shared between threads.
#[derive(Debug, Default)]
pub struct SidGenerator {
    counter: MonotonicCounter,
}

impl SidGenerator {
    /// Creates a generator with its own counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator around an existing counter.
    #[must_use]
    pub const fn with_counter(counter: MonotonicCounter) -> Self {
        Self { counter }
    }

    /// Returns the process-wide generator.
    pub fn global() -> &'static SidGenerator {
        &DEFAULT_GENERATOR
    }

    /// Creates a Sid for the current time.
    pub fn create(&self, prefix: &str) -> String {
        self.create_at(Utc::now().timestamp_millis(), prefix)
    }

    /// Creates a Sid for `timestamp` (milliseconds since the Unix epoch).
    ///
    /// Only timestamps in `0..MAX_TIMESTAMP` survive a round trip through
    /// [`crate::Sid::parse`]; others keep their low seven base62 digits.
    pub fn create_at(&self, timestamp: i64, prefix: &str) -> String {
        self.create_at_with_rng(timestamp, prefix, &mut rand::rng())
    }

    /// Creates a Sid drawing the random segment from `rng`.
    pub fn create_at_with_rng<R>(&self, timestamp: i64, prefix: &str, rng: &mut R) -> String
    where
        R: Rng,
    {
        let counter = self.counter.next(timestamp);

        let mut fixed = [0u8; FIXED_LEN];
        let (ts_digits, rest) = fixed.split_at_mut(TIMESTAMP_LEN);
        let (counter_digits, random_digits) = rest.split_at_mut(COUNTER_LEN);
        debug_assert_eq!(random_digits.len(), RANDOM_LEN);

        base62::encode_fixed(timestamp, ts_digits);
        base62::encode_fixed(i64::from(counter), counter_digits);
        for slot in random_digits.iter_mut() {
            *slot = base62::encode_digit(rng.random_range(0..RADIX)) as u8;
        }

        let mut out = String::with_capacity(prefix.len() + FIXED_LEN);
        out.push_str(prefix);
        out.extend(fixed.iter().map(|&b| char::from(b)));
        out
    }
}

/// Creates a Sid for the current time with no prefix.
pub fn create() -> String {
    SidGenerator::global().create("")
}

/// Creates a Sid for the current time behind `prefix`.
pub fn create_with_prefix(prefix: &str) -> String {
    SidGenerator::global().create(prefix)
}

/// Creates a Sid for an explicit timestamp.
pub fn create_at(timestamp: i64, prefix: &str) -> String {
    SidGenerator::global().create_at(timestamp, prefix)
}
