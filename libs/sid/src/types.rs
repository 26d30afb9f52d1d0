//! Layout constants for the encoded form.
//!
//! ```text
//! [prefix][timestamp: 7][counter: 2][random: 14]
//! ```

/// Number of symbols in the alphabet.
pub const RADIX: u8 = 62;

/// Digits used for the millisecond timestamp.
pub const TIMESTAMP_LEN: usize = 7;

/// Digits used for the per-millisecond counter.
pub const COUNTER_LEN: usize = 2;

/// Random characters at the end of every Sid.
pub const RANDOM_LEN: usize = 14;

/// Length of everything after the prefix.
pub const FIXED_LEN: usize = TIMESTAMP_LEN + COUNTER_LEN + RANDOM_LEN;

/// Exclusive upper bound of timestamps that survive a round trip (62^7).
pub const MAX_TIMESTAMP: i64 = 62_i64.pow(TIMESTAMP_LEN as u32);

/// Distinct counter values per millisecond (62^2).
pub const COUNTER_CAPACITY: u16 = 62_u16.pow(COUNTER_LEN as u32);
