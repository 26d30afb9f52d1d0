//! # sid
//!
//! Compact, lexicographically sortable, time-ordered string identifiers.
//!
//! ## Format
//!
//! ```text
//! [prefix][timestamp: 7][counter: 2][random: 14]
//! ```
//!
//! Every field after the prefix is base62 over `0-9A-Za-z`, fixed width and
//! zero-padded, so byte order of two Sids with the same prefix follows
//! `(timestamp, counter)`.
//!
//! Examples:
//! - `Tvcokgi00x3Kq9LmZ0aB7cD` (no prefix, 23 characters)
//! - `AB.Tvcokgi01P0oQwErTyUiOpA` (prefix `AB.`)
//!
//! This format provides:
//! - Sortability (millisecond timestamp, then a per-millisecond counter)
//! - Uniqueness within a process (about 83 bits of randomness behind the counter)
//! - Node discrimination through a caller-chosen prefix
//!
//! ## Limits
//!
//! - Timestamps round-trip for `0..62^7` milliseconds (until the year 2081).
//! - At most 3844 Sids per millisecond keep their order; the counter wraps
//!   silently after that.
//! - The random segment is not cryptographically secure, and nothing
//!   coordinates separate processes.

mod base62;
mod counter;
mod error;
mod generator;
mod macros;
mod sid;
mod types;

pub use base62::{decode_digit, encode_digit};
pub use counter::MonotonicCounter;
pub use error::SidError;
pub use generator::{create, create_at, create_with_prefix, SidGenerator};
pub use sid::Sid;
pub use types::*;

/// Parses a Sid string. Shorthand for [`Sid::parse`].
pub fn parse(input: &str) -> Result<Sid, SidError> {
    Sid::parse(input)
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
