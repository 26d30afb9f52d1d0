//! The decoded view of an identifier.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::base62;
use crate::error::SidError;
use crate::types::{COUNTER_LEN, FIXED_LEN, TIMESTAMP_LEN};

/// A parsed Sid.
///
/// Produced by [`Sid::parse`]. Generation goes the other way and yields plain
/// strings; see [`crate::SidGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sid {
    prefix: String,
    timestamp: i64,
    counter: u16,
    random: String,
}

impl Sid {
    /// Parses a Sid from its string form.
    ///
    /// The last 23 bytes are the fixed fields; anything before them is the
    /// prefix, kept verbatim. Only the timestamp and counter digits are
    /// validated, the random segment is copied as-is.
    pub fn parse(input: &str) -> Result<Self, SidError> {
        if input.len() < FIXED_LEN {
            return Err(SidError::TooShort {
                length: input.len(),
            });
        }

        let prefix_len = input.len() - FIXED_LEN;
        let counter_start = prefix_len + TIMESTAMP_LEN;
        let random_start = counter_start + COUNTER_LEN;

        let timestamp =
            base62::decode_fixed(digits(input, prefix_len, counter_start)?, prefix_len)?;
        let counter =
            base62::decode_fixed(digits(input, counter_start, random_start)?, counter_start)?;

        // Both digit regions are ASCII by now, so these offsets fall on char boundaries.
        Ok(Self {
            prefix: input[..prefix_len].to_string(),
            timestamp,
            counter: counter as u16,
            random: input[random_start..].to_string(),
        })
    }

    /// The caller-defined prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Sequence number within the millisecond.
    #[must_use]
    pub const fn counter(&self) -> u16 {
        self.counter
    }

    /// The trailing random characters.
    #[must_use]
    pub fn random(&self) -> &str {
        &self.random
    }

    /// The timestamp as a UTC date-time, if chrono can represent it.
    #[must_use]
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Slices `input[start..end]` for digit decoding.
///
/// When `start` splits a multi-byte character, reports that character as the
/// offending one instead of panicking on the slice.
fn digits(input: &str, start: usize, end: usize) -> Result<&str, SidError> {
    if let Some(region) = input.get(start..end) {
        return Ok(region);
    }

    let offset = (start..end)
        .find(|&i| !input.is_char_boundary(i) || !input.as_bytes()[i].is_ascii())
        .unwrap_or(start);
    let char_start = (0..=offset)
        .rev()
        .find(|&i| input.is_char_boundary(i))
        .unwrap_or(0);
    let character = input[char_start..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);

    Err(SidError::InvalidCharacter { character, offset })
}

impl TryFrom<Option<&str>> for Sid {
    type Error = SidError;

    /// Parses an optional input, failing with [`SidError::NullInput`] on `None`.
    fn try_from(input: Option<&str>) -> Result<Self, Self::Error> {
        Self::parse(input.ok_or(SidError::NullInput)?)
    }
}

impl TryFrom<&str> for Sid {
    type Error = SidError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

impl FromStr for Sid {
    type Err = SidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fixed = [0u8; TIMESTAMP_LEN + COUNTER_LEN];
        base62::encode_fixed(self.timestamp, &mut fixed[..TIMESTAMP_LEN]);
        base62::encode_fixed(i64::from(self.counter), &mut fixed[TIMESTAMP_LEN..]);

        f.write_str(&self.prefix)?;
        // encode_fixed only writes base62 ASCII.
        f.write_str(std::str::from_utf8(&fixed).map_err(|_| fmt::Error)?)?;
        f.write_str(&self.random)
    }
}

impl serde::Serialize for Sid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Sid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1_700_000_000_000 in seven base62 digits.
    const TS_DIGITS: &str = "Tvcokgi";

    fn sample(prefix: &str) -> String {
        format!("{prefix}{TS_DIGITS}0AabcdefghijklmN")
    }

    #[test]
    fn test_parse_fields() {
        let sid = Sid::parse(&sample("AB.")).unwrap();
        assert_eq!(sid.prefix(), "AB.");
        assert_eq!(sid.timestamp(), 1_700_000_000_000);
        assert_eq!(sid.counter(), 10);
        assert_eq!(sid.random(), "abcdefghijklmN");
        assert_eq!(sid.random().len(), 14);
    }

    #[test]
    fn test_parse_without_prefix() {
        let sid = Sid::parse(&sample("")).unwrap();
        assert_eq!(sid.prefix(), "");
        assert_eq!(sid.timestamp(), 1_700_000_000_000);
    }

    #[test]
    fn test_parse_all_zero() {
        let sid = Sid::parse("00000000000000000000000").unwrap();
        assert_eq!(sid.timestamp(), 0);
        assert_eq!(sid.counter(), 0);
        assert_eq!(sid.random(), "00000000000000");
    }

    #[test]
    fn test_parse_max_fields() {
        let sid = Sid::parse("zzzzzzzzz00000000000000").unwrap();
        assert_eq!(sid.timestamp(), crate::MAX_TIMESTAMP - 1);
        assert_eq!(sid.counter(), crate::COUNTER_CAPACITY - 1);
    }

    #[test]
    fn test_parse_null() {
        assert_eq!(Sid::try_from(None::<&str>), Err(SidError::NullInput));
    }

    #[test]
    fn test_parse_some() {
        let input = sample("x-");
        let sid = Sid::try_from(Some(input.as_str())).unwrap();
        assert_eq!(sid.prefix(), "x-");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Sid::parse(""), Err(SidError::TooShort { length: 0 }));
    }

    #[test]
    fn test_parse_one_short() {
        let err = Sid::parse("0000000000000000000000").unwrap_err();
        assert!(err.is_too_short());
    }

    #[test]
    fn test_parse_invalid_timestamp_char() {
        let err = Sid::parse("AB.000#0000000000000000000").unwrap_err();
        assert_eq!(
            err,
            SidError::InvalidCharacter {
                character: '#',
                offset: 6
            }
        );
    }

    #[test]
    fn test_parse_invalid_counter_char() {
        let err = Sid::parse("0000000-000000000000000").unwrap_err();
        assert_eq!(
            err,
            SidError::InvalidCharacter {
                character: '-',
                offset: 7
            }
        );
    }

    #[test]
    fn test_random_segment_is_not_validated() {
        let sid = Sid::parse("000000000##############").unwrap();
        assert_eq!(sid.random(), "##############");
    }

    #[test]
    fn test_prefix_is_opaque() {
        let input = format!("ü#{TS_DIGITS}0000000000000000");
        let sid = Sid::parse(&input).unwrap();
        assert_eq!(sid.prefix(), "ü#");
    }

    #[test]
    fn test_multibyte_char_in_digits() {
        // 'é' is two bytes; the fixed region starts in the middle of it.
        let input = "é0000000000000000000000";
        let err = Sid::parse(input).unwrap_err();
        assert_eq!(
            err,
            SidError::InvalidCharacter {
                character: 'é',
                offset: 1
            }
        );
    }

    #[test]
    fn test_display_roundtrip() {
        let input = sample("AB.");
        let sid: Sid = input.parse().unwrap();
        assert_eq!(sid.to_string(), input);
    }

    #[test]
    fn test_datetime() {
        let sid = Sid::parse(&sample("")).unwrap();
        let dt = sid.datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(dt.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_json_roundtrip() {
        let sid = Sid::parse(&sample("AB.")).unwrap();
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, format!("\"{}\"", sample("AB.")));
        let parsed: Sid = serde_json::from_str(&json).unwrap();
        assert_eq!(sid, parsed);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let result: Result<Sid, _> = serde_json::from_str("\"short\"");
        assert!(result.is_err());
    }
}
