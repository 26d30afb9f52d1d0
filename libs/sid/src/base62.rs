//! Base62 digits over `0-9A-Za-z`, in ASCII order so fixed-width strings sort
//! like the numbers they encode.

use crate::error::SidError;
use crate::types::RADIX;

/// Maps a digit in `0..62` to its character.
///
/// Values of 62 and above are a caller bug.
#[inline]
pub fn encode_digit(digit: u8) -> char {
    debug_assert!(digit < RADIX, "base62 digit out of range: {digit}");
    match digit {
        0..=9 => (b'0' + digit) as char,
        10..=35 => (b'A' + (digit - 10)) as char,
        _ => (b'a' + (digit - 36)) as char,
    }
}

/// Maps a character back to its digit value.
///
/// `offset` is only used to report where a bad character sits in the input.
#[inline]
pub fn decode_digit(c: char, offset: usize) -> Result<u8, SidError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='Z' => Ok(10 + (c as u8 - b'A')),
        'a'..='z' => Ok(36 + (c as u8 - b'a')),
        _ => Err(SidError::InvalidCharacter {
            character: c,
            offset,
        }),
    }
}

/// Writes `value` as exactly `out.len()` digits, most significant first.
///
/// Leading zero digits are always written as `'0'`. Values that need more
/// digits than `out` holds keep only their low-order digits; negative values
/// are reduced the same way (Euclidean remainder).
pub fn encode_fixed(mut value: i64, out: &mut [u8]) {
    let radix = i64::from(RADIX);
    for slot in out.iter_mut().rev() {
        *slot = encode_digit(value.rem_euclid(radix) as u8) as u8;
        value = value.div_euclid(radix);
    }
}

/// Accumulates `value * 62 + digit` over `digits`, left to right.
///
/// `base` is the byte offset of `digits` within the whole input.
pub fn decode_fixed(digits: &str, base: usize) -> Result<i64, SidError> {
    digits.char_indices().try_fold(0_i64, |acc, (i, c)| {
        let digit = decode_digit(c, base + i)?;
        Ok(acc * i64::from(RADIX) + i64::from(digit))
    })
}
