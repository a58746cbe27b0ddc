//! Greedy, lossy decoding of one UTF-8 character.
//!
//! The lead byte selects a starting value from [`LEAD_BYTE_VALUE`]; every
//! following continuation byte (`10xxxxxx`) is folded in six bits at a
//! time until a non-continuation byte or the end of input. The result is
//! validated only after accumulation:
//!
//! - values below `0x80` that arrived in multi-byte form (overlong),
//! - UTF-16 surrogates (`0xD800..=0xDFFF`),
//! - the non-characters `0xFFFE` and `0xFFFF`,
//! - anything above `0x10FFFF`,
//!
//! all become [`REPLACEMENT`]. A continuation byte in lead position is
//! never a valid start and also decodes to [`REPLACEMENT`].

use crate::REPLACEMENT;

/// Initial accumulator value for lead bytes `0xC0..=0xFF`, indexed by
/// `byte - 0xC0` (the low six bits of the lead byte).
///
/// Two-byte leads keep five payload bits, three-byte leads four, four-byte
/// leads three. The `0xF8..=0xFF` tail follows the same pattern for the
/// obsolete five- and six-byte forms; whatever they accumulate is rejected
/// by validation.
#[rustfmt::skip]
static LEAD_BYTE_VALUE: [u8; 64] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17,
    0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f,
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
    0x00, 0x01, 0x02, 0x03, 0x00, 0x01, 0x00, 0x00,
];

/// Largest Unicode scalar value.
const MAX_SCALAR: u32 = 0x10_FFFF;

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode the character starting at `pos`.
///
/// Returns the decoded character and the offset just past the bytes it
/// consumed. The returned offset is always strictly greater than `pos`.
///
/// # Panics
///
/// Panics if `pos >= input.len()`. Callers check for end of input before
/// decoding.
#[inline]
pub fn decode_next(input: &[u8], pos: usize) -> (char, usize) {
    debug_assert!(
        pos < input.len(),
        "decode position {pos} is past the end of input ({})",
        input.len()
    );

    let lead = input[pos];
    let mut next = pos + 1;

    if lead < 0x80 {
        return (char::from(lead), next);
    }
    if lead < 0xC0 {
        // Stray continuation byte.
        return (REPLACEMENT, next);
    }

    let mut value = u32::from(LEAD_BYTE_VALUE[usize::from(lead - 0xC0)]);
    while next < input.len() && is_continuation(input[next]) {
        // Once past the scalar range the value is rejected anyway; stop
        // shifting so long continuation runs cannot overflow.
        if value <= MAX_SCALAR {
            value = (value << 6) | u32::from(input[next] & 0x3F);
        }
        next += 1;
    }

    (validate(value), next)
}

/// Map an accumulated multi-byte value to the character it stands for.
fn validate(value: u32) -> char {
    if value < 0x80 || value & 0xFFFF_F800 == 0xD800 || value & 0xFFFF_FFFE == 0xFFFE {
        return REPLACEMENT;
    }
    char::from_u32(value).unwrap_or(REPLACEMENT)
}
