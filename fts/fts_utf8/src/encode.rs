//! Canonical UTF-8 encoding into a growable buffer.

/// Number of bytes [`encode_into`] writes for `c`.
#[inline]
pub fn encoded_len(c: char) -> usize {
    match u32::from(c) {
        0..0x80 => 1,
        0x80..0x800 => 2,
        0x800..0x1_0000 => 3,
        _ => 4,
    }
}

/// Append the UTF-8 encoding of `c` to `out`, returning the byte count.
///
/// The width is chosen from the value range alone: `< 0x80` one byte,
/// `< 0x800` two, `< 0x10000` three, everything else four. Callers that
/// keep [`MAX_UTF8_LEN`](crate::MAX_UTF8_LEN) bytes of spare capacity never
/// trigger a reallocation here.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "every operand is masked to fit in a byte"
)]
pub fn encode_into(c: char, out: &mut Vec<u8>) -> usize {
    let v = u32::from(c);
    match encoded_len(c) {
        1 => out.push(v as u8),
        2 => out.extend_from_slice(&[0xC0 | ((v >> 6) & 0x1F) as u8, 0x80 | (v & 0x3F) as u8]),
        3 => out.extend_from_slice(&[
            0xE0 | ((v >> 12) & 0x0F) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ]),
        _ => out.extend_from_slice(&[
            0xF0 | ((v >> 18) & 0x07) as u8,
            0x80 | ((v >> 12) & 0x3F) as u8,
            0x80 | ((v >> 6) & 0x3F) as u8,
            0x80 | (v & 0x3F) as u8,
        ]),
    }
    encoded_len(c)
}
