//! Offset-tracking character iterator over raw bytes.

use crate::decode_next;

/// Iterator yielding `(start, char, end)` for every character in a byte
/// slice, decoded with [`decode_next`].
///
/// Unlike `str::char_indices`, the input does not have to be valid UTF-8:
/// malformed sequences yield [`REPLACEMENT`](crate::REPLACEMENT) spanning
/// the bytes they consumed.
#[derive(Clone, Debug)]
pub struct Utf8Chars<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Chars<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next character to be yielded.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Utf8Chars<'_> {
    type Item = (usize, char, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let (c, end) = decode_next(self.input, start);
        self.pos = end;
        Some((start, c, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // A malformed lead byte may swallow every remaining continuation byte.
        let remaining = self.input.len() - self.pos;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl std::iter::FusedIterator for Utf8Chars<'_> {}
