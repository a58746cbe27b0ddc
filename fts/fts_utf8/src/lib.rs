//! Lossy UTF-8 codec used by the full-text-search tokenizer.
//!
//! Two pure functions make up the codec:
//!
//! - [`decode_next`] reads one encoded character from a byte slice. It never
//!   fails: malformed sequences decode to [`REPLACEMENT`], and at least one
//!   byte is always consumed, so any loop built on it terminates.
//! - [`encode_into`] appends the canonical encoding of a `char` to a
//!   growable byte buffer.
//!
//! [`Utf8Chars`] layers an iterator over [`decode_next`] for callers that
//! want `(start, char, end)` triples instead of driving the offsets by hand.
//!
//! The decoder accepts any byte sequence, so it is intentionally more
//! permissive than `std::str::from_utf8`. It folds continuation bytes
//! greedily and validates the accumulated value afterwards.

mod chars;
mod decode;
mod encode;

pub use chars::Utf8Chars;
pub use decode::decode_next;
pub use encode::{encode_into, encoded_len};

/// Maximum number of bytes in one encoded character.
pub const MAX_UTF8_LEN: usize = 4;

/// Substituted for every malformed or disallowed decoded sequence.
pub const REPLACEMENT: char = '\u{FFFD}';
