//! Tokens produced by a [`TokenCursor`](crate::TokenCursor).

/// One token, borrowing its text from the cursor that produced it.
///
/// The text lives in the cursor's output buffer and is overwritten by the
/// next call to `next_token`; convert with [`Token::to_owned_token`] to
/// keep it longer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'c> {
    /// Folded, re-encoded token text. Always valid UTF-8.
    pub text: &'c [u8],
    /// Byte offset of the first character of the token in the input.
    pub start: usize,
    /// Byte offset just past the last character of the token. Never
    /// includes the delimiter that ended the token.
    pub end: usize,
    /// Zero-based position of the token in the stream.
    pub ordinal: usize,
}

impl<'c> Token<'c> {
    /// The token text as `&str`.
    pub fn as_str(&self) -> &'c str {
        // Every byte in `text` was written by `encode_into` from a `char`.
        std::str::from_utf8(self.text).unwrap_or_default()
    }

    /// Length of the span in the original input.
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }

    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            text: self.as_str().to_owned(),
            start: self.start,
            end: self.end,
            ordinal: self.ordinal,
        }
    }
}

/// A [`Token`] that owns its text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub ordinal: usize,
}

impl OwnedToken {
    pub fn new(text: impl Into<String>, start: usize, end: usize, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            ordinal,
        }
    }
}

impl std::fmt::Display for OwnedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            text,
            start,
            end,
            ordinal,
        } = self;
        write!(f, "{ordinal}\t{start}\t{end}\t{text}")
    }
}
