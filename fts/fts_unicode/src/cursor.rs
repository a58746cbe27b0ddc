//! Incremental word scanner over a borrowed byte buffer.
//!
//! Each call to [`TokenCursor::next_token`] runs two phases from the
//! current position:
//!
//! 1. **Skip delimiters.** Decode characters until one is alphanumeric.
//!    The offset after the last delimiter is the token start. Running off
//!    the end of input here exhausts the cursor.
//! 2. **Accumulate.** Fold and encode the current character, record the
//!    offset after it as the token end, then decode one character of
//!    lookahead. The run continues while the lookahead is alphanumeric.
//!
//! The lookahead that ends a run stays consumed. A single trailing
//! delimiter is therefore skipped by the call that emitted the token, not
//! rescanned by the next one, and the reported `end` never includes it.
//!
//! # Output buffer
//!
//! Token text is assembled in a per-cursor `Vec<u8>` that is reused across
//! calls. Before each character is written the buffer is checked for
//! [`MAX_UTF8_LEN`] bytes of spare capacity and grown by the configured
//! step if short. Growth uses fallible reservation, so allocation failure
//! surfaces as [`TokenizerError::OutOfMemory`] instead of aborting.

use fts_utf8::{decode_next, encode_into, MAX_UTF8_LEN};

use crate::{Classifier, OwnedToken, Token, TokenizerConfig, TokenizerError};

/// Lifecycle of a [`TokenCursor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// More tokens may follow.
    Scanning,
    /// Input ran out while skipping delimiters. Terminal.
    Exhausted,
    /// Output buffer growth failed. Terminal; the cursor can only be dropped.
    Failed,
}

/// Scanning state for one input buffer.
///
/// Created by [`Tokenizer::open`](crate::Tokenizer::open). The cursor
/// borrows the input for its whole lifetime and owns the buffer that token
/// text is written into. It is meant for exclusive use by one caller;
/// independent cursors share nothing mutable.
#[derive(Debug)]
pub struct TokenCursor<'a, C> {
    input: &'a [u8],
    /// Offset of the next unconsumed byte. Never decreases.
    pos: usize,
    /// Number of tokens emitted so far.
    next_ordinal: usize,
    /// Folded text of the token being assembled.
    out: Vec<u8>,
    state: CursorState,
    classifier: C,
    config: TokenizerConfig,
}

impl<'a, C: Classifier> TokenCursor<'a, C> {
    pub fn new(input: &'a [u8], classifier: C, config: TokenizerConfig) -> Self {
        tracing::debug!(
            input_len = input.len(),
            grow_step = config.grow_step,
            "opened tokenizer cursor"
        );
        Self {
            input,
            pos: 0,
            next_ordinal: 0,
            out: Vec::new(),
            state: CursorState::Scanning,
            classifier,
            config,
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Ok(None)` once the input holds no further alphanumeric
    /// character; every later call returns `Ok(None)` again. On
    /// [`TokenizerError::OutOfMemory`] the cursor moves to
    /// [`CursorState::Failed`] and every later call returns
    /// [`TokenizerError::CursorFailed`].
    pub fn next_token(&mut self) -> Result<Option<Token<'_>>, TokenizerError> {
        match self.state {
            CursorState::Scanning => {}
            CursorState::Exhausted => return Ok(None),
            CursorState::Failed => return Err(TokenizerError::CursorFailed),
        }

        let input = self.input;
        let len = input.len();

        // Phase 1: skip delimiters.
        let mut scan = self.pos;
        let mut start = scan;
        let mut first = None;
        while scan < len {
            let (c, next) = decode_next(input, scan);
            scan = next;
            if self.classifier.is_alphanumeric(c) {
                first = Some(c);
                break;
            }
            start = scan;
        }
        let Some(mut current) = first else {
            self.pos = len;
            self.state = CursorState::Exhausted;
            tracing::debug!(tokens = self.next_ordinal, "tokenizer cursor exhausted");
            return Ok(None);
        };

        // Phase 2: accumulate the run. `end` is the confirmed end of the
        // token; `scan` is where the next decode starts.
        self.out.clear();
        let mut end;
        loop {
            if let Err(err) = self.reserve_char() {
                self.state = CursorState::Failed;
                tracing::debug!(
                    error = %err,
                    pos = self.pos,
                    "tokenizer cursor failed"
                );
                return Err(err);
            }

            end = scan;
            encode_into(self.classifier.fold(current), &mut self.out);

            if scan >= len {
                break;
            }
            let (c, next) = decode_next(input, scan);
            scan = next;
            if !self.classifier.is_alphanumeric(c) {
                break;
            }
            current = c;
        }

        self.pos = scan;
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        tracing::trace!(ordinal, start, end, len = self.out.len(), "token");
        Ok(Some(Token {
            text: &self.out,
            start,
            end,
            ordinal,
        }))
    }

    /// Drain the remaining tokens into owned values.
    pub fn collect_owned(&mut self) -> Result<Vec<OwnedToken>, TokenizerError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token.to_owned_token());
        }
        Ok(tokens)
    }

    /// Make sure one more encoded character fits without reallocating.
    fn reserve_char(&mut self) -> Result<(), TokenizerError> {
        if self.out.capacity() - self.out.len() >= MAX_UTF8_LEN {
            return Ok(());
        }
        let step = if self.out.capacity() == 0 {
            self.config.grow_step.max(self.config.initial_capacity)
        } else {
            self.config.grow_step
        };
        let step = step.max(MAX_UTF8_LEN);
        let requested = self.out.len().saturating_add(step);
        self.out
            .try_reserve_exact(step)
            .map_err(|_| TokenizerError::OutOfMemory { requested })?;
        tracing::trace!(capacity = self.out.capacity(), "grew token buffer");
        Ok(())
    }
}

impl<'a, C> TokenCursor<'a, C> {
    /// The input this cursor scans.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Offset of the next unconsumed input byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Ordinal the next emitted token will carry.
    pub fn next_ordinal(&self) -> usize {
        self.next_ordinal
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Capacity of the token output buffer.
    pub fn buffer_capacity(&self) -> usize {
        self.out.capacity()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
