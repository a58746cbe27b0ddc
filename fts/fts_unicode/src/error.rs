//! Tokenizer failures.
//!
//! Malformed UTF-8 and end of input are not errors. The only runtime
//! failure is running out of memory while growing a cursor's output
//! buffer; the remaining variants report misuse.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// The output buffer could not grow to hold the current token.
    ///
    /// Fatal to the cursor that reported it.
    #[error("out of memory growing token buffer to {requested} bytes")]
    OutOfMemory { requested: usize },

    /// `next_token` was called on a cursor that already failed.
    #[error("tokenizer cursor is unusable after an earlier failure")]
    CursorFailed,

    /// A tokenizer creation argument was not recognized or had a bad value.
    #[error("invalid tokenizer argument: {0}")]
    InvalidArgument(String),
}
