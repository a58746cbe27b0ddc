//! Unicode word tokenizer for full-text indexing.
//!
//! Splits a byte buffer into runs of alphanumeric characters, folds each
//! run to lowercase, and reports every token with its byte span in the
//! original input and its ordinal position.
//!
//! ```text
//! Tokenizer ──open()──> TokenCursor ──next_token()──> Token
//!     │                      │
//!     └── Classifier         └── fts_utf8::{decode_next, encode_into}
//! ```
//!
//! Input does not have to be valid UTF-8. Malformed sequences decode to
//! U+FFFD, which is a delimiter, so the emitted text is always valid UTF-8.
//!
//! ```
//! use fts_unicode::Tokenizer;
//!
//! let tokenizer = Tokenizer::new();
//! let mut cursor = tokenizer.open(b"Hello, World!");
//! let mut words = Vec::new();
//! while let Some(token) = cursor.next_token()? {
//!     words.push((token.as_str().to_owned(), token.start, token.end));
//! }
//! assert_eq!(words, [("hello".to_owned(), 0, 5), ("world".to_owned(), 7, 12)]);
//! # Ok::<(), fts_unicode::TokenizerError>(())
//! ```

mod classifier;
mod config;
mod cursor;
mod error;
mod token;
mod tokenizer;

pub use classifier::{Classifier, UnicodeClassifier};
pub use config::TokenizerConfig;
pub use cursor::{CursorState, TokenCursor};
pub use error::TokenizerError;
pub use token::{OwnedToken, Token};
pub use tokenizer::Tokenizer;
