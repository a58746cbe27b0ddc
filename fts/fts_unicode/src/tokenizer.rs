//! Tokenizer factory.
//!
//! A [`Tokenizer`] holds the classifier and buffer configuration shared by
//! every cursor opened from it. It is immutable after construction, so one
//! instance can serve any number of cursors, on any number of threads when
//! the classifier is `Sync`.

use crate::{
    Classifier, OwnedToken, TokenCursor, TokenizerConfig, TokenizerError, UnicodeClassifier,
};

#[derive(Clone, Debug, Default)]
pub struct Tokenizer<C = UnicodeClassifier> {
    classifier: C,
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Tokenizer with the standard Unicode classifier and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tokenizer from host-supplied creation arguments.
    ///
    /// See [`TokenizerConfig::from_args`] for the accepted arguments; an
    /// empty list gives the same tokenizer as [`Tokenizer::new`].
    pub fn create<S: AsRef<str>>(args: &[S]) -> Result<Self, TokenizerError> {
        let config = TokenizerConfig::from_args(args)?;
        tracing::debug!(args = args.len(), ?config, "created unicode tokenizer");
        Ok(Self::with_config(UnicodeClassifier, config))
    }
}

impl<C: Classifier> Tokenizer<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self::with_config(classifier, TokenizerConfig::default())
    }

    pub fn with_config(classifier: C, config: TokenizerConfig) -> Self {
        Self { classifier, config }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Open a cursor over `input`.
    pub fn open<'a>(&self, input: &'a [u8]) -> TokenCursor<'a, &C> {
        TokenCursor::new(input, &self.classifier, self.config)
    }

    /// Open a cursor following the host calling convention.
    ///
    /// - `None` input is treated as empty.
    /// - A negative `len` means the input is NUL-terminated: it ends at the
    ///   first `0x00` byte, or at the end of the slice if there is none.
    /// - Otherwise `len` bytes are used, clamped to the slice length.
    pub fn open_raw<'a>(&self, input: Option<&'a [u8]>, len: isize) -> TokenCursor<'a, &C> {
        let Some(input) = input else {
            return self.open(&[]);
        };
        let len = match usize::try_from(len) {
            Ok(len) => len.min(input.len()),
            Err(_) => memchr::memchr(0, input).unwrap_or(input.len()),
        };
        self.open(&input[..len])
    }

    /// Tokenize `input` in one go.
    pub fn tokenize(&self, input: &[u8]) -> Result<Vec<OwnedToken>, TokenizerError> {
        self.open(input).collect_owned()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
