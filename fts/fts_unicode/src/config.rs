//! Tokenizer tuning knobs.
//!
//! None of these affect which tokens are produced, only how the per-cursor
//! output buffer grows. A tokenizer can be configured in code through the
//! `with_*` builders, or from `key=value` creation arguments through
//! [`TokenizerConfig::from_args`].

use fts_utf8::MAX_UTF8_LEN;

use crate::TokenizerError;

/// Output buffer growth parameters shared by every cursor a tokenizer opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Bytes added to the output buffer whenever fewer than
    /// [`MAX_UTF8_LEN`] bytes of spare capacity remain.
    pub grow_step: usize,
    /// Bytes reserved the first time a cursor writes token text, when
    /// larger than `grow_step`.
    pub initial_capacity: usize,
}

impl TokenizerConfig {
    /// Default growth increment.
    pub const DEFAULT_GROW_STEP: usize = 64;

    /// Set the growth increment, clamped to at least one encoded character.
    #[must_use]
    pub fn with_grow_step(mut self, grow_step: usize) -> Self {
        self.grow_step = grow_step.max(MAX_UTF8_LEN);
        self
    }

    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Parse tokenizer creation arguments.
    ///
    /// Each argument has the form `key=value`. Recognized keys are
    /// `grow_step` and `initial_capacity`, both taking a decimal byte
    /// count. An empty argument list yields the default configuration.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, TokenizerError> {
        let mut config = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                let message = format!("expected `key=value`, found `{arg}`");
                return Err(TokenizerError::InvalidArgument(message));
            };
            let (key, value) = (key.trim(), value.trim());
            config = match key {
                "grow_step" => config.with_grow_step(parse_byte_count(key, value)?),
                "initial_capacity" => config.with_initial_capacity(parse_byte_count(key, value)?),
                _ => {
                    let message = format!("unknown option `{key}`");
                    return Err(TokenizerError::InvalidArgument(message));
                }
            };
        }
        Ok(config)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            grow_step: Self::DEFAULT_GROW_STEP,
            initial_capacity: 0,
        }
    }
}

fn parse_byte_count(key: &str, value: &str) -> Result<usize, TokenizerError> {
    value.parse().map_err(|_| {
        let message = format!("option `{key}` expects a byte count, found `{value}`");
        TokenizerError::InvalidArgument(message)
    })
}
