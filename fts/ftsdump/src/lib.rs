//! Token dump driver.
//!
//! Reads documents, runs them through the Unicode tokenizer, and writes one
//! line per token (`ordinal`, `start`, `end`, `text`, tab-separated) or, in
//! `--chars` mode, one line per decoded character.

mod options;

use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::Once;

use fts_unicode::{Tokenizer, TokenizerError};
use fts_utf8::{Utf8Chars, REPLACEMENT};
use thiserror::Error;

pub use options::{DumpMode, DumpOptions, USAGE};

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Write(#[from] io::Error),
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=fts_unicode=debug`
/// or `RUST_LOG=fts_unicode=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Run a parsed command line, writing to `out`.
pub fn run(options: &DumpOptions, out: &mut impl Write) -> Result<(), DumpError> {
    let tokenizer = Tokenizer::create(options.tokenizer_args.as_slice())?;

    if options.files.is_empty() {
        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input).map_err(|source| DumpError::Read {
            path: "<stdin>".to_owned(),
            source,
        })?;
        return dump(&tokenizer, options.mode, &input, out);
    }

    for path in &options.files {
        let input = read_file(path)?;
        if options.files.len() > 1 {
            writeln!(out, "# {path}")?;
        }
        dump(&tokenizer, options.mode, &input, out)?;
    }
    Ok(())
}

fn read_file(path: &str) -> Result<Vec<u8>, DumpError> {
    std::fs::read(Path::new(path)).map_err(|source| DumpError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Dump one document in the requested mode.
pub fn dump(
    tokenizer: &Tokenizer,
    mode: DumpMode,
    input: &[u8],
    out: &mut impl Write,
) -> Result<(), DumpError> {
    match mode {
        DumpMode::Tokens => {
            let count = dump_tokens(tokenizer, input, out)?;
            tracing::debug!(bytes = input.len(), tokens = count, "dumped tokens");
        }
        DumpMode::Chars => dump_chars(input, out)?,
    }
    Ok(())
}

/// Write `ordinal<TAB>start<TAB>end<TAB>text` for every token in `input`.
///
/// Returns the number of tokens written.
pub fn dump_tokens(
    tokenizer: &Tokenizer,
    input: &[u8],
    out: &mut impl Write,
) -> Result<usize, DumpError> {
    let mut cursor = tokenizer.open(input);
    let mut count = 0;
    while let Some(token) = cursor.next_token()? {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            token.ordinal,
            token.start,
            token.end,
            token.as_str()
        )?;
        count += 1;
    }
    Ok(count)
}

/// Write `start<TAB>end<TAB>U+XXXX<TAB>char` for every decoded character.
///
/// Malformed sequences show up as `U+FFFD` with the span they consumed,
/// which makes this mode useful for checking why a token split where it did.
pub fn dump_chars(input: &[u8], out: &mut impl Write) -> Result<(), DumpError> {
    for (start, c, end) in Utf8Chars::new(input) {
        let shown = if c.is_control() { REPLACEMENT } else { c };
        writeln!(out, "{start}\t{end}\tU+{:04X}\t{shown}", u32::from(c))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
