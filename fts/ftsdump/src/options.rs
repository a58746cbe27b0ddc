//! Command-line parsing for `ftsdump`.

use crate::DumpError;

pub const USAGE: &str = "\
Usage: ftsdump [options] [FILE...]

Reads standard input when no FILE is given.

Options:
  --chars           Print decoded characters instead of tokens
  --arg=KEY=VALUE   Pass a creation argument to the tokenizer
                    (grow_step=N, initial_capacity=N)
  -h, --help        Show this message";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpMode {
    #[default]
    Tokens,
    Chars,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    pub mode: DumpMode,
    pub tokenizer_args: Vec<String>,
    pub files: Vec<String>,
    pub help: bool,
}

impl DumpOptions {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, DumpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Self::default();
        let mut only_files = false;
        for arg in args {
            let arg = arg.into();
            if only_files {
                options.files.push(arg);
                continue;
            }
            match arg.as_str() {
                "--" => only_files = true,
                "--chars" => options.mode = DumpMode::Chars,
                "-h" | "--help" => options.help = true,
                s if s.starts_with("--arg=") => {
                    options.tokenizer_args.push(s["--arg=".len()..].to_owned());
                }
                s if s.starts_with('-') => {
                    return Err(DumpError::Usage(format!("unknown option `{s}`")));
                }
                _ => options.files.push(arg.clone()),
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
