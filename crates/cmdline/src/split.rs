//! Splitting a raw command line into arguments, and extracting its tail.
//!
//! Both operations run the same [`Scanner`], so the tail for argument `n`
//! always starts exactly where `tokenize` found argument `n`.

use crate::error::SplitError;
use crate::scanner::{Scanner, Token};
use std::fmt;

/// Split `raw` into decoded arguments.
///
/// An empty (or all-whitespace) string yields an empty list. Fails only if
/// `raw` contains a NUL character.
pub fn tokenize(raw: &str) -> Result<Vec<String>, SplitError> {
    Scanner::new(raw).map(|token| token.map(|t| t.value)).collect()
}

/// Like [`tokenize`], but keeps each argument's byte span in `raw`.
pub fn tokens(raw: &str) -> Result<Vec<Token>, SplitError> {
    Scanner::new(raw).collect()
}

/// The unparsed remainder of `raw` starting at argument `start_arg`.
///
/// The returned slice begins at the first character of that argument and
/// runs to the end of `raw` untouched. Index 0 returns `raw` itself; an index
/// past the last argument returns `""`; a negative index is an error.
pub fn command_tail(raw: &str, start_arg: i64) -> Result<&str, SplitError> {
    if start_arg < 0 {
        return Err(SplitError::NegativeIndex { index: start_arg });
    }
    if let Some(offset) = raw.find('\0') {
        return Err(SplitError::EmbeddedNul { offset });
    }
    if start_arg == 0 {
        return Ok(raw);
    }
    let Ok(wanted) = usize::try_from(start_arg) else {
        return Ok("");
    };

    for (index, token) in Scanner::new(raw).enumerate() {
        let token = token?;
        if index == wanted {
            return Ok(&raw[token.start()..]);
        }
    }
    Ok("")
}

/// A raw command line, exactly as the operating system delivered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine(String);

impl CommandLine {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded arguments. See [`tokenize`].
    pub fn arguments(&self) -> Result<Vec<String>, SplitError> {
        tokenize(&self.0)
    }

    /// Decoded arguments with spans. See [`tokens`].
    pub fn tokens(&self) -> Result<Vec<Token>, SplitError> {
        tokens(&self.0)
    }

    /// Verbatim remainder starting at argument `start_arg`. See [`command_tail`].
    pub fn tail(&self, start_arg: i64) -> Result<&str, SplitError> {
        command_tail(&self.0, start_arg)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommandLine {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for CommandLine {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
