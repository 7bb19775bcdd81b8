use crate::error::SplitError;
use std::iter::{repeat, Peekable};
use std::ops::Range;
use std::str::CharIndices;

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
    /// Collecting a run of backslashes. `quoted` is the state to return to.
    Backslashes { count: usize, quoted: bool },
}

/// One argument decoded from a raw command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Decoded argument text (quotes and escapes resolved).
    pub value: String,
    /// Byte span in the raw string. Starts at the first non-whitespace
    /// character of the token and ends at the separator that closed it.
    pub span: Range<usize>,
}

impl Token {
    /// Byte offset where the token starts in the raw string.
    pub fn start(&self) -> usize {
        self.span.start
    }
}

/// Command line scanner: a pure state machine over the raw string.
///
/// Iterating yields tokens left to right. A token is yielded once the
/// separator after it (or the end of input) has been seen, so callers that
/// only need a prefix of the tokens can stop early.
pub(crate) struct Scanner<'a> {
    raw: &'a str,
    chars: Peekable<CharIndices<'a>>,
    state: State,
    /// Start offset and decoded text of the token being built.
    current: Option<(usize, String)>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self {
            raw,
            chars: raw.char_indices().peekable(),
            state: State::Unquoted,
            current: None,
            failed: false,
        }
    }

    fn step(&mut self, offset: usize, ch: char) -> Option<Token> {
        match self.state {
            State::Unquoted => self.unquoted(offset, ch),
            State::Quoted => {
                self.quoted(offset, ch);
                None
            }
            State::Backslashes { count, quoted } => self.backslashes(offset, ch, count, quoted),
        }
    }

    fn unquoted(&mut self, offset: usize, ch: char) -> Option<Token> {
        match ch {
            ' ' | '\t' => return self.finish_token(offset),
            '\\' => {
                self.begin(offset);
                self.state = State::Backslashes {
                    count: 1,
                    quoted: false,
                };
            }
            '"' => {
                self.begin(offset);
                self.state = State::Quoted;
            }
            _ => self.begin(offset).push(ch),
        }
        None
    }

    fn quoted(&mut self, offset: usize, ch: char) {
        match ch {
            '"' => {
                // `""` inside quotes is a literal quote; the region stays open
                if self.chars.next_if(|&(_, next)| next == '"').is_some() {
                    self.begin(offset).push('"');
                } else {
                    self.state = State::Unquoted;
                }
            }
            '\\' => {
                self.state = State::Backslashes {
                    count: 1,
                    quoted: true,
                };
            }
            _ => self.begin(offset).push(ch),
        }
    }

    fn backslashes(&mut self, offset: usize, ch: char, count: usize, quoted: bool) -> Option<Token> {
        let prior = if quoted { State::Quoted } else { State::Unquoted };
        match ch {
            '\\' => {
                self.state = State::Backslashes {
                    count: count + 1,
                    quoted,
                };
                None
            }
            '"' => {
                let text = self.begin(offset);
                text.extend(repeat('\\').take(count / 2));
                if count % 2 == 1 {
                    text.push('"');
                    self.state = prior;
                    None
                } else {
                    // Even run: the quote is a real quote for the prior state
                    self.state = prior;
                    self.step(offset, ch)
                }
            }
            _ => {
                self.begin(offset).extend(repeat('\\').take(count));
                self.state = prior;
                self.step(offset, ch)
            }
        }
    }

    /// Text of the current token, starting one at `offset` if none is open.
    fn begin(&mut self, offset: usize) -> &mut String {
        &mut self.current.get_or_insert_with(|| (offset, String::new())).1
    }

    fn finish_token(&mut self, end: usize) -> Option<Token> {
        self.current.take().map(|(start, value)| Token {
            value,
            span: start..end,
        })
    }

    /// End of input: flush pending backslashes and the open token.
    fn finish(&mut self) -> Option<Token> {
        let end = self.raw.len();
        if let State::Backslashes { count, .. } = self.state {
            self.begin(end).extend(repeat('\\').take(count));
        }
        // An unterminated quoted region simply ends here.
        self.state = State::Unquoted;
        self.finish_token(end)
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some((offset, ch)) = self.chars.next() {
            if ch == '\0' {
                self.failed = true;
                self.current = None;
                return Some(Err(SplitError::EmbeddedNul { offset }));
            }
            if let Some(token) = self.step(offset, ch) {
                return Some(Ok(token));
            }
        }
        self.finish().map(Ok)
    }
}
