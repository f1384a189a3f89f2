//! Forward-only token cursor over one line of output

use crate::numeric::parse_number;
use std::borrow::Cow;

/// Whitespace as the C locale's `isspace` sees it
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// One whitespace-delimited token and the whitespace run following it
///
/// Tokens are raw bytes; two tokens match only if their bytes are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Raw token bytes, never empty
    pub text: &'a [u8],
    /// Whitespace after the token, including the line terminator
    pub trailing: &'a [u8],
}

impl<'a> Token<'a> {
    /// Numeric value of the token, parsed on demand
    ///
    /// Tokens that are not valid UTF-8 are never numbers.
    pub fn number(&self) -> Option<f64> {
        std::str::from_utf8(self.text).ok().and_then(parse_number)
    }

    /// Token text for diagnostics, with invalid UTF-8 replaced
    pub fn display(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.text)
    }
}

/// Lazy iterator over the tokens of a line
///
/// The leading whitespace run is split off at construction and kept for
/// whitespace comparison.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    leading: &'a [u8],
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    /// Start a cursor at the beginning of `line`
    pub fn new(line: &'a [u8]) -> Self {
        let (leading, rest) = split_space(line);
        Self { leading, rest }
    }

    /// Whitespace before the first token
    pub fn leading(&self) -> &'a [u8] {
        self.leading
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = self
            .rest
            .iter()
            .position(|&b| is_space(b))
            .unwrap_or(self.rest.len());
        let (text, after) = self.rest.split_at(end);
        let (trailing, rest) = split_space(after);
        self.rest = rest;

        Some(Token { text, trailing })
    }
}

fn split_space(bytes: &[u8]) -> (&[u8], &[u8]) {
    let end = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    bytes.split_at(end)
}
