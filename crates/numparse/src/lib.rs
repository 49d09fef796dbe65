//! Integer parsing with explicit or inferred bases.
//!
//! [`parse_int`] and [`parse_uint`] decode an ASCII token into a 64-bit integer that must also
//! fit a caller-chosen bit width. The base is either stated explicitly (2 to 36) or inferred
//! from the token's prefix when the caller passes `0`:
//!
//! | Prefix        | Base |
//! |---------------|------|
//! | `0x`, `0X`    | 16   |
//! | `0o`, `0O`    | 8    |
//! | `0b`, `0B`    | 2    |
//! | `0`           | 8    |
//! | anything else | 10   |
//!
//! Prefixes are only recognised when inferring. With an explicit base every character must be
//! a digit of that base, so `"0x2A"` parses under base `0` but is a syntax error under base
//! `16`:
//!
//! ```
//! use idkit_numparse::{parse_int, ParseErrorKind};
//!
//! assert_eq!(parse_int("2A", 16, 64).unwrap(), 42);
//! assert_eq!(parse_int("0x2A", 0, 64).unwrap(), 42);
//! assert_eq!(
//!     parse_int("0x2A", 16, 64).unwrap_err().kind(),
//!     ParseErrorKind::Syntax
//! );
//! ```
//!
//! [`format_int`] and [`format_uint`] go the other way, rendering a value in any base from 2 to
//! 36 with lowercase letters.

mod format;
mod parse;

pub use format::{format_int, format_uint};
pub use parse::{parse_int, parse_uint};

/// Why a token could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Empty token, lone sign, misplaced underscore or a character that is not a digit of the
    /// resolved base
    #[error("invalid syntax")]
    Syntax,
    /// The value does not fit the requested bit width
    #[error("value out of range")]
    Range,
    /// Base outside `{0} ∪ [2, 36]`
    #[error("invalid base {0}")]
    InvalidBase(u32),
    /// Bit width outside `[0, 64]`
    #[error("invalid bit size {0}")]
    InvalidBitSize(u32),
}

/// A failed parse, carrying the function name and the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{func}: parsing {input:?}: {kind}")]
pub struct ParseError {
    func: &'static str,
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(func: &'static str, input: &str, kind: ParseErrorKind) -> Self {
        Self {
            func,
            input: input.to_owned(),
            kind,
        }
    }

    /// The failure category.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The input exactly as passed by the caller.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the parsing function that failed.
    pub fn func(&self) -> &'static str {
        self.func
    }
}

/// Error type for formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Base outside `[2, 36]`
    #[error("invalid base {0}")]
    InvalidBase(u32),
}
