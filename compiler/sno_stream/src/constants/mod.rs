//! Lexical and runtime constants shared by the SNOBOL3 front end.
//!
//! The stream itself never interprets these: it hands raw characters to
//! the scanner, which compares them against the markers below to decide
//! what a line means (comment, continuation, control word, ...).
//!
//! # EOF Encoding
//!
//! Stream operations report end of input as `None`. Callers that need the
//! classic integer encoding (a character code, or [`EOF_CHAR`]) convert
//! with [`char_code`].

use thiserror::Error;

// === Line markers (column 1) ===

/// A `*` in column 1 makes the whole line a comment.
pub const COMMENT_CHAR: char = '*';
/// A `.` in column 1 continues the previous statement.
pub const CONTINUE_CHAR: char = '.';
/// A `-` in column 1 introduces a control word (`-LIST`, `-EJECT`, ...).
pub const CONTROL_WORD_CHAR: char = '-';

// === Delimiters ===

pub const COMMA_CHAR: char = ',';
pub const BLANK_CHAR: char = ' ';
/// Characters that separate statement fields.
pub const WHITESPACE_CHARS: &str = " \t";
pub const NULL_STRING: &str = "";
pub const SQUOTE: char = '\'';
pub const DQUOTE: char = '"';
pub const EOL_CHAR: char = '\n';
pub const LPAREN_CHAR: char = '(';
pub const RPAREN_CHAR: char = ')';

// === Sentinels and sizes ===

/// Integer code for "no more characters".
pub const EOF_CHAR: i32 = -1;
/// Marker for an unresolved code address.
pub const NO_ADDRESS: i32 = -1;
pub const DEFAULT_STACK_SIZE: usize = 128;
pub const INITIAL_CODE_SIZE: usize = 1024;
pub const ZERO: i32 = 0;

/// Returns `true` if `ch` is a field separator (blank or tab).
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    WHITESPACE_CHARS.contains(ch)
}

/// Converts a stream result into its integer character code.
///
/// `Some(ch)` maps to the Unicode scalar value of `ch`; `None` maps to
/// [`EOF_CHAR`].
#[inline]
pub fn char_code(ch: Option<char>) -> i32 {
    // Scalar values top out at 0x10FFFF, so the conversion never fails.
    ch.and_then(|c| i32::try_from(u32::from(c)).ok())
        .unwrap_or(EOF_CHAR)
}

/// Predefined I/O stream identifiers.
///
/// Discriminants match the unit numbers the interpreter uses in
/// `INPUT`/`OUTPUT` associations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum StreamId {
    /// The null device: reads hit EOF, writes are discarded.
    Null = -1,
    Stdin = 0,
    Stdout = 1,
    Stderr = 2,
}

impl StreamId {
    /// Integer unit number of this stream.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error converting an integer into a [`StreamId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConstantError {
    #[error("unknown predefined stream id {0}")]
    UnknownStreamId(i32),
}

impl TryFrom<i32> for StreamId {
    type Error = ConstantError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(StreamId::Null),
            0 => Ok(StreamId::Stdin),
            1 => Ok(StreamId::Stdout),
            2 => Ok(StreamId::Stderr),
            other => Err(ConstantError::UnknownStreamId(other)),
        }
    }
}

impl From<StreamId> for i32 {
    fn from(id: StreamId) -> Self {
        id.code()
    }
}

#[cfg(test)]
mod tests;
