//! Source positions for diagnostics.

use std::fmt;

/// A `(line, offset)` snapshot of a stream.
///
/// `line` is whatever the scanner last passed to
/// [`ReplayBuffer::set_line`](crate::ReplayBuffer::set_line); `offset` is the
/// cursor (character index of the next unread character) at the moment the
/// snapshot was taken. A `Pos` is a plain value: later reads, pushbacks or
/// reopens of the stream never change it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Pos {
    pub line: u32,
    pub offset: usize,
}

impl Pos {
    /// Position at line 0, offset 0.
    pub const START: Pos = Pos { line: 0, offset: 0 };

    #[inline]
    pub const fn new(line: u32, offset: usize) -> Self {
        Pos { line, offset }
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, offset {}", self.line, self.offset)
    }
}
