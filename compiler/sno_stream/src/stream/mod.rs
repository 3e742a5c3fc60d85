//! The narrow character-stream contract consumed by the scanner.
//!
//! A scanner that only needs to look one character ahead, consume
//! characters and stamp tokens with a position depends on [`CharStream`]
//! instead of a concrete buffer.
//!
//! # End of Input
//!
//! Both `peek` and `getch` return `None` at end of input. They also return
//! `None` if the underlying stream failed (for example after it was
//! closed): through this contract a misused stream simply looks exhausted.
//! Callers that need to tell the two apart use the strict methods on
//! [`ReplayBuffer`](crate::ReplayBuffer).

use crate::Pos;

/// Minimal read interface of a character stream.
pub trait CharStream {
    /// Next character, without consuming it. `None` at end of input.
    ///
    /// Never moves the cursor.
    fn peek(&self) -> Option<char>;

    /// Next character, consuming it. `None` at end of input.
    fn getch(&mut self) -> Option<char>;

    /// Current `(line, offset)` position.
    fn pos(&self) -> Pos;
}

impl<S: CharStream + ?Sized> CharStream for &mut S {
    #[inline]
    fn peek(&self) -> Option<char> {
        (**self).peek()
    }

    #[inline]
    fn getch(&mut self) -> Option<char> {
        (**self).getch()
    }

    #[inline]
    fn pos(&self) -> Pos {
        (**self).pos()
    }
}
