//! In-memory character buffer with pushback, marks and line tracking.
//!
//! [`ReplayBuffer`] owns the whole input as a `Vec<char>`, so every
//! operation is synchronous and O(1) (or O(n) in the characters copied).
//!
//! # Two Tiers
//!
//! The inherent methods are the strict tier: they return
//! [`StreamResult`] and report misuse (closed stream, bad ranges, negative
//! limits) as a [`StreamError`]. The [`CharStream`] impl is the lenient
//! tier: it calls the strict methods and turns any error into end of input.
//!
//! # Layout
//!
//! ```text
//! [c0, c1, c2, ..., c(len-1)]
//!  ^           ^            ^
//!  0       cursor (next)    len (EOF)
//! ```
//!
//! The cursor and every saved mark stay within `0..=len`. The buffer only
//! changes through `open` / `hard_reset`, which also clear the marks, so a
//! mark can never point past the end.

mod marks;

use tracing::{debug, trace};

use crate::{CharStream, Pos, StreamError, StreamOptions, StreamResult};
use marks::MarkStack;

/// Replayable character stream over an in-memory buffer.
///
/// # Lifecycle
///
/// Created empty, filled by [`open`](Self::open), read and rewound any
/// number of times, then [`close`](Self::close)d. Closing is terminal:
/// every strict operation afterwards fails with [`StreamError::Closed`].
///
/// # Example
///
/// ```
/// use sno_stream::ReplayBuffer;
///
/// let mut buf = ReplayBuffer::from_text("HELLO");
/// buf.skip(2)?;
/// buf.mark(0)?;
/// assert_eq!(buf.read()?, Some('L'));
/// buf.reset()?;
/// assert_eq!(buf.remainder()?, "LLO");
/// # Ok::<(), sno_stream::StreamError>(())
/// ```
#[derive(Debug)]
pub struct ReplayBuffer {
    /// Buffer contents; `None` once closed.
    chars: Option<Vec<char>>,
    /// Index of the next character to read.
    next: usize,
    marks: MarkStack,
    /// Scanner-maintained line number.
    line: u32,
}

impl ReplayBuffer {
    /// Create an empty, open buffer with default options.
    pub fn new() -> Self {
        Self::with_options(StreamOptions::default())
    }

    /// Create an empty, open buffer.
    pub fn with_options(options: StreamOptions) -> Self {
        ReplayBuffer {
            chars: Some(Vec::new()),
            next: 0,
            marks: MarkStack::new(options.effective_mark_depth()),
            line: options.first_line,
        }
    }

    /// Create a buffer already opened on `text`.
    pub fn from_text(text: &str) -> Self {
        let mut buf = Self::new();
        buf.fill(text);
        buf
    }

    // === Lifecycle ===

    /// Load `text`, replacing any previous contents.
    ///
    /// Resets the cursor to 0 and drops every mark. The line number is left
    /// alone; the scanner owns it.
    pub fn open(&mut self, text: &str) -> StreamResult<()> {
        self.hard_reset()?;
        self.fill(text);
        Ok(())
    }

    /// Empty the buffer and reset the cursor and marks to 0.
    pub fn hard_reset(&mut self) -> StreamResult<()> {
        let chars = self.chars.as_mut().ok_or(StreamError::Closed)?;
        chars.clear();
        self.next = 0;
        self.marks.clear();
        debug!("stream hard reset");
        Ok(())
    }

    /// Release the buffer. Idempotent.
    pub fn close(&mut self) {
        if self.chars.take().is_some() {
            debug!(offset = self.next, "stream closed");
        }
        self.marks.clear();
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.chars.is_none()
    }

    /// Always `Ok(true)` while open: reads never block.
    pub fn ready(&self) -> StreamResult<bool> {
        self.ensure_open()?;
        Ok(true)
    }

    // === Reading ===

    /// Read one character and advance.
    ///
    /// Returns `Ok(None)` at end of input, repeatedly and without moving the
    /// cursor.
    pub fn read(&mut self) -> StreamResult<Option<char>> {
        let ch = self.ensure_open()?.get(self.next).copied();
        if let Some(c) = ch {
            trace!(pos = self.next, ch = ?c, "read");
            self.next += 1;
        }
        Ok(ch)
    }

    /// Look at the next character without consuming it.
    pub fn try_peek(&self) -> StreamResult<Option<char>> {
        Ok(self.ensure_open()?.get(self.next).copied())
    }

    /// Copy up to `max_len` characters into `dest[offset..]`.
    ///
    /// Returns `Ok(Some(n))` with the number copied, or `Ok(None)` if the
    /// stream is already at end of input. A zero-length request returns
    /// `Ok(Some(0))` without looking at the cursor.
    ///
    /// # Errors
    ///
    /// [`StreamError::IndexOutOfRange`] if `offset..offset + max_len` does not
    /// fit in `dest`. The cursor is untouched on error.
    pub fn read_into(
        &mut self,
        dest: &mut [char],
        offset: usize,
        max_len: usize,
    ) -> StreamResult<Option<usize>> {
        let chars = self.ensure_open()?;
        let fits = offset
            .checked_add(max_len)
            .is_some_and(|end| end <= dest.len());
        if !fits {
            return Err(StreamError::IndexOutOfRange {
                op: "read_into",
                index: offset.saturating_add(max_len),
                limit: dest.len(),
            });
        }
        if max_len == 0 {
            return Ok(Some(0));
        }
        if self.next >= chars.len() {
            return Ok(None);
        }
        let n = (chars.len() - self.next).min(max_len);
        dest[offset..offset + n].copy_from_slice(&chars[self.next..self.next + n]);
        trace!(pos = self.next, count = n, "read_into");
        self.next += n;
        Ok(Some(n))
    }

    /// Move the cursor by `n` characters, backwards if negative.
    ///
    /// The move is clamped to the buffer: the result is the delta actually
    /// applied, which may be smaller in magnitude than `n`. At end of input
    /// a forward skip is a no-op returning 0.
    pub fn skip(&mut self, n: isize) -> StreamResult<isize> {
        let len = self.ensure_open()?.len();
        let step = n.unsigned_abs();
        let delta = if n >= 0 {
            let step = step.min(len - self.next);
            self.next += step;
            signed(step)
        } else {
            let step = step.min(self.next);
            self.next -= step;
            -signed(step)
        };
        trace!(requested = n, applied = delta, pos = self.next, "skip");
        Ok(delta)
    }

    /// Text from the cursor to the end, without consuming it.
    pub fn remainder(&self) -> StreamResult<String> {
        Ok(self.ensure_open()?[self.next..].iter().collect())
    }

    /// Copy of the entire buffer contents, independent of the cursor.
    pub fn snapshot(&self) -> StreamResult<String> {
        Ok(self.ensure_open()?.iter().collect())
    }

    // === Backtracking ===

    /// Step the cursor back by `n` characters.
    ///
    /// # Errors
    ///
    /// [`StreamError::IndexOutOfRange`] if `n` exceeds the cursor; the cursor
    /// is left unchanged.
    pub fn pushback(&mut self, n: usize) -> StreamResult<()> {
        self.ensure_open()?;
        if n > self.next {
            return Err(StreamError::IndexOutOfRange {
                op: "pushback",
                index: n,
                limit: self.next,
            });
        }
        self.next -= n;
        trace!(count = n, pos = self.next, "pushback");
        Ok(())
    }

    /// Step back over the last character read.
    pub fn pushback_one(&mut self) -> StreamResult<()> {
        self.pushback(1)
    }

    /// Marking is always supported.
    #[allow(
        clippy::unused_self,
        reason = "kept as a method so callers can query any stream the same way"
    )]
    pub fn mark_supported(&self) -> bool {
        true
    }

    /// Save the cursor so a later [`reset`](Self::reset) can return to it.
    ///
    /// The whole input is in memory, so `read_ahead_limit` only has to be
    /// non-negative; its value is otherwise ignored. With the default mark
    /// depth of 1 this replaces the previous mark; deeper stacks evict their
    /// oldest mark when full.
    ///
    /// # Errors
    ///
    /// [`StreamError::IllegalArgument`] if `read_ahead_limit < 0`.
    pub fn mark(&mut self, read_ahead_limit: isize) -> StreamResult<()> {
        if read_ahead_limit < 0 {
            return Err(StreamError::IllegalArgument {
                op: "mark",
                reason: "read-ahead limit < 0",
            });
        }
        self.ensure_open()?;
        self.marks.push(self.next);
        trace!(pos = self.next, held = self.marks.len(), "mark");
        Ok(())
    }

    /// Move the cursor to the most recent mark (0 if never marked).
    ///
    /// The mark stays in place, so `reset` can be repeated.
    ///
    /// # Errors
    ///
    /// [`StreamError::MarkEvicted`] if the most recent mark was pushed off a
    /// full stack; the cursor is left unchanged.
    pub fn reset(&mut self) -> StreamResult<()> {
        self.ensure_open()?;
        self.next = self.marks.top("reset")?;
        trace!(pos = self.next, "reset");
        Ok(())
    }

    /// Drop the most recent mark without moving the cursor.
    ///
    /// Returns the dropped position, or `None` if nothing was marked.
    /// Use this to commit a speculative scan that succeeded.
    ///
    /// # Errors
    ///
    /// [`StreamError::MarkEvicted`] if the mark being dropped was already
    /// pushed off a full stack. It still counts as dropped.
    pub fn release_mark(&mut self) -> StreamResult<Option<usize>> {
        self.ensure_open()?;
        self.marks.pop("release_mark")
    }

    /// [`reset`](Self::reset) to the most recent mark, then drop it.
    ///
    /// Use this to abandon a speculative scan that failed; an enclosing mark
    /// becomes current again. With nothing marked this rewinds to 0.
    ///
    /// # Errors
    ///
    /// [`StreamError::MarkEvicted`] if the mark was pushed off a full stack.
    /// The lost mark is dropped and the cursor stays where it was, so the
    /// caller can fail the enclosing scan.
    pub fn rewind(&mut self) -> StreamResult<()> {
        self.ensure_open()?;
        self.next = self.marks.pop("rewind")?.unwrap_or(0);
        trace!(pos = self.next, held = self.marks.len(), "rewind");
        Ok(())
    }

    /// Maximum number of marks held at once.
    pub fn mark_depth(&self) -> usize {
        self.marks.depth()
    }

    /// Number of marks currently held.
    pub fn marks_held(&self) -> usize {
        self.marks.len()
    }

    // === Position ===

    /// Index of the next character to read.
    #[inline]
    pub fn offset(&self) -> usize {
        self.next
    }

    /// Number of characters in the buffer (0 once closed).
    pub fn len(&self) -> usize {
        self.chars.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Set the line number reported by [`pos`](Self::pos).
    ///
    /// The buffer never looks for line terminators; the scanner calls this
    /// when it consumes one.
    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    /// Snapshot of the current line and cursor.
    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.next)
    }

    // === Internals ===

    fn ensure_open(&self) -> StreamResult<&[char]> {
        self.chars.as_deref().ok_or(StreamError::Closed)
    }

    /// Append `text` to an open buffer. No-op when closed.
    fn fill(&mut self, text: &str) {
        if let Some(chars) = self.chars.as_mut() {
            chars.extend(text.chars());
            debug!(len = chars.len(), "stream opened");
        }
    }
}

impl Default for ReplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CharStream for ReplayBuffer {
    fn peek(&self) -> Option<char> {
        self.try_peek().unwrap_or_else(|err| {
            debug!(%err, "peek reported as EOF");
            None
        })
    }

    fn getch(&mut self) -> Option<char> {
        self.read().unwrap_or_else(|err| {
            debug!(%err, "getch reported as EOF");
            None
        })
    }

    fn pos(&self) -> Pos {
        ReplayBuffer::pos(self)
    }
}

/// Character counts always fit in `isize` (a `Vec` never holds more).
fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
