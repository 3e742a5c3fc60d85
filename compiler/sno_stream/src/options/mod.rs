//! Construction-time options for [`ReplayBuffer`](crate::ReplayBuffer).

/// Options controlling a [`ReplayBuffer`](crate::ReplayBuffer).
///
/// These are independent settings with plain defaults; callers override
/// only what they need:
///
/// ```
/// use sno_stream::{ReplayBuffer, StreamOptions};
///
/// let buf = ReplayBuffer::with_options(StreamOptions::default().with_mark_depth(4));
/// assert_eq!(buf.mark_depth(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamOptions {
    /// Number of nested marks kept before the oldest one is evicted.
    ///
    /// The default of 1 is a single mark slot: every `mark()` replaces the
    /// previous one.
    pub mark_depth: usize,
    /// Line number reported before the scanner first calls `set_line`.
    pub first_line: u32,
}

impl StreamOptions {
    pub const DEFAULT_MARK_DEPTH: usize = 1;

    /// Set the mark stack depth. A depth of 0 is treated as 1.
    #[must_use]
    pub fn with_mark_depth(mut self, depth: usize) -> Self {
        self.mark_depth = depth;
        self
    }

    #[must_use]
    pub fn with_first_line(mut self, line: u32) -> Self {
        self.first_line = line;
        self
    }

    /// Mark depth after normalization (never 0).
    pub(crate) fn effective_mark_depth(&self) -> usize {
        self.mark_depth.max(1)
    }
}

impl Default for StreamOptions {
    fn default() -> Self {
        StreamOptions {
            mark_depth: Self::DEFAULT_MARK_DEPTH,
            first_line: 0,
        }
    }
}
