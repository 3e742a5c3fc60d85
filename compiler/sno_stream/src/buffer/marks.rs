//! Bounded stack of saved cursor positions.

use std::collections::VecDeque;

use crate::{StreamError, StreamResult};

/// Saved positions, newest at the back.
///
/// Pushing onto a full stack evicts the oldest entry, so a stack of depth 1
/// behaves as a single slot that every `push` overwrites. Evicted entries
/// are still counted: popping down to one of them reports
/// [`StreamError::MarkEvicted`] instead of handing back a wrong position.
/// A stack that never lost an entry reads as position 0 when empty.
#[derive(Clone, Debug)]
pub(crate) struct MarkStack {
    marks: VecDeque<usize>,
    depth: usize,
    /// Entries pushed off the bottom and not yet popped.
    evicted: usize,
}

impl MarkStack {
    pub(crate) fn new(depth: usize) -> Self {
        debug_assert!(depth > 0, "mark depth must be at least 1");
        // Grows on demand; `depth` comes straight from the caller's options.
        MarkStack {
            marks: VecDeque::new(),
            depth,
            evicted: 0,
        }
    }

    pub(crate) fn push(&mut self, pos: usize) {
        if self.marks.len() == self.depth {
            self.marks.pop_front();
            self.evicted = self.evicted.saturating_add(1);
        }
        self.marks.push_back(pos);
    }

    /// Most recent mark, or 0 if nothing was ever marked.
    pub(crate) fn top(&self, op: &'static str) -> StreamResult<usize> {
        match self.marks.back() {
            Some(&pos) => Ok(pos),
            None if self.evicted == 0 => Ok(0),
            None => Err(self.evicted_error(op)),
        }
    }

    /// Drop the most recent mark.
    ///
    /// An evicted entry is dropped too, but reported as an error since its
    /// position is gone.
    pub(crate) fn pop(&mut self, op: &'static str) -> StreamResult<Option<usize>> {
        if let Some(pos) = self.marks.pop_back() {
            return Ok(Some(pos));
        }
        if self.evicted == 0 {
            return Ok(None);
        }
        self.evicted -= 1;
        Err(self.evicted_error(op))
    }

    pub(crate) fn clear(&mut self) {
        self.marks.clear();
        self.evicted = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.marks.len()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    fn evicted_error(&self, op: &'static str) -> StreamError {
        StreamError::MarkEvicted {
            op,
            depth: self.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MarkStack;
    use crate::StreamError;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_stack_reads_as_zero() {
        let mut marks = MarkStack::new(1);
        assert_eq!(marks.top("reset"), Ok(0));
        assert_eq!(marks.pop("rewind"), Ok(None));
        assert_eq!(marks.len(), 0);
    }

    #[test]
    fn depth_one_overwrites() {
        let mut marks = MarkStack::new(1);
        marks.push(3);
        marks.push(7);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks.top("reset"), Ok(7));
        assert_eq!(marks.pop("rewind"), Ok(Some(7)));
        assert_eq!(
            marks.top("reset"),
            Err(StreamError::MarkEvicted {
                op: "reset",
                depth: 1
            })
        );
    }

    #[test]
    fn full_stack_evicts_oldest() {
        let mut marks = MarkStack::new(2);
        marks.push(1);
        marks.push(2);
        marks.push(3);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks.pop("rewind"), Ok(Some(3)));
        assert_eq!(marks.pop("rewind"), Ok(Some(2)));
        assert_eq!(
            marks.pop("rewind"),
            Err(StreamError::MarkEvicted {
                op: "rewind",
                depth: 2
            })
        );
        // The lost entry was consumed by the failed pop.
        assert_eq!(marks.pop("rewind"), Ok(None));
        assert_eq!(marks.top("reset"), Ok(0));
    }

    #[test]
    fn huge_depth_does_not_preallocate() {
        let mut marks = MarkStack::new(usize::MAX);
        marks.push(4);
        assert_eq!(marks.depth(), usize::MAX);
        assert_eq!(marks.top("reset"), Ok(4));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut marks = MarkStack::new(1);
        marks.push(5);
        marks.push(6);
        marks.clear();
        assert_eq!(marks.len(), 0);
        assert_eq!(marks.top("reset"), Ok(0));
        assert_eq!(marks.pop("rewind"), Ok(None));
        assert_eq!(marks.depth(), 1);
    }
}
