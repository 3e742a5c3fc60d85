//! Errors raised by the strict stream operations.
//!
//! Every failure is reported synchronously and leaves the cursor exactly
//! where it was. The marks are untouched too, except that a failed
//! `rewind`/`release_mark` still drops the evicted mark it tried to pop.

use thiserror::Error;

/// Result alias for strict [`ReplayBuffer`](crate::ReplayBuffer) operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Failure of a strict stream operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The stream was closed; its buffer is gone.
    #[error("stream closed")]
    Closed,

    /// A range or count falls outside the valid bounds.
    #[error("{op}: index {index} out of range (limit {limit})")]
    IndexOutOfRange {
        /// Operation that rejected the request.
        op: &'static str,
        /// Offending index or count.
        index: usize,
        /// Largest value the operation would have accepted.
        limit: usize,
    },

    /// An argument was rejected outright.
    #[error("{op}: {reason}")]
    IllegalArgument {
        /// Operation that rejected the request.
        op: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },

    /// The mark to return to was pushed off the bottom of a full mark stack.
    #[error("{op}: mark was evicted from the mark stack (depth {depth})")]
    MarkEvicted {
        /// Operation that needed the mark.
        op: &'static str,
        /// Depth of the stack that evicted it.
        depth: usize,
    },
}

impl StreamError {
    /// Returns `true` for [`StreamError::Closed`].
    pub fn is_closed(&self) -> bool {
        matches!(self, StreamError::Closed)
    }
}
