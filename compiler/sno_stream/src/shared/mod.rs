//! Lock-protected handle for using one stream from several threads.
//!
//! A [`ReplayBuffer`] is meant to be driven by a single scanner. When the
//! same stream has to be reachable from more than one thread,
//! [`SharedBuffer`] wraps it in a mutex and takes the lock for exactly one
//! operation at a time. Sequences that must not interleave (mark, read,
//! reset) go through [`SharedBuffer::with`], which holds the lock for the
//! whole closure.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{CharStream, Pos, ReplayBuffer};

/// Cloneable, thread-safe handle to a [`ReplayBuffer`].
///
/// Clones share the same buffer, cursor and marks.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer(Arc<Mutex<ReplayBuffer>>);

impl SharedBuffer {
    pub fn new(buffer: ReplayBuffer) -> Self {
        SharedBuffer(Arc::new(Mutex::new(buffer)))
    }

    /// Run `f` with exclusive access to the buffer.
    ///
    /// The lock is held until `f` returns, so `f` must not call back into
    /// this handle.
    pub fn with<R>(&self, f: impl FnOnce(&mut ReplayBuffer) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<ReplayBuffer> for SharedBuffer {
    fn from(buffer: ReplayBuffer) -> Self {
        Self::new(buffer)
    }
}

impl CharStream for SharedBuffer {
    fn peek(&self) -> Option<char> {
        self.0.lock().peek()
    }

    fn getch(&mut self) -> Option<char> {
        self.0.lock().getch()
    }

    fn pos(&self) -> Pos {
        self.0.lock().pos()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
