//! The [`history`](self) module implements the [`CallHistory`] type.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::call::CompletedCall;

/// Append-only, insertion-ordered record of the completed calls made on one
/// faked object.
///
/// Each faked object owns exactly one history with the same lifetime as the
/// object; there is no process-wide registry. Appending is safe against
/// concurrent appends and against snapshots taken by in-progress assertions:
/// a reader observes a call either fully recorded or not at all.
#[derive(Default, Debug)]
pub struct CallHistory {
    calls: RwLock<Vec<Arc<CompletedCall>>>,
}

impl CallHistory {
    /// Create a new empty [`CallHistory`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the passed completed `call` to the end of the history.
    ///
    /// Order is the order of invocation completion; entries are never
    /// reordered or removed.
    pub fn append(&self, call: CompletedCall) {
        self.calls.write().push(Arc::new(call));
    }

    /// Get a read-only view of the recorded calls in insertion order.
    ///
    /// The view is restartable and unaffected by appends that complete after
    /// it was taken: such calls may be missing, but never appear corrupted or
    /// duplicated.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<CompletedCall>> {
        self.calls.read().clone()
    }

    /// Get the number of recorded calls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.read().len()
    }

    /// Returns `true` if no call was recorded yet, `false` otherwise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.read().is_empty()
    }
}
