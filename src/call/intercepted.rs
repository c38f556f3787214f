use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::{ArgValue, ArgumentList, CompletedCall, MethodId};

/// A call in its mutable, in-flight phase.
///
/// The record is created by the interception layer when an invocation is
/// observed and belongs to exactly that one invocation. Configured behaviors
/// may rewrite argument slots (for out/ref style parameters) and set the
/// return value while the call is dispatched. It must not be shared with
/// concurrent assertions; only the [`CompletedCall`] produced by
/// [`freeze`](Self::freeze) is.
pub struct InterceptedCall {
    target: Arc<dyn Any + Send + Sync>,
    method: MethodId,
    arguments: ArgumentList,
    return_value: Option<Box<dyn ArgValue>>,
}

impl InterceptedCall {
    /// Create a new [`InterceptedCall`] for an invocation of `method` on the
    /// faked `target` with the passed `arguments`.
    pub fn new(
        target: Arc<dyn Any + Send + Sync>,
        method: MethodId,
        arguments: ArgumentList,
    ) -> Self {
        Self {
            target,
            method,
            arguments,
            return_value: None,
        }
    }

    /// Get the faked object the call was made on.
    #[must_use]
    pub fn target(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.target
    }

    /// Get the identity of the invoked method.
    #[must_use]
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Get the current argument values.
    #[must_use]
    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Replace the value of the argument at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range. This is a defect in the behavior
    /// configuration layer, not a recoverable condition.
    pub fn set_argument(&mut self, index: usize, value: Box<dyn ArgValue>) {
        assert!(
            index < self.arguments.len(),
            "argument index {index} is out of range for {} ({} arguments)",
            self.method,
            self.arguments.len()
        );

        self.arguments.set(index, value);
    }

    /// Set the return value of the call.
    ///
    /// # Panics
    /// Panics if the invoked method has no result. This is a defect in the
    /// behavior configuration layer, not a recoverable condition.
    pub fn set_return_value(&mut self, value: Box<dyn ArgValue>) {
        assert!(
            self.method.has_result(),
            "{} has no result, a return value cannot be set",
            self.method
        );

        self.return_value = Some(value);
    }

    /// Freeze the call into an immutable [`CompletedCall`].
    ///
    /// Consumes the record: the one-way conversion makes freezing twice or
    /// mutating a frozen call impossible.
    #[must_use]
    pub fn freeze(self) -> CompletedCall {
        CompletedCall::new(self.target, self.method, self.arguments, self.return_value)
    }
}

impl Debug for InterceptedCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("InterceptedCall")
            .field("method", &self.method)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
