use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::{ArgValue, ArgumentList, MethodId};

/// Immutable snapshot of one completed call on a faked object.
///
/// Produced by [`freeze`](super::InterceptedCall::freeze) once the outcome of
/// the invocation is final. No field changes afterwards, so the record can be
/// read concurrently by assertions and by history rendering.
///
/// The [`Display`] implementation renders the method's simple identity and
/// the final argument values in declaration order. Two calls with identical
/// method and argument values render identically.
pub struct CompletedCall {
    target: Arc<dyn Any + Send + Sync>,
    method: MethodId,
    arguments: ArgumentList,
    return_value: Option<Box<dyn ArgValue>>,
}

impl CompletedCall {
    pub(crate) fn new(
        target: Arc<dyn Any + Send + Sync>,
        method: MethodId,
        arguments: ArgumentList,
        return_value: Option<Box<dyn ArgValue>>,
    ) -> Self {
        Self {
            target,
            method,
            arguments,
            return_value,
        }
    }

    /// Get the faked object the call was made on.
    #[must_use]
    pub fn target(&self) -> &Arc<dyn Any + Send + Sync> {
        &self.target
    }

    /// Returns `true` if the call was made on the passed `target`, `false`
    /// otherwise. Compares object identity, not value.
    #[must_use]
    pub fn is_on(&self, target: &Arc<dyn Any + Send + Sync>) -> bool {
        Arc::ptr_eq(&self.target, target)
    }

    /// Get the identity of the invoked method.
    #[must_use]
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Get the final argument values.
    #[must_use]
    pub fn arguments(&self) -> &ArgumentList {
        &self.arguments
    }

    /// Get the argument at `index` downcast to `T`.
    #[must_use]
    pub fn argument<T: Any>(&self, index: usize) -> Option<&T> {
        self.arguments.get_as(index)
    }

    /// Get the captured return value downcast to `T`.
    ///
    /// Returns `None` if no return value was set or it has a different type.
    #[must_use]
    pub fn return_value<T: Any>(&self) -> Option<&T> {
        self.return_value.as_ref()?.as_any().downcast_ref()
    }
}

impl Display for CompletedCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}({})", self.method, self.arguments)
    }
}

impl Debug for CompletedCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CompletedCall")
            .field("method", &self.method)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::{arg, ArgumentList, InterceptedCall, MethodId};

    const ADD: MethodId = MethodId::new("Calculator", "add", &["a", "b"], true);

    fn call(a: i32, b: i32) -> InterceptedCall {
        InterceptedCall::new(Arc::new(()), ADD, ArgumentList::new(&["a", "b"], vec![arg(a), arg(b)]))
    }

    #[test]
    fn freeze_keeps_the_final_values() {
        let mut call = call(1, 2);
        call.set_argument(1, arg(20));
        call.set_return_value(arg(21));

        let frozen = call.freeze();

        assert_eq!(Some(&1), frozen.argument::<i32>(0));
        assert_eq!(Some(&20), frozen.argument::<i32>(1));
        assert_eq!(Some(&21), frozen.return_value::<i32>());
    }

    #[test]
    fn identical_calls_render_identically() {
        assert_eq!(call(1, 2).freeze().to_string(), call(1, 2).freeze().to_string());
        assert_eq!("Calculator::add(a: 1, b: 2)", call(1, 2).freeze().to_string());
    }

    #[test]
    fn target_identity() {
        let target: Arc<dyn std::any::Any + Send + Sync> = Arc::new(());
        let other: Arc<dyn std::any::Any + Send + Sync> = Arc::new(());

        let frozen = InterceptedCall::new(
            target.clone(),
            ADD,
            ArgumentList::new(&["a", "b"], vec![arg(1), arg(2)]),
        )
        .freeze();

        assert!(frozen.is_on(&target));
        assert!(!frozen.is_on(&other));
    }

    #[test]
    #[should_panic(expected = "argument index 2 is out of range for Calculator::add")]
    fn set_argument_out_of_range() {
        call(1, 2).set_argument(2, arg(0));
    }

    #[test]
    #[should_panic(expected = "Logger::log has no result")]
    fn set_return_value_on_method_without_result() {
        const LOG: MethodId = MethodId::new("Logger", "log", &["line"], false);

        let mut call = InterceptedCall::new(
            Arc::new(()),
            LOG,
            ArgumentList::new(&["line"], vec![arg("hi".to_string())]),
        );
        call.set_return_value(arg(0));
    }
}
