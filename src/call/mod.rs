//! The [`call`](self) module contains the representation of a single
//! invocation on a faked object.
//!
//! A call starts out as a mutable [`InterceptedCall`] while the invocation is
//! dispatched and configured behaviors may still rewrite argument slots or
//! set a return value. Once the outcome of the invocation is final the record
//! is converted into an immutable [`CompletedCall`] by calling
//! [`freeze`](InterceptedCall::freeze). The conversion consumes the mutable
//! record, so a call can neither be frozen twice nor modified afterwards.

mod arguments;
mod completed;
mod intercepted;

use std::fmt::{Display, Formatter, Result as FmtResult};

pub use arguments::{arg, ArgValue, ArgumentList};
pub use completed::CompletedCall;
pub use intercepted::InterceptedCall;

/// Identity of an invoked operation: the declaring type, the method name and
/// the declared argument names.
///
/// This is `'static` metadata of the shape that generated interception code
/// emits once per faked method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodId {
    type_name: &'static str,
    name: &'static str,
    arg_names: &'static [&'static str],
    has_result: bool,
}

impl MethodId {
    /// Create a new [`MethodId`] instance.
    ///
    /// `has_result` is `false` for methods that return the unit type; calls
    /// to such a method reject a return value.
    pub const fn new(
        type_name: &'static str,
        name: &'static str,
        arg_names: &'static [&'static str],
        has_result: bool,
    ) -> Self {
        Self {
            type_name,
            name,
            arg_names,
            has_result,
        }
    }

    /// Get the name of the declaring type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Get the name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the declared argument names.
    #[must_use]
    pub fn arg_names(&self) -> &'static [&'static str] {
        self.arg_names
    }

    /// Returns `true` if the method has a non-unit result, `false` otherwise.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.has_result
    }
}

impl Display for MethodId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}::{}", self.type_name, self.name)
    }
}
