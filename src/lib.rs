pub mod asserter;
pub mod call;
pub mod call_writer;
pub mod history;
pub mod output;
pub mod repeat;

pub use asserter::{Asserter, CallMatcher, ExpectationError};
pub use call::{arg, ArgValue, ArgumentList, CompletedCall, InterceptedCall, MethodId};
pub use call_writer::{CallWriter, DefaultCallWriter};
pub use history::CallHistory;
pub use output::{IndentScope, OutputWriter, StringWriter};
pub use repeat::Repeat;
