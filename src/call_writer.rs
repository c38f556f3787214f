//! The [`call_writer`](self) module contains the contract for rendering a
//! list of recorded calls into diagnostic text.

use std::sync::Arc;

use crate::call::CompletedCall;
use crate::output::OutputWriter;

/// Renders a sequence of completed calls into an [`OutputWriter`].
pub trait CallWriter {
    /// Write one rendered representation per call, in the supplied order.
    ///
    /// Must not fail for any well-formed completed call; argument values are
    /// rendered best-effort via their own textual conversion.
    fn write_calls(&self, calls: &[Arc<CompletedCall>], writer: &mut dyn OutputWriter);
}

/// Default [`CallWriter`] that renders every call on its own line.
///
/// Calls with identical method and argument values render identically.
#[derive(Default, Debug)]
pub struct DefaultCallWriter;

impl DefaultCallWriter {
    /// Create a new [`DefaultCallWriter`] instance.
    pub fn new() -> Self {
        Self
    }
}

impl CallWriter for DefaultCallWriter {
    fn write_calls(&self, calls: &[Arc<CompletedCall>], writer: &mut dyn OutputWriter) {
        for call in calls {
            writer.write(&call.to_string());
            writer.write_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::call::{arg, ArgumentList, InterceptedCall, MethodId};
    use crate::output::StringWriter;

    use super::{CallWriter, DefaultCallWriter};

    const GET: MethodId = MethodId::new("Store", "get", &["key"], true);

    fn call(key: &str) -> Arc<crate::call::CompletedCall> {
        let call = InterceptedCall::new(
            Arc::new(()),
            GET,
            ArgumentList::new(&["key"], vec![arg(key.to_string())]),
        );

        Arc::new(call.freeze())
    }

    #[test]
    fn one_line_per_call_in_supplied_order() {
        let calls = vec![call("a"), call("b")];
        let mut writer = StringWriter::new();

        DefaultCallWriter::new().write_calls(&calls, &mut writer);

        assert_eq!(
            "Store::get(key: \"a\")\nStore::get(key: \"b\")\n",
            writer.as_str()
        );
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let mut writer = StringWriter::new();

        DefaultCallWriter::new().write_calls(&[], &mut writer);

        assert_eq!("", writer.as_str());
    }
}
