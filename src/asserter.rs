//! The [`asserter`](self) module implements the assertion engine that checks
//! a call history against a caller-supplied expectation.

use std::sync::Arc;

use thiserror::Error;

use crate::call::CompletedCall;
use crate::call_writer::CallWriter;
use crate::history::CallHistory;
use crate::output::{IndentScope, OutputWriter, StringWriter};
use crate::repeat::{Description, Repeat};

/// Caller-supplied expectation against recorded calls.
///
/// Combines the rule that selects matching calls with a renderer for the
/// textual description of the expectation, e.g. the method name and the
/// constrained argument values.
pub trait CallMatcher {
    /// Returns `true` if the passed `call` satisfies the expectation,
    /// `false` otherwise.
    fn matches(&self, call: &CompletedCall) -> bool;

    /// Write a description of the expected call to the passed `writer`.
    fn describe(&self, writer: &mut dyn OutputWriter);
}

/// Create a [`CallMatcher`] from a match predicate and a describe closure.
pub fn closure<M, D>(matches: M, describe: D) -> Closure<M, D>
where
    M: Fn(&CompletedCall) -> bool,
    D: Fn(&mut dyn OutputWriter),
{
    Closure { matches, describe }
}

#[must_use]
#[derive(Debug)]
pub struct Closure<M, D> {
    matches: M,
    describe: D,
}

impl<M, D> CallMatcher for Closure<M, D>
where
    M: Fn(&CompletedCall) -> bool,
    D: Fn(&mut dyn OutputWriter),
{
    fn matches(&self, call: &CompletedCall) -> bool {
        (self.matches)(call)
    }

    fn describe(&self, writer: &mut dyn OutputWriter) {
        (self.describe)(writer);
    }
}

/// Error of an assertion whose repeat constraint was not met.
///
/// Carries the fully rendered diagnostic message and never indicates an
/// internal fault; it typically surfaces as a failed test.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ExpectationError {
    message: String,
}

impl ExpectationError {
    /// Get the rendered diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Checks recorded calls against an expectation and a repeat constraint.
///
/// The asserter operates on a snapshot of the history taken at construction
/// time and holds no shared mutable state.
pub struct Asserter<'a> {
    calls: Vec<Arc<CompletedCall>>,
    call_writer: &'a dyn CallWriter,
}

impl<'a> Asserter<'a> {
    /// Create a new [`Asserter`] over the passed `calls`.
    pub fn new(calls: Vec<Arc<CompletedCall>>, call_writer: &'a dyn CallWriter) -> Self {
        Self { calls, call_writer }
    }

    /// Create a new [`Asserter`] over a snapshot of the passed `history`.
    pub fn for_history(history: &CallHistory, call_writer: &'a dyn CallWriter) -> Self {
        Self::new(history.snapshot(), call_writer)
    }

    /// Assert that the number of recorded calls matching `matcher` satisfies
    /// the `repeat` constraint.
    ///
    /// All calls are counted exhaustively, never short-circuited: the exact
    /// match count is part of the diagnostic message. On success nothing else
    /// is observable.
    ///
    /// # Errors
    /// Returns an [`ExpectationError`] carrying the rendered diagnostic if
    /// the constraint is not satisfied. This is the only error raised here
    /// and always means "expectation not met".
    pub fn assert_was_called(
        &self,
        matcher: &dyn CallMatcher,
        repeat: &dyn Repeat,
    ) -> Result<(), ExpectationError> {
        let matched_count = self.calls.iter().filter(|c| matcher.matches(c)).count();

        if repeat.matches(matched_count) {
            return Ok(());
        }

        Err(ExpectationError {
            message: self.failure_message(matcher, repeat, matched_count),
        })
    }

    fn failure_message(
        &self,
        matcher: &dyn CallMatcher,
        repeat: &dyn Repeat,
        matched_count: usize,
    ) -> String {
        let mut writer = StringWriter::new();
        writer.write_line();

        {
            let mut scope = IndentScope::new(&mut writer);
            append_call_description(matcher, &mut *scope);
            self.append_expectation(repeat, matched_count, &mut *scope);
            self.append_call_list(&mut *scope);
            scope.write_line();
        }

        writer.into_string()
    }

    fn append_expectation(
        &self,
        repeat: &dyn Repeat,
        matched_count: usize,
        writer: &mut dyn OutputWriter,
    ) {
        writer.write(&format!("Expected to find it {} ", Description(repeat)));

        // Branches on the whole history being empty, not on the matched
        // subset. A fake with unrelated prior calls and zero matches reports
        // "#0 times" together with the full call list.
        if self.calls.is_empty() {
            writer.write("but no calls were made to the fake object.");
        } else {
            writer.write(&format!(
                "but found it #{matched_count} times among the calls:"
            ));
        }

        writer.write_line();
    }

    fn append_call_list(&self, writer: &mut dyn OutputWriter) {
        let mut scope = IndentScope::new(writer);
        self.call_writer.write_calls(&self.calls, &mut *scope);
    }
}

fn append_call_description(matcher: &dyn CallMatcher, writer: &mut dyn OutputWriter) {
    writer.write_line();
    writer.write("Assertion failed for the following call:");
    writer.write_line();

    let mut scope = IndentScope::new(writer);
    matcher.describe(&mut *scope);
    scope.write_line();
}
