//! The [`output`](self) module contains the writer abstraction that is used
//! to render diagnostic messages.

use std::ops::{Deref, DerefMut};

const INDENT: &str = "  ";

/// Sink for formatted diagnostic text with indentation control.
///
/// Indentation is a pure formatting concern: it only affects how content is
/// prefixed, never the line-break or content decisions of the caller. Use
/// [`IndentScope`] instead of calling [`indent`](OutputWriter::indent) and
/// [`unindent`](OutputWriter::unindent) manually.
pub trait OutputWriter {
    /// Write the passed `text` at the current indentation level.
    fn write(&mut self, text: &str);

    /// Terminate the current line.
    fn write_line(&mut self);

    /// Raise the indentation level by one.
    fn indent(&mut self);

    /// Lower the indentation level by one.
    fn unindent(&mut self);
}

/// Scoped indentation of an [`OutputWriter`].
///
/// Creating the scope raises the indentation level, dropping it restores the
/// previous level. The restore is guaranteed on every exit path, including
/// early returns and unwinding.
#[must_use]
pub struct IndentScope<'a> {
    writer: &'a mut dyn OutputWriter,
}

impl<'a> IndentScope<'a> {
    /// Create a new [`IndentScope`] that indents the passed `writer`.
    pub fn new(writer: &'a mut dyn OutputWriter) -> Self {
        writer.indent();

        Self { writer }
    }
}

impl<'a> Deref for IndentScope<'a> {
    type Target = dyn OutputWriter + 'a;

    fn deref(&self) -> &Self::Target {
        self.writer
    }
}

impl DerefMut for IndentScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.writer
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        self.writer.unindent();
    }
}

/// [`OutputWriter`] that collects the written text into a [`String`].
///
/// Indentation is applied lazily when the first non-empty content of a line
/// is written, so blank lines never carry indentation.
#[derive(Default, Debug)]
pub struct StringWriter {
    buffer: String,
    level: usize,
    line_started: bool,
}

impl StringWriter {
    /// Create a new empty [`StringWriter`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the collected text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl OutputWriter for StringWriter {
    fn write(&mut self, text: &str) {
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.write_line();
            }

            if segment.is_empty() {
                continue;
            }

            if !self.line_started {
                for _ in 0..self.level {
                    self.buffer.push_str(INDENT);
                }
                self.line_started = true;
            }

            self.buffer.push_str(segment);
        }
    }

    fn write_line(&mut self) {
        self.buffer.push('\n');
        self.line_started = false;
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn unindent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}
