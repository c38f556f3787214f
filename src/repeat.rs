//! The [`repeat`](self) module contains constraints on how often a matching
//! call is expected to be found in a call history.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Constraint on the number of matching calls an assertion expects.
///
/// A repeat constraint is a pure predicate over the match count paired with a
/// human readable description of the expected multiplicity. The description
/// is embedded into the diagnostic message of a failed assertion, e.g.
/// `"Expected to find it exactly once ..."`.
pub trait Repeat {
    /// Returns `true` if the passed match `count` satisfies the constraint,
    /// `false` otherwise.
    fn matches(&self, count: usize) -> bool;

    /// Write a human readable description of the expected multiplicity to
    /// the passed formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult;
}

/// Adapter that renders a [`Repeat`] via [`Display`].
pub struct Description<'a>(pub &'a dyn Repeat);

impl Display for Description<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

fn fmt_times(f: &mut Formatter<'_>, count: usize) -> FmtResult {
    match count {
        1 => write!(f, "once"),
        2 => write!(f, "twice"),
        n => write!(f, "{n} times"),
    }
}

/* Exactly */

/// Create a constraint that expects exactly `count` matching calls.
pub fn exactly(count: usize) -> Exactly {
    Exactly(count)
}

#[must_use]
#[derive(Debug)]
pub struct Exactly(usize);

impl Repeat for Exactly {
    fn matches(&self, count: usize) -> bool {
        count == self.0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "exactly ")?;
        fmt_times(f, self.0)
    }
}

/* AtLeast */

/// Create a constraint that expects `count` or more matching calls.
pub fn at_least(count: usize) -> AtLeast {
    AtLeast(count)
}

#[must_use]
#[derive(Debug)]
pub struct AtLeast(usize);

impl Repeat for AtLeast {
    fn matches(&self, count: usize) -> bool {
        count >= self.0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "at least ")?;
        fmt_times(f, self.0)
    }
}

/* NoMoreThan */

/// Create a constraint that expects at most `count` matching calls.
pub fn no_more_than(count: usize) -> NoMoreThan {
    NoMoreThan(count)
}

#[must_use]
#[derive(Debug)]
pub struct NoMoreThan(usize);

impl Repeat for NoMoreThan {
    fn matches(&self, count: usize) -> bool {
        count <= self.0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "no more than ")?;
        fmt_times(f, self.0)
    }
}

/* Never */

/// Create a constraint that expects no matching call at all.
pub fn never() -> Never {
    Never
}

#[must_use]
#[derive(Debug)]
pub struct Never;

impl Repeat for Never {
    fn matches(&self, count: usize) -> bool {
        count == 0
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "never")
    }
}

/* Closure */

/// Create a constraint from the passed predicate `f` and its `description`.
pub fn closure<F, D>(f: F, description: D) -> Closure<F>
where
    D: Into<String>,
{
    Closure {
        f,
        description: description.into(),
    }
}

#[must_use]
#[derive(Debug)]
pub struct Closure<F> {
    f: F,
    description: String,
}

impl<F> Repeat for Closure<F>
where
    F: Fn(usize) -> bool,
{
    fn matches(&self, count: usize) -> bool {
        (self.f)(count)
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.description)
    }
}
