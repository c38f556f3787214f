use std::any::Any;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Type-erased argument or return value of a recorded call.
///
/// Implemented for every `Debug + Send + Sync + 'static` type. The value can
/// be recovered by match predicates via [`as_any`](ArgValue::as_any) and is
/// rendered for diagnostics via its own [`Debug`] representation, so
/// rendering is best-effort and never fails on the writer's side.
pub trait ArgValue: Send + Sync + 'static {
    /// Get the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Write a human readable representation of the value to the passed
    /// formatter.
    ///
    /// # Errors
    /// Returns an error if writing to the formatter failed.
    fn render(&self, f: &mut Formatter<'_>) -> FmtResult;
}

impl<T> ArgValue for T
where
    T: Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{self:?}")
    }
}

impl Display for dyn ArgValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.render(f)
    }
}

/// Box the passed `value` as [`ArgValue`].
pub fn arg<T>(value: T) -> Box<dyn ArgValue>
where
    T: Debug + Send + Sync + 'static,
{
    Box::new(value)
}

/// Ordered, named collection of the argument values of one call.
///
/// Values are indexed positionally and by their declared name. The collection
/// is mutable while the call is in its intercepted phase and becomes
/// immutable once the call is frozen.
pub struct ArgumentList {
    names: &'static [&'static str],
    values: Vec<Box<dyn ArgValue>>,
}

impl ArgumentList {
    /// Create a new [`ArgumentList`] from the declared `names` and the actual
    /// `values` of a call.
    ///
    /// # Panics
    /// Panics if the number of values does not match the number of declared
    /// names. This is a defect in the interception layer.
    pub fn new(names: &'static [&'static str], values: Vec<Box<dyn ArgValue>>) -> Self {
        assert_eq!(
            names.len(),
            values.len(),
            "expected {} argument values but got {}",
            names.len(),
            values.len()
        );

        Self { names, values }
    }

    /// Get the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the call has no arguments, `false` otherwise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the declared argument names.
    #[must_use]
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Get the value at the passed `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn ArgValue> {
        self.values.get(index).map(Box::as_ref)
    }

    /// Get the value of the argument with the declared `name`.
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&dyn ArgValue> {
        let index = self.names.iter().position(|n| *n == name)?;

        self.get(index)
    }

    /// Get the value at the passed `index` downcast to `T`.
    ///
    /// Returns `None` if the index is out of range or the value has a
    /// different type.
    #[must_use]
    pub fn get_as<T: Any>(&self, index: usize) -> Option<&T> {
        self.get(index)?.as_any().downcast_ref()
    }

    /// Iterate over the arguments as `(name, value)` pairs in declaration
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn ArgValue)> + '_ {
        self.names
            .iter()
            .copied()
            .zip(self.values.iter().map(Box::as_ref))
    }

    pub(crate) fn set(&mut self, index: usize, value: Box<dyn ArgValue>) {
        self.values[index] = value;
    }
}

impl Display for ArgumentList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{name}: {value}")?;
        }

        Ok(())
    }
}

impl Debug for ArgumentList {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut map = f.debug_map();
        for (name, value) in self.iter() {
            map.entry(&name, &Rendered(value));
        }

        map.finish()
    }
}

struct Rendered<'a>(&'a dyn ArgValue);

impl Debug for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.render(f)
    }
}
