//! Leaf specifications: comparisons captured at construction time.

use super::field::{FieldSource, FieldValue};
use super::{SpecError, SpecResult, Specification};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// Equality test of one named field against a constant.
///
/// # Invariants
/// - Field and constant are fixed at construction.
/// - A missing field or a field of another value kind is an error, not a
///   non-match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEquals {
    field: String,
    expected: FieldValue,
}

impl FieldEquals {
    pub fn new(field: impl Into<String>, expected: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn expected(&self) -> &FieldValue {
        &self.expected
    }
}

impl<T: FieldSource + ?Sized> Specification<T> for FieldEquals {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        let actual = item
            .field(&self.field)
            .ok_or_else(|| SpecError::MissingField(self.field.clone()))?;
        if actual.kind() != self.expected.kind() {
            return Err(SpecError::FieldKindMismatch {
                field: self.field.clone(),
                expected: self.expected.kind(),
                actual: actual.kind(),
            });
        }
        Ok(actual == self.expected)
    }
}

/// Infallible predicate backed by a closure.
pub struct Matches<T: ?Sized, F> {
    predicate: F,
    _item: PhantomData<fn(&T) -> bool>,
}

impl<T: ?Sized, F> Debug for Matches<T, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Specification<T> for Matches<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        Ok((self.predicate)(item))
    }
}

/// Builds a specification from a plain predicate closure.
pub fn from_fn<T: ?Sized, F>(predicate: F) -> Matches<T, F>
where
    F: Fn(&T) -> bool + Send + Sync,
{
    Matches {
        predicate,
        _item: PhantomData,
    }
}
