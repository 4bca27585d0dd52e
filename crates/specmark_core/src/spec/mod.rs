//! Composable predicate ("specification") engine.
//!
//! # Responsibility
//! - Define the single-method capability every predicate implements.
//! - Combine predicates structurally (AND/OR/NOT/XOR) without inspecting
//!   operand internals.
//! - Filter collections through one predicate, preserving input order.
//!
//! # Invariants
//! - Specifications are immutable after construction; combinators wrap
//!   operands in new composites and never mutate them.
//! - A composite verdict depends only on its operands' verdicts for the same
//!   item. Evaluation is deterministic and side-effect free.
//! - Malformed items surface as `SpecError`, never as a silent `false`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod composite;
mod field;
mod filter;
mod leaf;

pub use composite::{And, Not, Or, Xor};
pub use field::{FieldKind, FieldSource, FieldValue};
pub use filter::{count_matching, filter, filter_iter, FilterIter};
pub use leaf::{from_fn, FieldEquals, Matches};

/// Result type used by specification evaluation.
pub type SpecResult<T> = Result<T, SpecError>;

/// Evaluation failures raised by leaf specifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// Item does not expose the field a leaf compares against.
    MissingField(String),
    /// Item exposes the field, but with a different value kind.
    FieldKindMismatch {
        field: String,
        expected: FieldKind,
        actual: FieldKind,
    },
}

impl Display for SpecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "item has no field `{field}`"),
            Self::FieldKindMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "field `{field}` holds {actual} value, expected {expected}"
            ),
        }
    }
}

impl Error for SpecError {}

/// Boolean verdict over one item.
///
/// Implementations must be pure: the same item always yields the same
/// verdict. `Send + Sync` lets one specification be shared by concurrent
/// readers without locking.
pub trait Specification<T: ?Sized>: Send + Sync {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool>;
}

/// Heap-allocated specification, the operand type held by composites.
pub type BoxedSpecification<T> = Box<dyn Specification<T>>;

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        (**self).is_satisfied(item)
    }
}

/// Fluent combinators available on every specification.
///
/// Each method consumes its operands and returns a new composite; to reuse an
/// operand elsewhere, wrap it in `Arc` first.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized + 'static {
    /// `self AND other`.
    fn and<S>(self, other: S) -> And<T>
    where
        S: Specification<T> + 'static,
    {
        And::new(vec![Box::new(self), Box::new(other)])
    }

    /// `self OR other`.
    fn or<S>(self, other: S) -> Or<T>
    where
        S: Specification<T> + 'static,
    {
        Or::new(vec![Box::new(self), Box::new(other)])
    }

    /// `self XOR other`.
    fn xor<S>(self, other: S) -> Xor<T>
    where
        S: Specification<T> + 'static,
    {
        Xor::new(vec![Box::new(self), Box::new(other)])
    }

    /// `NOT self`.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Moves this specification behind a trait object.
    fn boxed(self) -> BoxedSpecification<T> {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + 'static> SpecificationExt<T> for S {}
