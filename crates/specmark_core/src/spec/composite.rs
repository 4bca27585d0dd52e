//! Boolean composites over ordered operand lists.
//!
//! # Invariants
//! - `And` over zero operands is `true`; `Or` and `Xor` over zero operands
//!   are `false`.
//! - `And`/`Or` evaluate left to right and stop at the first deciding
//!   verdict, so operands after it are never evaluated.
//! - `Xor` evaluates every operand and is `true` for an odd count of `true`.

use super::{BoxedSpecification, SpecResult, Specification};
use std::fmt::{Debug, Formatter};

macro_rules! operand_list {
    ($name:ident) => {
        impl<T: ?Sized> $name<T> {
            pub fn new(operands: Vec<BoxedSpecification<T>>) -> Self {
                Self { operands }
            }

            /// Composite with no operands.
            pub fn empty() -> Self {
                Self::new(Vec::new())
            }

            /// Returns a composite with `operand` appended after the current ones.
            pub fn with<S>(mut self, operand: S) -> Self
            where
                S: Specification<T> + 'static,
            {
                self.operands.push(Box::new(operand));
                self
            }

            pub fn len(&self) -> usize {
                self.operands.len()
            }

            pub fn is_empty(&self) -> bool {
                self.operands.is_empty()
            }
        }

        impl<T: ?Sized> Debug for $name<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("operands", &self.operands.len())
                    .finish()
            }
        }
    };
}

/// True iff every operand is true.
pub struct And<T: ?Sized> {
    operands: Vec<BoxedSpecification<T>>,
}

/// True iff at least one operand is true.
pub struct Or<T: ?Sized> {
    operands: Vec<BoxedSpecification<T>>,
}

/// True iff an odd number of operands are true.
pub struct Xor<T: ?Sized> {
    operands: Vec<BoxedSpecification<T>>,
}

operand_list!(And);
operand_list!(Or);
operand_list!(Xor);

impl<T: ?Sized> Specification<T> for And<T> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        for operand in &self.operands {
            if !operand.is_satisfied(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<T: ?Sized> Specification<T> for Or<T> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        for operand in &self.operands {
            if operand.is_satisfied(item)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<T: ?Sized> Specification<T> for Xor<T> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        let mut parity = false;
        for operand in &self.operands {
            parity ^= operand.is_satisfied(item)?;
        }
        Ok(parity)
    }
}

/// Inverts one operand.
#[derive(Debug, Clone)]
pub struct Not<S> {
    operand: S,
}

impl<S> Not<S> {
    pub fn new(operand: S) -> Self {
        Self { operand }
    }

    pub fn into_inner(self) -> S {
        self.operand
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for Not<S> {
    fn is_satisfied(&self, item: &T) -> SpecResult<bool> {
        Ok(!self.operand.is_satisfied(item)?)
    }
}
