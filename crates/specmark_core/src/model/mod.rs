//! Item models evaluated by specifications.
//!
//! # Responsibility
//! - Define the typed catalog record and a free-form attribute record.
//! - Expose both through `FieldSource` for generic field comparisons.
//!
//! # Invariants
//! - Typed records validate on construction and on deserialization.

pub mod product;
pub mod record;
