//! Hierarchical markup builder and serializer.
//!
//! # Responsibility
//! - Assemble a labeled, ordered tree through a single-owner builder.
//! - Serialize the tree to indented block markup, one tag or text per line.
//!
//! # Invariants
//! - Every node label has at least one non-whitespace character.
//! - Children are owned by exactly one parent and only ever appended.
//! - Serialization is pure and always reflects the current tree.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod builder;
mod node;

pub use builder::MarkupBuilder;
pub use node::MarkupNode;

/// Spaces per depth level when no width is configured.
pub const DEFAULT_INDENT_WIDTH: usize = 2;
/// Largest accepted indent width.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Result type used by markup construction.
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Markup construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// Label is empty or whitespace only.
    EmptyLabel,
    /// Indent width exceeds `MAX_INDENT_WIDTH`.
    IndentTooWide(usize),
}

impl Display for MarkupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "markup label must not be empty"),
            Self::IndentTooWide(width) => write!(
                f,
                "indent width {width} exceeds maximum {MAX_INDENT_WIDTH}"
            ),
        }
    }
}

impl Error for MarkupError {}

fn validate_label(label: &str) -> MarkupResult<()> {
    if label.trim().is_empty() {
        return Err(MarkupError::EmptyLabel);
    }
    Ok(())
}

pub(crate) fn validate_indent_width(width: usize) -> MarkupResult<()> {
    if width > MAX_INDENT_WIDTH {
        return Err(MarkupError::IndentTooWide(width));
    }
    Ok(())
}
