//! Single-owner builder around one root `MarkupNode`.
//!
//! # Invariants
//! - The root label is fixed for the builder lifetime; `clear` keeps it.
//! - Appends go to the root's child list in call order.
//! - A builder must not be mutated from two call sites at once; `&mut self`
//!   receivers enforce this for safe callers.

use super::{
    validate_indent_width, validate_label, MarkupNode, MarkupResult, DEFAULT_INDENT_WIDTH,
};
use log::{debug, trace};
use std::fmt::{Display, Formatter};

/// Fluent builder for a two-level markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupBuilder {
    root: MarkupNode,
    indent_width: usize,
}

impl MarkupBuilder {
    /// Creates a builder with a childless root and the default indent width.
    ///
    /// # Errors
    /// - `EmptyLabel` when `root_label` is empty or whitespace only.
    pub fn new(root_label: impl Into<String>) -> MarkupResult<Self> {
        Self::with_indent(root_label, DEFAULT_INDENT_WIDTH)
    }

    /// Creates a builder rendering `indent_width` spaces per depth level.
    ///
    /// # Errors
    /// - `EmptyLabel` when `root_label` is empty or whitespace only.
    /// - `IndentTooWide` when `indent_width > MAX_INDENT_WIDTH`.
    pub fn with_indent(root_label: impl Into<String>, indent_width: usize) -> MarkupResult<Self> {
        let root_label = root_label.into();
        validate_label(&root_label)?;
        validate_indent_width(indent_width)?;
        Ok(Self {
            root: MarkupNode::new(root_label, String::new()),
            indent_width,
        })
    }

    /// Appends one child with inline text under the root.
    ///
    /// An empty `text` is the same as `add_empty_child`.
    ///
    /// # Errors
    /// - `EmptyLabel`; the tree is left unchanged.
    pub fn add_child(
        &mut self,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> MarkupResult<()> {
        let label = label.into();
        validate_label(&label)?;
        self.root.push_child(MarkupNode::new(label, text.into()));
        debug!(
            "event=markup_append module=markup status=ok root={} children={}",
            self.root.label(),
            self.root.children().len()
        );
        Ok(())
    }

    /// Appends one child without inline text under the root.
    pub fn add_empty_child(&mut self, label: impl Into<String>) -> MarkupResult<()> {
        self.add_child(label, String::new())
    }

    /// Same as `add_child`, returning the builder for chained calls.
    pub fn add_child_fluent(
        &mut self,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> MarkupResult<&mut Self> {
        self.add_child(label, text)?;
        Ok(self)
    }

    /// Serializes the current tree.
    pub fn to_markup(&self) -> String {
        let rendered = self.root.render(self.indent_width);
        trace!(
            "event=markup_render module=markup status=ok root={} bytes={}",
            self.root.label(),
            rendered.len()
        );
        rendered
    }

    /// Current root; the builder stays usable.
    pub fn root(&self) -> &MarkupNode {
        &self.root
    }

    pub fn root_label(&self) -> &str {
        self.root.label()
    }

    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Takes ownership of the built tree.
    pub fn into_root(self) -> MarkupNode {
        self.root
    }

    /// Drops all children, keeping the root label. Idempotent.
    pub fn clear(&mut self) {
        let dropped = self.root.children().len();
        self.root.clear_children();
        debug!(
            "event=markup_clear module=markup status=ok root={} dropped={}",
            self.root.label(),
            dropped
        );
    }
}

impl Display for MarkupBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_markup())
    }
}
