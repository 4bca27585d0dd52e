//! Markup tree node and its block serialization.

use super::{MarkupBuilder, MarkupResult, DEFAULT_INDENT_WIDTH};
use std::fmt::{Display, Formatter};

/// One markup element: a label, optional inline text and owned children.
///
/// Empty `text` means the node has no inline text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    label: String,
    text: String,
    children: Vec<MarkupNode>,
}

impl MarkupNode {
    /// Callers validate `label` before constructing.
    pub(crate) fn new(label: String, text: String) -> Self {
        Self {
            label,
            text,
            children: Vec::new(),
        }
    }

    /// Starts a builder whose root carries `label`.
    pub fn builder(label: impl Into<String>) -> MarkupResult<MarkupBuilder> {
        MarkupBuilder::new(label)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Children in append order.
    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: MarkupNode) {
        self.children.push(child);
    }

    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Renders this subtree with `indent_width` spaces per depth level.
    ///
    /// Layout per node at depth `d`: the opening tag indented `d` levels, the
    /// inline text (if any) at `d + 1`, each child block at `d + 1`, then the
    /// closing tag at `d`. Every line ends with `\n`.
    pub fn render(&self, indent_width: usize) -> String {
        let mut out = String::new();
        self.write_block(&mut out, 0, indent_width);
        out
    }

    fn write_block(&self, out: &mut String, depth: usize, indent_width: usize) {
        let indent = " ".repeat(depth * indent_width);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.label);
        out.push_str(">\n");

        if self.has_text() {
            out.push_str(&" ".repeat((depth + 1) * indent_width));
            out.push_str(&self.text);
            out.push('\n');
        }

        for child in &self.children {
            child.write_block(out, depth + 1, indent_width);
        }

        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.label);
        out.push_str(">\n");
    }
}

impl Display for MarkupNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT_WIDTH))
    }
}
