//! Named-field access for leaf specifications.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Value read from (or compared against) one item field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Integer(_) => FieldKind::Integer,
            Self::Flag(_) => FieldKind::Flag,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Discriminant of `FieldValue`, used in kind-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Flag,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Flag => "flag",
        };
        f.write_str(name)
    }
}

/// Items whose fields can be looked up by name.
///
/// Returns `None` when the item has no such field; leaf specifications turn
/// that into `SpecError::MissingField`.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<FieldValue>;
}
