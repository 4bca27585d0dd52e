//! Product catalog model.
//!
//! # Responsibility
//! - Define the catalog record filtered by color/size specifications.
//! - Expose product fields by name for generic leaf specifications.
//!
//! # Invariants
//! - `id` is never nil.
//! - `name` is non-blank.
//! - Deserialized products pass the same validation as constructed ones.

use crate::spec::{FieldSource, FieldValue, SpecResult, Specification};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable product identifier.
pub type ProductId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Stable string id, also used as the field value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl FromStr for Color {
    type Err = ProductValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(ProductValidationError::UnknownColor(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Stable string id, also used as the field value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for Size {
    type Err = ProductValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ProductValidationError::UnknownSize(other.to_string())),
        }
    }
}

/// Product validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductValidationError {
    NilId,
    BlankName,
    UnknownColor(String),
    UnknownSize(String),
}

impl Display for ProductValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "product id must not be nil"),
            Self::BlankName => write!(f, "product name must not be blank"),
            Self::UnknownColor(value) => write!(f, "unknown color: `{value}`"),
            Self::UnknownSize(value) => write!(f, "unknown size: `{value}`"),
        }
    }
}

impl Error for ProductValidationError {}

/// Catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    /// Creates a product with a generated id.
    ///
    /// # Errors
    /// - `BlankName` when `name` is empty after trim.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        size: Size,
    ) -> Result<Self, ProductValidationError> {
        Self::with_id(Uuid::new_v4(), name, color, size)
    }

    /// Creates a product with a caller-provided id (imports, fixtures).
    ///
    /// # Errors
    /// - `NilId` for `Uuid::nil()`.
    /// - `BlankName` when `name` is empty after trim.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        color: Color,
        size: Size,
    ) -> Result<Self, ProductValidationError> {
        let product = Self {
            id,
            name: name.into(),
            color,
            size,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<(), ProductValidationError> {
        if self.id.is_nil() {
            return Err(ProductValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ProductValidationError::BlankName);
        }
        Ok(())
    }
}

impl FieldSource for Product {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Text(self.id.to_string())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "color" => Some(FieldValue::from(self.color.as_str())),
            "size" => Some(FieldValue::from(self.size.as_str())),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawProduct {
    id: ProductId,
    name: String,
    color: Color,
    size: Size,
}

impl TryFrom<RawProduct> for Product {
    type Error = ProductValidationError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Self::with_id(raw.id, raw.name, raw.color, raw.size)
    }
}

/// Matches products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIs(pub Color);

impl Specification<Product> for ColorIs {
    fn is_satisfied(&self, item: &Product) -> SpecResult<bool> {
        Ok(item.color == self.0)
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeIs(pub Size);

impl Specification<Product> for SizeIs {
    fn is_satisfied(&self, item: &Product) -> SpecResult<bool> {
        Ok(item.size == self.0)
    }
}
