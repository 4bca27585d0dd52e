//! Catalog listing use-case service.
//!
//! # Responsibility
//! - Filter an owned product catalog through caller-built specifications.
//! - Render matching product names as a markup list.
//!
//! # Invariants
//! - Matches keep catalog insertion order.
//! - Rendering never happens for a partially evaluated catalog: any
//!   specification error aborts before the builder is created.

use crate::markup::{validate_indent_width, MarkupBuilder, MarkupError, DEFAULT_INDENT_WIDTH};
use crate::model::product::Product;
use crate::spec::{self, SpecError, SpecResult, Specification};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for catalog use-cases.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A specification rejected a product as malformed.
    Spec(SpecError),
    /// Listing labels are not valid markup.
    Markup(MarkupError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spec(err) => write!(f, "{err}"),
            Self::Markup(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spec(err) => Some(err),
            Self::Markup(err) => Some(err),
        }
    }
}

impl From<SpecError> for CatalogError {
    fn from(value: SpecError) -> Self {
        Self::Spec(value)
    }
}

impl From<MarkupError> for CatalogError {
    fn from(value: MarkupError) -> Self {
        Self::Markup(value)
    }
}

/// Service over an in-memory product catalog.
#[derive(Debug, Clone)]
pub struct CatalogService {
    products: Vec<Product>,
    indent_width: usize,
}

impl CatalogService {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Overrides the indent width used by `render_listing`.
    ///
    /// # Errors
    /// - `Markup(IndentTooWide)` when `indent_width > MAX_INDENT_WIDTH`.
    pub fn with_indent_width(mut self, indent_width: usize) -> CatalogResult<Self> {
        validate_indent_width(indent_width)?;
        self.indent_width = indent_width;
        Ok(self)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Appends one product at the end of the catalog.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Products satisfying `spec`, in catalog order.
    pub fn find<S>(&self, spec: &S) -> SpecResult<Vec<&Product>>
    where
        S: Specification<Product> + ?Sized,
    {
        spec::filter(&self.products, spec)
    }

    /// Renders matching product names as `<list_label>` with one
    /// `<item_label>` child per match.
    ///
    /// # Errors
    /// - `Spec` when evaluation fails for any product.
    /// - `Markup` when a label is empty.
    pub fn render_listing<S>(
        &self,
        list_label: &str,
        item_label: &str,
        spec: &S,
    ) -> CatalogResult<String>
    where
        S: Specification<Product> + ?Sized,
    {
        let matched = self.find(spec)?;
        let mut builder = MarkupBuilder::with_indent(list_label, self.indent_width)?;
        for product in &matched {
            builder.add_child(item_label, product.name.as_str())?;
        }
        info!(
            "event=catalog_listing module=service status=ok total={} matched={}",
            self.products.len(),
            matched.len()
        );
        Ok(builder.to_markup())
    }
}
