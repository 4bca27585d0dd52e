//! Core engines for Specmark.
//! Composable item specifications and a fluent markup tree builder.

pub mod config;
pub mod logging;
pub mod markup;
pub mod model;
pub mod service;
pub mod spec;

pub use config::{load_config, ConfigError, LoggingConfig, MarkupConfig, SpecmarkConfig};
pub use logging::{init_logging, init_logging_from_config, logging_status, LoggingError};
pub use markup::{MarkupBuilder, MarkupError, MarkupNode, MarkupResult};
pub use model::product::{Color, ColorIs, Product, ProductId, ProductValidationError, Size, SizeIs};
pub use model::record::Record;
pub use service::catalog_service::{CatalogError, CatalogResult, CatalogService};
pub use spec::{
    And, BoxedSpecification, FieldEquals, FieldValue, Not, Or, SpecError, SpecResult,
    Specification, SpecificationExt, Xor,
};

/// Minimal health-check API for smoke callers.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
