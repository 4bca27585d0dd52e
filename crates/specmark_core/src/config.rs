//! # Configuration
//!
//! Settings are loaded with [`confique`] in priority order:
//! 1. **Environment variables**: `SPECMARK_LOG_LEVEL`, `SPECMARK_LOG_DIR`,
//!    `SPECMARK_INDENT_WIDTH`.
//! 2. **TOML file**: optional path given to [`load_config`].
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `logging.level` | `info` | `trace\|debug\|info\|warn\|error` |
//! | `logging.dir` | unset | Absolute log directory; unset disables file logging |
//! | `markup.indent_width` | `2` | Spaces per depth level in rendered markup |

use crate::logging::normalize_level;
use crate::markup::{MarkupBuilder, MarkupResult, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH};
use confique::Config;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Root configuration.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct SpecmarkConfig {
    #[config(nested)]
    pub logging: LoggingConfig,

    #[config(nested)]
    pub markup: MarkupConfig,
}

/// `[logging]` section.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[config(env = "SPECMARK_LOG_LEVEL", default = "info")]
    pub level: String,

    /// Absolute directory for rotating log files.
    #[config(env = "SPECMARK_LOG_DIR")]
    pub dir: Option<String>,
}

/// `[markup]` section.
#[derive(Config, Debug, Clone, PartialEq, Eq)]
pub struct MarkupConfig {
    /// Must equal `DEFAULT_INDENT_WIDTH`.
    #[config(env = "SPECMARK_INDENT_WIDTH", default = 2)]
    pub indent_width: usize,
}

impl Default for SpecmarkConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            markup: MarkupConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl MarkupConfig {
    /// Creates a builder rendering with the configured indent width.
    pub fn builder(&self, root_label: impl Into<String>) -> MarkupResult<MarkupBuilder> {
        MarkupBuilder::with_indent(root_label, self.indent_width)
    }
}

/// Configuration load/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Source could not be read or deserialized.
    Load(confique::Error),
    /// `logging.level` is not a supported level.
    InvalidLevel(String),
    /// `markup.indent_width` exceeds `MAX_INDENT_WIDTH`.
    IndentTooWide(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "failed to load configuration: {err}"),
            Self::InvalidLevel(message) => write!(f, "invalid logging.level: {message}"),
            Self::IndentTooWide(width) => write!(
                f,
                "invalid markup.indent_width: {width} exceeds maximum {MAX_INDENT_WIDTH}"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<confique::Error> for ConfigError {
    fn from(value: confique::Error) -> Self {
        Self::Load(value)
    }
}

impl SpecmarkConfig {
    /// Checks values that the loader cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.logging.level).map_err(ConfigError::InvalidLevel)?;
        if self.markup.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::IndentTooWide(self.markup.indent_width));
        }
        Ok(())
    }
}

/// Loads configuration from environment, optional file and defaults.
///
/// A missing file is not an error; defaults apply.
///
/// # Errors
/// - `Load` when the file or an environment value cannot be parsed.
/// - `InvalidLevel` / `IndentTooWide` when validation fails.
pub fn load_config(path: Option<&Path>) -> Result<SpecmarkConfig, ConfigError> {
    let mut builder = SpecmarkConfig::builder().env();
    if let Some(path) = path {
        builder = builder.file(path);
    }
    let config = builder.load()?;
    config.validate()?;
    Ok(config)
}
