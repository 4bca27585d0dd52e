//! Logging bootstrap.
//!
//! # Responsibility
//! - Start rotating file logs once per process.
//! - Log panics with a sanitized, length-capped payload.
//!
//! # Invariants
//! - Initialization is idempotent for identical settings.
//! - Re-initialization with a different level or directory is rejected.
//! - Initialization never panics.

use crate::config::LoggingConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "specmark";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 200;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    dir: PathBuf,
}

/// Logging bootstrap errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Level is not one of `trace|debug|info|warn|error`.
    InvalidLevel(String),
    /// Directory is blank or relative.
    InvalidDir(String),
    /// Logging already runs with other settings.
    AlreadyInitialized { active: String, requested: String },
    /// Directory creation or logger backend start failed.
    Backend(String),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(message) => write!(f, "{message}"),
            Self::InvalidDir(message) => write!(f, "{message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with {active}; refusing to switch to {requested}"
            ),
            Self::Backend(message) => write!(f, "logging backend failed: {message}"),
        }
    }
}

impl Error for LoggingError {}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - `InvalidLevel` / `InvalidDir` for malformed input.
/// - `AlreadyInitialized` when called again with different settings.
/// - `Backend` when the directory or logger cannot be set up.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), LoggingError> {
    let requested = LogSettings {
        level: normalize_level(level).map_err(LoggingError::InvalidLevel)?,
        dir: normalize_log_dir(log_dir)?,
    };

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(&requested))?;
    if active.settings != requested {
        return Err(LoggingError::AlreadyInitialized {
            active: describe(&active.settings),
            requested: describe(&requested),
        });
    }
    Ok(())
}

/// Starts file logging from the `[logging]` section.
///
/// Returns `Ok(false)` without touching the logger when no directory is
/// configured; the `log` macros then stay no-ops.
pub fn init_logging_from_config(config: &LoggingConfig) -> Result<bool, LoggingError> {
    match config.dir.as_deref() {
        Some(dir) => init_logging(&config.level, dir).map(|()| true),
        None => Ok(false),
    }
}

/// Active `(level, log_dir)`, or `None` before initialization.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.settings.level, active.settings.dir.clone()))
}

fn start_logger(settings: &LogSettings) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&settings.dir).map_err(|err| {
        LoggingError::Backend(format!(
            "cannot create log directory `{}`: {err}",
            settings.dir.display()
        ))
    })?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(settings.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook();
    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={}",
        settings.level,
        settings.dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        settings: settings.clone(),
        _handle: handle,
    })
}

fn describe(settings: &LogSettings) -> String {
    format!("level `{}` at `{}`", settings.level, settings.dir.display())
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidDir(
            "log_dir cannot be empty".to_string(),
        ));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidDir(format!(
            "log_dir must be an absolute path, got `{trimmed}`"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(panic_info);
    }));
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut out: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, init_logging_from_config, logging_status, normalize_level,
        normalize_log_dir, single_line, LoggingError,
    };
    use crate::config::LoggingConfig;

    #[test]
    fn normalize_level_accepts_aliases_and_case() {
        assert_eq!(normalize_level(" DEBUG ").unwrap(), "debug");
        assert_eq!(normalize_level("warning").unwrap(), "warn");
        assert!(normalize_level("loud").unwrap_err().contains("loud"));
    }

    #[test]
    fn normalize_log_dir_requires_absolute_path() {
        assert!(matches!(
            normalize_log_dir("  "),
            Err(LoggingError::InvalidDir(_))
        ));
        let err = normalize_log_dir("logs/dev").unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn single_line_flattens_and_truncates() {
        let out = single_line("a\nb\rc-long-tail", 5);
        assert_eq!(out, "a b c...");
    }

    #[test]
    fn config_without_dir_leaves_logging_off() {
        let config = LoggingConfig::default();
        assert_eq!(init_logging_from_config(&config), Ok(false));
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let first = tempfile::tempdir().expect("temp dir");
        let second = tempfile::tempdir().expect("temp dir");
        let first_dir = first.path().to_str().expect("utf-8 temp dir").to_string();
        let second_dir = second.path().to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &first_dir).expect("first init");
        init_logging("INFO", &first_dir).expect("same settings are idempotent");

        let level_err = init_logging("debug", &first_dir).unwrap_err();
        assert!(matches!(level_err, LoggingError::AlreadyInitialized { .. }));
        let dir_err = init_logging("info", &second_dir).unwrap_err();
        assert!(dir_err.to_string().contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging active");
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
