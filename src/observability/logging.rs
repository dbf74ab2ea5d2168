//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;

/// Environment variable overriding the log filter directive.
pub const LOG_FILTER_ENV: &str = "HTMLIZE_LOG";

/// Environment variable overriding the log format.
pub const LOG_FORMAT_ENV: &str = "HTMLIZE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses a format name; anything other than "json" is pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// `EnvFilter` directive.
    pub filter: String,
    /// Optional log file (appended to).
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_FILTER.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Builds logging configuration from config settings with env overrides.
    ///
    /// Precedence for the filter: `HTMLIZE_LOG`, then `--verbose`, then the
    /// config file, then `warn`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let mut config = Self::default();

        if let Some(settings) = settings {
            if let Some(format) = settings.format.as_deref() {
                config.format = LogFormat::parse(format);
            }
            if let Some(filter) = settings.filter.as_ref() {
                config.filter.clone_from(filter);
            }
            config.file.clone_from(&settings.file);
        }
        if verbose {
            config.filter = VERBOSE_FILTER.to_string();
        }

        config.apply_env_overrides(
            std::env::var(LOG_FILTER_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        );
        config
    }

    fn apply_env_overrides(&mut self, filter: Option<String>, format: Option<String>) {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.filter = filter;
        }
        if let Some(format) = format.filter(|f| !f.trim().is_empty()) {
            self.format = LogFormat::parse(&format);
        }
    }
}
