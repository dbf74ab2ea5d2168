//! Configuration management.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "HTMLIZE_CONFIG_PATH";

/// Default repetitions for timed rendering.
const DEFAULT_TIMING_REPS: i64 = 1;

/// Main configuration for htmlize.
#[derive(Debug, Clone)]
pub struct HtmlizeConfig {
    /// Logging settings (overridable from the environment at init time).
    pub logging: LoggingSettings,
    /// Repetitions for `render --timed` when `--reps` is not given.
    pub timing_reps: i64,
}

/// Logging settings as written in the config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Output format: "pretty" or "json".
    pub format: Option<String>,
    /// `EnvFilter` directive, e.g. "info" or "htmlize=debug".
    pub filter: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Logging section.
    pub logging: Option<LoggingSettings>,
    /// Timing section.
    pub timing: Option<ConfigFileTiming>,
}

/// Timing section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileTiming {
    /// Default repetitions.
    pub reps: Option<i64>,
}

impl Default for HtmlizeConfig {
    fn default() -> Self {
        Self {
            logging: LoggingSettings::default(),
            timing_reps: DEFAULT_TIMING_REPS,
        }
    }
}

impl HtmlizeConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for [`ConfigFile`].
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;

        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/htmlize/` on macOS)
    /// 2. XDG config dir (`~/.config/htmlize/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let platform_config = base_dirs.config_dir().join("htmlize").join("config.toml");
        let xdg_config = base_dirs
            .home_dir()
            .join(".config")
            .join("htmlize")
            .join("config.toml");

        for candidate in [platform_config, xdg_config] {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %candidate.display(), error = %e, "Ignoring unreadable config file");
                },
            }
        }

        Self::default()
    }

    /// Loads configuration using the full lookup chain.
    ///
    /// An explicit path wins, then `HTMLIZE_CONFIG_PATH`, then the default
    /// locations.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path);
        }

        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            if !config_path.trim().is_empty() {
                return Self::load_from_file(Path::new(&config_path));
            }
        }

        Ok(Self::load_default())
    }

    /// Converts a `ConfigFile` to `HtmlizeConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(logging) = file.logging {
            config.logging = logging;
        }
        if let Some(reps) = file.timing.and_then(|timing| timing.reps) {
            config.timing_reps = reps;
        }

        config
    }

    /// Sets the default timing repetitions.
    #[must_use]
    pub fn with_timing_reps(mut self, reps: i64) -> Self {
        self.timing_reps = reps;
        self
    }
}
