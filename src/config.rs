use std::{env, str::FromStr};

use clap::ValueEnum;

use crate::{error::ConfigError, util::format::OutputBase};

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "BITEXPR_LOG_LEVEL";
/// Environment variable holding the output base.
pub const OUTPUT_BASE_VAR: &str = "BITEXPR_BASE";

/// Log level enumeration matching tracing levels.
///
/// Defaults to `Warn` so normal runs only print results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Every token and bracketed group.
    Trace,
    /// Parsed trees and results.
    Debug,
    /// Informational messages.
    Info,
    /// Problems that do not stop evaluation.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl LogLevel {
    /// Converts to a tracing filter directive.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidValue { setting:  LOG_LEVEL_VAR.to_string(),
                                                 value:    s.to_string(),
                                                 expected: "trace, debug, info, warn, error", }),
        }
    }
}

/// Settings for a run of the command-line tool.
///
/// Precedence, highest first: command-line flags, environment variables
/// (`BITEXPR_LOG_LEVEL`, `BITEXPR_BASE`), defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Verbosity of diagnostics written to stderr.
    pub log_level:   LogLevel,
    /// Base used to print results.
    pub output_base: OutputBase,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable is set to an
    /// unknown value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` if a variable is set to an
    /// unknown value.
    ///
    /// ## Example
    /// ```
    /// use bitexpr::{
    ///     config::{Config, LogLevel},
    ///     util::format::OutputBase,
    /// };
    ///
    /// let config = Config::from_lookup(|name| (name == "BITEXPR_BASE").then(|| "hex".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.output_base, OutputBase::Hexadecimal);
    /// assert_eq!(config.log_level, LogLevel::Warn);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };

        let output_base = match lookup(OUTPUT_BASE_VAR) {
            Some(value) => value.parse().map_err(|_| {
                                            ConfigError::InvalidValue { setting: OUTPUT_BASE_VAR.to_string(),
                                                                        value,
                                                                        expected: "dec, hex, oct, bin" }
                                        })?,
            None => OutputBase::default(),
        };

        Ok(Self { log_level,
                  output_base })
    }

    /// Applies command-line overrides on top of this configuration.
    #[must_use]
    pub const fn apply_overrides(mut self,
                                 log_level: Option<LogLevel>,
                                 output_base: Option<OutputBase>)
                                 -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(base) = output_base {
            self.output_base = base;
        }
        self
    }
}
