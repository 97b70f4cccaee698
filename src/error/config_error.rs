use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A setting had a value that could not be understood.
    #[error("Invalid value '{value}' for {setting}: expected one of {expected}.")]
    InvalidValue {
        /// The name of the setting (environment variable or flag).
        setting:  String,
        /// The rejected value.
        value:    String,
        /// The accepted values.
        expected: &'static str,
    },
}
