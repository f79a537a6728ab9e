//! Error types for widget construction.

use std::fmt;

/// Errors raised while turning a caller-supplied configuration into a widget.
///
/// Only construction fails loudly. Runtime misuse (bad indices, calls after
/// `destroy`) is reported through `bool`/`Option` returns or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration is required for this widget but none was supplied.
    Missing {
        /// Widget kind being constructed.
        widget: &'static str,
    },

    /// The configuration is not a structured mapping.
    NotAMapping {
        /// Widget kind being constructed.
        widget: &'static str,
        /// Kind of value that was supplied instead.
        found: &'static str,
    },

    /// A recognized key holds a value of the wrong shape.
    InvalidField {
        /// Widget kind being constructed.
        widget: &'static str,
        /// Description from the deserializer.
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing { widget } => {
                write!(f, "Invalid configuration provided: {} requires a configuration", widget)
            }
            ConfigError::NotAMapping { widget, found } => write!(
                f,
                "Invalid configuration provided: {} expects a mapping, found {}",
                widget, found
            ),
            ConfigError::InvalidField { widget, message } => {
                write!(f, "Invalid configuration provided for {}: {}", widget, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for widget construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
