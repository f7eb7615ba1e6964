//! Error types for configuration loading and validation.
//!
//! Errors are plain values with stable numeric codes; converting them into
//! a process exit is the caller's job, not this crate's.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Unified error type for configuration loading and validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    // Resolution errors (10-19)
    #[error("environment variable {name} is not defined")]
    MissingVariable { name: String },

    #[error("environment file {path}: {message}")]
    EnvFile { path: String, message: String },

    // Validation errors (20-29)
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Returns the stable error code for this error.
    ///
    /// Error codes are grouped by range:
    /// - 10-19: Resolution errors
    /// - 20-29: Validation errors
    pub fn code(&self) -> u32 {
        match self {
            ConfigError::MissingVariable { .. } => 10,
            ConfigError::EnvFile { .. } => 11,
            ConfigError::InvalidValue { .. } => 20,
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            ConfigError::MissingVariable { .. } => "Missing Configuration",
            ConfigError::EnvFile { .. } => "Environment File Error",
            ConfigError::InvalidValue { .. } => "Invalid Configuration",
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            ConfigError::MissingVariable { .. } => {
                "Set the variable in the environment or in the .env.<environment> file."
            }
            ConfigError::EnvFile { .. } => {
                "Check that the file is readable and contains KEY=value lines."
            }
            ConfigError::InvalidValue { .. } => {
                "Fix the reported field and restart. Run 'oa-config check' to re-validate."
            }
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &ConfigError, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
