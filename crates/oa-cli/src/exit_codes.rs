//! Exit codes for the oa-config CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//! These are a stable contract for wrapper scripts and CI:
//! - 0: success
//! - 10-19: configuration errors (recoverable by user action)
//! - 20-29: internal errors

use oa_config::ConfigError;

/// Exit codes for oa-config operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Configuration loaded and validated.
    Ok = 0,

    /// A validated invariant is violated.
    ConfigInvalid = 10,

    /// A required variable is absent and has no default.
    ConfigMissing = 11,

    /// Env file or other I/O failure.
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Map a configuration error to its exit code.
pub fn for_error(err: &ConfigError) -> ExitCode {
    match err {
        ConfigError::MissingVariable { .. } => ExitCode::ConfigMissing,
        ConfigError::EnvFile { .. } => ExitCode::IoError,
        ConfigError::InvalidValue { .. } => ExitCode::ConfigInvalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let invalid = ConfigError::InvalidValue {
            field: "solana.rpc_endpoint".into(),
            message: "must be defined".into(),
        };
        assert_eq!(for_error(&invalid), ExitCode::ConfigInvalid);
        assert_eq!(for_error(&invalid).as_i32(), 10);

        let missing = ConfigError::MissingVariable {
            name: "JWT_SECRET".into(),
        };
        assert_eq!(for_error(&missing).as_i32(), 11);
    }
}
