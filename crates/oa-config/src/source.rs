//! Environment capture and variable resolution.
//!
//! Resolution order: process environment → per-environment dotenv file →
//! built-in defaults. The dotenv file never overrides a variable that is
//! already set in the process environment.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueSource {
    /// Set in the process environment.
    ProcessEnvironment,

    /// Loaded from the per-environment dotenv file.
    EnvFile,

    /// Using the built-in default.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::ProcessEnvironment => write!(f, "process environment"),
            ValueSource::EnvFile => write!(f, "env file"),
            ValueSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Name of the dotenv file for an environment label (`.env.development`).
pub fn env_file_name(environment: &str) -> String {
    format!(".env.{environment}")
}

/// A captured, layered view of the variable space.
///
/// Built once at startup and then read-only. Tests construct overlays with
/// [`EnvOverlay::from_map`] instead of mutating the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay {
    /// Variables from the process environment (top layer).
    process: BTreeMap<String, String>,

    /// Variables from the dotenv file (bottom layer).
    file: BTreeMap<String, String>,
}

impl EnvOverlay {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        EnvOverlay {
            process: std::env::vars().collect(),
            file: BTreeMap::new(),
        }
    }

    /// Build an overlay from explicit key/value pairs.
    ///
    /// The pairs land in the top layer, shadowing any env file merged later.
    pub fn from_map<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        EnvOverlay {
            process: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            file: BTreeMap::new(),
        }
    }

    /// Force a variable into the top layer. Used for CLI overrides.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.process.insert(key.into(), value.into());
        self
    }

    /// Merge a dotenv-format file underneath the captured variables.
    ///
    /// A missing file is skipped, as are lines that do not parse as
    /// KEY=value. A file that exists but cannot be opened is an error.
    pub fn with_env_file(mut self, path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(self);
        }

        let entries = dotenvy::from_path_iter(path).map_err(|err| ConfigError::EnvFile {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let mut merged = 0usize;
        for entry in entries {
            let Ok((key, value)) = entry else { continue };
            self.file.entry(key).or_insert(value);
            merged += 1;
        }
        tracing::debug!(path = %path.display(), merged, "merged env file");

        Ok(self)
    }

    /// Look up a variable, reporting where it came from.
    pub fn resolve(&self, key: &str) -> Option<(&str, ValueSource)> {
        if let Some(value) = self.process.get(key) {
            return Some((value.as_str(), ValueSource::ProcessEnvironment));
        }
        self.file
            .get(key)
            .map(|value| (value.as_str(), ValueSource::EnvFile))
    }

    /// Look up a variable, falling back to a default.
    pub fn resolve_or<'a>(&'a self, key: &str, default: &'a str) -> (&'a str, ValueSource) {
        self.resolve(key)
            .unwrap_or((default, ValueSource::BuiltinDefault))
    }

    /// Look up a variable that has no default.
    ///
    /// Fails with [`ConfigError::MissingVariable`] naming the variable when
    /// it is absent from every layer.
    pub fn resolve_required(&self, key: &str) -> Result<&str> {
        self.resolve(key)
            .map(|(value, _)| value)
            .ok_or_else(|| ConfigError::MissingVariable {
                name: key.to_string(),
            })
    }
}
