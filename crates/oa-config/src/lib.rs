//! Ontora AI configuration loading and validation.
//!
//! This crate provides:
//! - Environment capture with per-environment dotenv files
//! - Typed coercion of raw variable values (booleans, integers)
//! - A frozen configuration snapshot built once at startup
//! - Semantic validation with stable error codes
//!
//! The loader is pure: it never terminates the process and holds no global
//! state. The snapshot is an owned value handed to consumers, and the
//! fail-fast policy lives in the binary entry point (see the `oa-cli` crate).

pub mod coerce;
pub mod defaults;
pub mod error;
pub mod snapshot;
pub mod source;
pub mod validate;

pub use error::{format_error_human, ConfigError, Result};
pub use snapshot::{ConfigSnapshot, Environment, SnapshotSummary};
pub use source::{env_file_name, EnvOverlay, ValueSource};
pub use validate::validate;
