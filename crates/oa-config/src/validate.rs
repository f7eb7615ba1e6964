//! Semantic validation of a loaded snapshot.
//!
//! Checks run in a fixed order and the first violation is returned as a
//! value. Termination policy belongs to the entry point, not to this
//! module, so the checks are testable without forking a process.

use secrecy::ExposeSecret;

use crate::defaults::DEFAULT_JWT_SECRET;
use crate::error::{ConfigError, Result};
use crate::snapshot::ConfigSnapshot;

/// Validate the snapshot's startup invariants.
///
/// Invariants, in order:
/// 1. `solana.rpc_endpoint` is non-empty.
/// 2. In the production environment, `security.jwt_secret` differs from
///    the development default.
pub fn validate(snapshot: &ConfigSnapshot) -> Result<()> {
    if snapshot.solana.rpc_endpoint.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "solana.rpc_endpoint".to_string(),
            message: "Solana RPC endpoint must be defined".to_string(),
        });
    }

    if snapshot.environment.is_production()
        && snapshot.security.jwt_secret.expose_secret() == DEFAULT_JWT_SECRET
    {
        return Err(ConfigError::InvalidValue {
            field: "security.jwt_secret".to_string(),
            message: "JWT secret must be changed in production environment".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::EnvOverlay;

    #[test]
    fn test_default_configuration_is_valid() {
        let snapshot = ConfigSnapshot::load(&EnvOverlay::default()).unwrap();
        assert!(validate(&snapshot).is_ok());
    }

    #[test]
    fn test_empty_rpc_endpoint_is_fatal() {
        let overlay = EnvOverlay::from_map([("SOLANA_RPC_ENDPOINT", "")]);
        let snapshot = ConfigSnapshot::load(&overlay).unwrap();

        let err = validate(&snapshot).unwrap_err();
        assert_eq!(err.code(), 20);
        assert!(err.to_string().contains("solana.rpc_endpoint"));
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let overlay = EnvOverlay::from_map([("NODE_ENV", "production")]);
        let snapshot = ConfigSnapshot::load(&overlay).unwrap();

        let err = validate(&snapshot).unwrap_err();
        assert!(err.to_string().contains("security.jwt_secret"));
    }

    #[test]
    fn test_production_accepts_changed_secret() {
        let overlay = EnvOverlay::from_map([
            ("NODE_ENV", "production"),
            ("JWT_SECRET", "some-other-value"),
        ]);
        let snapshot = ConfigSnapshot::load(&overlay).unwrap();
        assert!(validate(&snapshot).is_ok());
    }

    #[test]
    fn test_default_secret_is_fine_outside_production() {
        for label in ["development", "test", "staging", "qa"] {
            let overlay = EnvOverlay::from_map([("NODE_ENV", label)]);
            let snapshot = ConfigSnapshot::load(&overlay).unwrap();
            assert!(validate(&snapshot).is_ok(), "label {label} should pass");
        }
    }
}
