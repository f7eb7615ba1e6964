//! The frozen configuration snapshot.
//!
//! A snapshot captures every resolved setting at load time. It is immutable
//! after construction and owned by the caller; consumers receive it by
//! reference instead of importing ambient global state, which keeps the
//! loader mockable in tests.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::coerce::{parse_boolean, parse_integer};
use crate::defaults;
use crate::error::Result;
use crate::source::{env_file_name, EnvOverlay};

/// Deployment environment label.
///
/// The set is open: unknown labels are carried verbatim and only the
/// exact `production` label triggers production-only checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
    Staging,
    Other(String),
}

impl Environment {
    /// Parse from the raw `NODE_ENV` label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "development" => Environment::Development,
            "production" => Environment::Production,
            "test" => Environment::Test,
            "staging" => Environment::Staging,
            other => Environment::Other(other.to_string()),
        }
    }

    /// The raw label, as used in the env-file name.
    pub fn as_label(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Other(label) => label,
        }
    }

    /// Whether production-only invariants apply.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Application identity and listen port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub port: u16,
}

/// Solana network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolanaSettings {
    /// Cluster label (devnet, testnet, mainnet-beta).
    pub network: String,

    /// RPC endpoint URL. Must be non-empty; `validate` rejects it otherwise.
    pub rpc_endpoint: String,

    /// Deployed program id, empty until a deployment is configured.
    pub program_id: String,

    /// Commitment level requested from the RPC node.
    pub commitment: String,
}

/// Wallet adapter defaults surfaced to the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSettings {
    pub default_provider: String,
    pub auto_connect: bool,
}

/// Backend API client tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_ms: u64,
    pub retries: u32,
}

/// AI model endpoint access.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub model_endpoint: String,

    /// API key for the model server. Redacted in Debug output and summaries.
    pub api_key: SecretString,

    pub max_retries: u32,
}

impl PartialEq for AiSettings {
    fn eq(&self, other: &Self) -> bool {
        self.model_endpoint == other.model_endpoint
            && self.max_retries == other.max_retries
            && self.api_key.expose_secret() == other.api_key.expose_secret()
    }
}

/// Logging subsystem settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    pub level: String,
    pub enabled: bool,
}

/// Frontend display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendSettings {
    pub debug: bool,
    pub theme: String,
    pub refresh_interval_ms: u64,
}

/// Security material and CORS policy.
#[derive(Debug, Clone)]
pub struct SecuritySettings {
    /// Token signing secret. Redacted in Debug output and summaries.
    pub jwt_secret: SecretString,

    pub session_timeout_secs: u64,

    /// Allowed CORS origins, split on `,` without trimming.
    pub cors_origins: Vec<String>,
}

impl PartialEq for SecuritySettings {
    fn eq(&self, other: &Self) -> bool {
        self.session_timeout_secs == other.session_timeout_secs
            && self.cors_origins == other.cors_origins
            && self.jwt_secret.expose_secret() == other.jwt_secret.expose_secret()
    }
}

/// A frozen snapshot of every resolved configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSnapshot {
    pub environment: Environment,
    pub app: AppSettings,
    pub solana: SolanaSettings,
    pub wallet: WalletSettings,
    pub api: ApiSettings,
    pub ai: AiSettings,
    pub logging: LoggingSettings,
    pub frontend: FrontendSettings,
    pub security: SecuritySettings,
}

impl ConfigSnapshot {
    /// Resolve every field from the overlay.
    ///
    /// Every setting has a built-in default, so this succeeds on an empty
    /// overlay; the `Result` covers future fields without one. Numeric
    /// coercion failures degrade to 0, not to the documented default.
    pub fn load(env: &EnvOverlay) -> Result<Self> {
        let (label, _) = env.resolve_or(defaults::ENV_NODE_ENV, defaults::DEFAULT_ENVIRONMENT);
        let environment = Environment::from_label(label);

        let snapshot = ConfigSnapshot {
            app: AppSettings {
                name: resolve_string(env, defaults::ENV_APP_NAME, defaults::DEFAULT_APP_NAME),
                version: resolve_string(
                    env,
                    defaults::ENV_APP_VERSION,
                    defaults::DEFAULT_APP_VERSION,
                ),
                port: parse_integer(
                    env.resolve_or(defaults::ENV_PORT, defaults::DEFAULT_PORT).0,
                    0,
                ),
            },
            solana: SolanaSettings {
                network: resolve_string(
                    env,
                    defaults::ENV_SOLANA_NETWORK,
                    defaults::DEFAULT_SOLANA_NETWORK,
                ),
                rpc_endpoint: resolve_string(
                    env,
                    defaults::ENV_SOLANA_RPC_ENDPOINT,
                    defaults::DEFAULT_SOLANA_RPC_ENDPOINT,
                ),
                program_id: resolve_string(
                    env,
                    defaults::ENV_SOLANA_PROGRAM_ID,
                    defaults::DEFAULT_SOLANA_PROGRAM_ID,
                ),
                commitment: resolve_string(
                    env,
                    defaults::ENV_SOLANA_COMMITMENT,
                    defaults::DEFAULT_SOLANA_COMMITMENT,
                ),
            },
            wallet: WalletSettings {
                default_provider: resolve_string(
                    env,
                    defaults::ENV_WALLET_PROVIDER,
                    defaults::DEFAULT_WALLET_PROVIDER,
                ),
                auto_connect: parse_boolean(
                    env.resolve_or(
                        defaults::ENV_WALLET_AUTO_CONNECT,
                        defaults::DEFAULT_WALLET_AUTO_CONNECT,
                    )
                    .0,
                ),
            },
            api: ApiSettings {
                base_url: resolve_string(
                    env,
                    defaults::ENV_API_BASE_URL,
                    defaults::DEFAULT_API_BASE_URL,
                ),
                timeout_ms: parse_integer(
                    env.resolve_or(defaults::ENV_API_TIMEOUT, defaults::DEFAULT_API_TIMEOUT)
                        .0,
                    0,
                ),
                retries: parse_integer(
                    env.resolve_or(defaults::ENV_API_RETRIES, defaults::DEFAULT_API_RETRIES)
                        .0,
                    0,
                ),
            },
            ai: AiSettings {
                model_endpoint: resolve_string(
                    env,
                    defaults::ENV_AI_MODEL_ENDPOINT,
                    defaults::DEFAULT_AI_MODEL_ENDPOINT,
                ),
                api_key: SecretString::from(resolve_string(
                    env,
                    defaults::ENV_AI_API_KEY,
                    defaults::DEFAULT_AI_API_KEY,
                )),
                max_retries: parse_integer(
                    env.resolve_or(
                        defaults::ENV_AI_MAX_RETRIES,
                        defaults::DEFAULT_AI_MAX_RETRIES,
                    )
                    .0,
                    0,
                ),
            },
            logging: LoggingSettings {
                level: resolve_string(env, defaults::ENV_LOG_LEVEL, defaults::DEFAULT_LOG_LEVEL),
                enabled: parse_boolean(
                    env.resolve_or(defaults::ENV_LOG_ENABLED, defaults::DEFAULT_LOG_ENABLED)
                        .0,
                ),
            },
            frontend: FrontendSettings {
                debug: parse_boolean(
                    env.resolve_or(defaults::ENV_DEBUG_MODE, defaults::DEFAULT_DEBUG_MODE)
                        .0,
                ),
                theme: resolve_string(env, defaults::ENV_THEME, defaults::DEFAULT_THEME),
                refresh_interval_ms: parse_integer(
                    env.resolve_or(
                        defaults::ENV_REFRESH_INTERVAL,
                        defaults::DEFAULT_REFRESH_INTERVAL,
                    )
                    .0,
                    0,
                ),
            },
            security: SecuritySettings {
                jwt_secret: SecretString::from(resolve_string(
                    env,
                    defaults::ENV_JWT_SECRET,
                    defaults::DEFAULT_JWT_SECRET,
                )),
                session_timeout_secs: parse_integer(
                    env.resolve_or(
                        defaults::ENV_SESSION_TIMEOUT,
                        defaults::DEFAULT_SESSION_TIMEOUT,
                    )
                    .0,
                    0,
                ),
                // Literal split: fragments keep surrounding whitespace.
                cors_origins: env
                    .resolve_or(defaults::ENV_CORS_ORIGINS, defaults::DEFAULT_CORS_ORIGINS)
                    .0
                    .split(',')
                    .map(str::to_string)
                    .collect(),
            },
            environment,
        };

        tracing::debug!(environment = %snapshot.environment, "configuration snapshot assembled");
        Ok(snapshot)
    }

    /// Load from the process environment and the `.env.<environment>` file
    /// in the working directory.
    pub fn from_process_env() -> Result<Self> {
        Self::from_process_env_with(None, None)
    }

    /// Load from the process environment with optional overrides for the
    /// environment label and the env-file path.
    pub fn from_process_env_with(
        environment: Option<&str>,
        env_file: Option<&Path>,
    ) -> Result<Self> {
        let mut overlay = EnvOverlay::from_process();
        if let Some(label) = environment {
            overlay = overlay.with_var(defaults::ENV_NODE_ENV, label);
        }

        let label = overlay
            .resolve_or(defaults::ENV_NODE_ENV, defaults::DEFAULT_ENVIRONMENT)
            .0
            .to_string();
        let path = env_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(env_file_name(&label)));

        let overlay = overlay.with_env_file(&path)?;
        Self::load(&overlay)
    }

    /// SHA-256 fingerprint of the fully resolved values, secrets included.
    ///
    /// Two snapshots from an unchanged environment produce the same
    /// fingerprint; any value change, secret or not, produces a new one.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hash_field(&mut hasher, self.environment.as_label());
        hash_field(&mut hasher, &self.app.name);
        hash_field(&mut hasher, &self.app.version);
        hash_field(&mut hasher, &self.app.port.to_string());
        hash_field(&mut hasher, &self.solana.network);
        hash_field(&mut hasher, &self.solana.rpc_endpoint);
        hash_field(&mut hasher, &self.solana.program_id);
        hash_field(&mut hasher, &self.solana.commitment);
        hash_field(&mut hasher, &self.wallet.default_provider);
        hash_field(&mut hasher, &self.wallet.auto_connect.to_string());
        hash_field(&mut hasher, &self.api.base_url);
        hash_field(&mut hasher, &self.api.timeout_ms.to_string());
        hash_field(&mut hasher, &self.api.retries.to_string());
        hash_field(&mut hasher, &self.ai.model_endpoint);
        hash_field(&mut hasher, self.ai.api_key.expose_secret());
        hash_field(&mut hasher, &self.ai.max_retries.to_string());
        hash_field(&mut hasher, &self.logging.level);
        hash_field(&mut hasher, &self.logging.enabled.to_string());
        hash_field(&mut hasher, &self.frontend.debug.to_string());
        hash_field(&mut hasher, &self.frontend.theme);
        hash_field(&mut hasher, &self.frontend.refresh_interval_ms.to_string());
        hash_field(&mut hasher, self.security.jwt_secret.expose_secret());
        hash_field(&mut hasher, &self.security.session_timeout_secs.to_string());
        for origin in &self.security.cors_origins {
            hash_field(&mut hasher, origin);
        }
        hex::encode(hasher.finalize())
    }

    /// Short identifier for this snapshot (first 12 chars of the fingerprint).
    pub fn short_id(&self) -> String {
        let mut id = self.fingerprint();
        id.truncate(12);
        id
    }

    /// Check if this snapshot resolves to the same values as another.
    pub fn matches(&self, other: &ConfigSnapshot) -> bool {
        self.fingerprint() == other.fingerprint()
    }

    /// Secret-free projection for display and logging.
    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            environment: self.environment.as_label().to_string(),
            app_name: self.app.name.clone(),
            app_version: self.app.version.clone(),
            port: self.app.port,
            solana_network: self.solana.network.clone(),
            solana_rpc_endpoint: self.solana.rpc_endpoint.clone(),
            solana_program_id: self.solana.program_id.clone(),
            solana_commitment: self.solana.commitment.clone(),
            wallet_provider: self.wallet.default_provider.clone(),
            wallet_auto_connect: self.wallet.auto_connect,
            api_base_url: self.api.base_url.clone(),
            api_timeout_ms: self.api.timeout_ms,
            api_retries: self.api.retries,
            ai_model_endpoint: self.ai.model_endpoint.clone(),
            ai_api_key_set: !self.ai.api_key.expose_secret().is_empty(),
            ai_max_retries: self.ai.max_retries,
            log_level: self.logging.level.clone(),
            log_enabled: self.logging.enabled,
            debug_mode: self.frontend.debug,
            theme: self.frontend.theme.clone(),
            refresh_interval_ms: self.frontend.refresh_interval_ms,
            jwt_secret_is_default: self.security.jwt_secret.expose_secret()
                == defaults::DEFAULT_JWT_SECRET,
            session_timeout_secs: self.security.session_timeout_secs,
            cors_origins: self.security.cors_origins.clone(),
        }
    }
}

/// Summary of resolved configuration values with secrets replaced by
/// set/default indicators.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummary {
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    pub port: u16,
    pub solana_network: String,
    pub solana_rpc_endpoint: String,
    pub solana_program_id: String,
    pub solana_commitment: String,
    pub wallet_provider: String,
    pub wallet_auto_connect: bool,
    pub api_base_url: String,
    pub api_timeout_ms: u64,
    pub api_retries: u32,
    pub ai_model_endpoint: String,
    pub ai_api_key_set: bool,
    pub ai_max_retries: u32,
    pub log_level: String,
    pub log_enabled: bool,
    pub debug_mode: bool,
    pub theme: String,
    pub refresh_interval_ms: u64,
    pub jwt_secret_is_default: bool,
    pub session_timeout_secs: u64,
    pub cors_origins: Vec<String>,
}

fn resolve_string(env: &EnvOverlay, key: &str, default: &str) -> String {
    env.resolve_or(key, default).0.to_string()
}

/// Hash one field with a terminator so adjacent fields cannot alias.
fn hash_field(hasher: &mut Sha256, value: &str) {
    hasher.update(value.as_bytes());
    hasher.update([0u8]);
}
