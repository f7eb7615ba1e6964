//! Variable names and built-in defaults.
//!
//! Every setting resolves against this table, so a snapshot is fully
//! populated even from an empty environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NODE_ENV` | `development` |
//! | `APP_NAME` | `Ontora AI` |
//! | `APP_VERSION` | `1.0.0` |
//! | `PORT` | `3000` |
//! | `SOLANA_NETWORK` | `devnet` |
//! | `SOLANA_RPC_ENDPOINT` | `https://api.devnet.solana.com` |
//! | `SOLANA_PROGRAM_ID` | (empty) |
//! | `SOLANA_COMMITMENT` | `confirmed` |
//! | `WALLET_PROVIDER` | `phantom` |
//! | `WALLET_AUTO_CONNECT` | `false` |
//! | `API_BASE_URL` | `http://localhost:5000/api` |
//! | `API_TIMEOUT` | `10000` |
//! | `API_RETRIES` | `3` |
//! | `AI_MODEL_ENDPOINT` | `http://localhost:8000/predict` |
//! | `AI_API_KEY` | (empty) |
//! | `AI_MAX_RETRIES` | `2` |
//! | `LOG_LEVEL` | `info` |
//! | `LOG_ENABLED` | `true` |
//! | `DEBUG_MODE` | `false` |
//! | `THEME` | `dark` |
//! | `REFRESH_INTERVAL` | `5000` |
//! | `JWT_SECRET` | `default-secret-key-for-development-only` |
//! | `SESSION_TIMEOUT` | `3600` |
//! | `CORS_ORIGINS` | `http://localhost:3000` |

/// Environment variable names.
pub const ENV_NODE_ENV: &str = "NODE_ENV";
pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_PORT: &str = "PORT";
pub const ENV_SOLANA_NETWORK: &str = "SOLANA_NETWORK";
pub const ENV_SOLANA_RPC_ENDPOINT: &str = "SOLANA_RPC_ENDPOINT";
pub const ENV_SOLANA_PROGRAM_ID: &str = "SOLANA_PROGRAM_ID";
pub const ENV_SOLANA_COMMITMENT: &str = "SOLANA_COMMITMENT";
pub const ENV_WALLET_PROVIDER: &str = "WALLET_PROVIDER";
pub const ENV_WALLET_AUTO_CONNECT: &str = "WALLET_AUTO_CONNECT";
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_API_TIMEOUT: &str = "API_TIMEOUT";
pub const ENV_API_RETRIES: &str = "API_RETRIES";
pub const ENV_AI_MODEL_ENDPOINT: &str = "AI_MODEL_ENDPOINT";
pub const ENV_AI_API_KEY: &str = "AI_API_KEY";
pub const ENV_AI_MAX_RETRIES: &str = "AI_MAX_RETRIES";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_ENABLED: &str = "LOG_ENABLED";
pub const ENV_DEBUG_MODE: &str = "DEBUG_MODE";
pub const ENV_THEME: &str = "THEME";
pub const ENV_REFRESH_INTERVAL: &str = "REFRESH_INTERVAL";
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";
pub const ENV_SESSION_TIMEOUT: &str = "SESSION_TIMEOUT";
pub const ENV_CORS_ORIGINS: &str = "CORS_ORIGINS";

/// Built-in default values.
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_APP_NAME: &str = "Ontora AI";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_SOLANA_NETWORK: &str = "devnet";
pub const DEFAULT_SOLANA_RPC_ENDPOINT: &str = "https://api.devnet.solana.com";
pub const DEFAULT_SOLANA_PROGRAM_ID: &str = "";
pub const DEFAULT_SOLANA_COMMITMENT: &str = "confirmed";
pub const DEFAULT_WALLET_PROVIDER: &str = "phantom";
pub const DEFAULT_WALLET_AUTO_CONNECT: &str = "false";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_API_TIMEOUT: &str = "10000";
pub const DEFAULT_API_RETRIES: &str = "3";
pub const DEFAULT_AI_MODEL_ENDPOINT: &str = "http://localhost:8000/predict";
pub const DEFAULT_AI_API_KEY: &str = "";
pub const DEFAULT_AI_MAX_RETRIES: &str = "2";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENABLED: &str = "true";
pub const DEFAULT_DEBUG_MODE: &str = "false";
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_REFRESH_INTERVAL: &str = "5000";
pub const DEFAULT_SESSION_TIMEOUT: &str = "3600";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

/// Development JWT secret. Production startup must not run with this value;
/// `validate` rejects it when the environment is production.
pub const DEFAULT_JWT_SECRET: &str = "default-secret-key-for-development-only";
