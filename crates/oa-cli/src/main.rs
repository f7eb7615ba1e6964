//! Entry point for the `oa-config` binary.
//!
//! Owns the fail-fast policy: a loading or validation failure prints one
//! diagnostic block on stderr and exits non-zero. The loader itself never
//! terminates the process. stdout is reserved for command payloads; all
//! log output goes to stderr.

mod exit_codes;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oa_config::{format_error_human, validate, ConfigSnapshot, SnapshotSummary};
use tracing_subscriber::EnvFilter;

use crate::exit_codes::ExitCode;

/// Ontora AI configuration loader and checker.
#[derive(Parser)]
#[command(name = "oa-config")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Environment label override (otherwise NODE_ENV).
    #[arg(long, global = true, value_name = "LABEL")]
    environment: Option<String>,

    /// Dotenv file override (otherwise .env.<environment> in the working
    /// directory).
    #[arg(long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Load and validate the configuration, then exit.
    Check,

    /// Print the resolved configuration with secrets redacted.
    Show {
        /// Output format.
        #[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let use_color = !cli.global.no_color && std::io::stderr().is_terminal();
            eprintln!("{}", format_error_human(&err, use_color));
            exit_codes::for_error(&err)
        }
    };

    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> oa_config::Result<ExitCode> {
    let snapshot = ConfigSnapshot::from_process_env_with(
        cli.global.environment.as_deref(),
        cli.global.env_file.as_deref(),
    )?;

    init_logging(&snapshot.logging);
    validate(&snapshot)?;

    match &cli.command {
        Command::Check => {
            tracing::info!(
                environment = %snapshot.environment,
                snapshot = %snapshot.short_id(),
                "configuration ok"
            );
        }
        Command::Show { format } => {
            let summary = snapshot.summary();
            match format {
                Format::Json => {
                    let payload = serde_json::json!({
                        "snapshot_id": snapshot.short_id(),
                        "config": summary,
                    });
                    // Summary contains no secret material, so pretty-printing
                    // it to stdout is safe.
                    println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
                }
                Format::Text => {
                    print!("{}", render_text(&summary, &snapshot.short_id()));
                }
            }
        }
    }

    Ok(ExitCode::Ok)
}

/// Initialize the logging subsystem from the resolved logging section.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &oa_config::snapshot::LoggingSettings) {
    if !logging.enabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_text(summary: &SnapshotSummary, snapshot_id: &str) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: String| {
        out.push_str(&format!("{key:<22} {value}\n"));
    };

    line("snapshot", snapshot_id.to_string());
    line("environment", summary.environment.clone());
    line("app.name", summary.app_name.clone());
    line("app.version", summary.app_version.clone());
    line("app.port", summary.port.to_string());
    line("solana.network", summary.solana_network.clone());
    line("solana.rpc_endpoint", summary.solana_rpc_endpoint.clone());
    line("solana.program_id", summary.solana_program_id.clone());
    line("solana.commitment", summary.solana_commitment.clone());
    line("wallet.provider", summary.wallet_provider.clone());
    line("wallet.auto_connect", summary.wallet_auto_connect.to_string());
    line("api.base_url", summary.api_base_url.clone());
    line("api.timeout_ms", summary.api_timeout_ms.to_string());
    line("api.retries", summary.api_retries.to_string());
    line("ai.model_endpoint", summary.ai_model_endpoint.clone());
    line("ai.api_key_set", summary.ai_api_key_set.to_string());
    line("ai.max_retries", summary.ai_max_retries.to_string());
    line("logging.level", summary.log_level.clone());
    line("logging.enabled", summary.log_enabled.to_string());
    line("frontend.debug", summary.debug_mode.to_string());
    line("frontend.theme", summary.theme.clone());
    line(
        "frontend.refresh_ms",
        summary.refresh_interval_ms.to_string(),
    );
    line(
        "security.jwt_default",
        summary.jwt_secret_is_default.to_string(),
    );
    line(
        "security.session_secs",
        summary.session_timeout_secs.to_string(),
    );
    line("security.cors_origins", summary.cors_origins.join(","));

    out
}
