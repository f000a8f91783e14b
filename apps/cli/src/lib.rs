//! # Shopfront CLI Library
//!
//! Everything behind the `shopfront` binary. `main.rs` only parses arguments
//! and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! shopfront_cli/
//! ├── lib.rs          ◄─── You are here (Cli definition, tracing, run)
//! ├── config.rs       ◄─── TOML + environment configuration
//! ├── state.rs        ◄─── AppState: every store, built once
//! ├── render.rs       ◄─── Plain-text views with translated labels
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command definitions + dispatch
//! │   ├── products.rs ◄─── products / product
//! │   ├── cart.rs     ◄─── cart show / add / remove / inc / dec / clear
//! │   ├── prefs.rs    ◄─── theme / lang / login / prefs
//! │   └── shell.rs    ◄─── interactive session
//! └── error.rs        ◄─── CliError / ConfigError
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging (stderr, RUST_LOG or warn,shopfront=info)        │
//! │  2. Load Configuration (--config / platform file, then SHOPFRONT_*)     │
//! │  3. Build AppState                                                      │
//! │     • FileStore in the data dir (MemoryStore with --ephemeral)          │
//! │     • CartStore hydrated from the "cart" key                            │
//! │     • HttpCatalog behind the ProductStore                               │
//! │  4. Run the command (or the shell loop)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::ShopfrontConfig;
use error::CliResult;
use state::AppState;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,shopfront=info";

#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(author, version, about = "Storefront catalog and persistent cart")]
pub struct Cli {
    /// Config file (default: platform config dir / shopfront.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep cart, theme and language in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show store dispatches and fetch transitions
/// - `RUST_LOG=shopfront_store=trace` - One crate only
/// - Default: warnings everywhere, info for shopfront crates
///
/// Logs go to stderr; stdout carries command output only.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads configuration, wires the stores and runs `cli.command`.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config {
        Some(path) => ShopfrontConfig::load(Some(path))?,
        None => ShopfrontConfig::load_or_default(None),
    };
    let app = AppState::from_config(&config, cli.ephemeral)?;
    info!(command = ?cli.command, "Running command");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = match cli.command {
        Command::Shell => {
            let stdin = std::io::stdin();
            commands::shell::run(&app, stdin.lock(), &mut out).await
        }
        command => commands::execute(&app, command, &mut out).await,
    };
    out.flush()?;
    result
}
