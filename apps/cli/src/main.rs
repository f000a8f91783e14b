//! # shopfront
//!
//! ```bash
//! # List products matching "shirt"
//! shopfront products --filter shirt
//!
//! # Add product 1 to the persisted cart and show it
//! shopfront cart add 1
//! shopfront cart
//!
//! # Switch to Hindi labels
//! shopfront lang toggle
//!
//! # Interactive session
//! shopfront shell
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;
use shopfront_cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
