//! # Commands Module
//!
//! Command handlers for the `shopfront` binary.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Commands                                │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Products     │  │      Cart       │  │     Preferences         │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  products       │  │  cart show      │  │  theme [toggle]         │ │
//! │  │  product <ID>   │  │  cart add <ID>  │  │  lang [toggle]          │ │
//! │  │                 │  │  cart remove    │  │  login / logout (shell) │ │
//! │  │                 │  │  cart inc / dec │  │  whoami / prefs (shell) │ │
//! │  │                 │  │  cart clear     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  shell: every command above in one process, stores kept alive           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers take the [`AppState`] by reference and write to any
//! `std::io::Write`, so tests capture output in a `Vec<u8>`.

pub mod cart;
pub mod prefs;
pub mod products;
pub mod shell;

use std::io::Write;

use clap::{Args, Subcommand, ValueEnum};
use shopfront_core::ProductId;

use crate::error::CliResult;
use crate::state::AppState;

/// Commands available both one-shot and inside the shell.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products, optionally filtered by title or category
    Products(ProductsArgs),

    /// Show one product
    Product {
        /// Product id
        id: ProductId,
    },

    /// Show or change the cart (default: show)
    Cart {
        #[command(subcommand)]
        action: Option<CartCommand>,
    },

    /// Show or toggle the colour theme
    Theme {
        #[arg(value_enum)]
        action: Option<SettingAction>,
    },

    /// Show or toggle the interface language (en / hi)
    Lang {
        #[arg(value_enum)]
        action: Option<SettingAction>,
    },

    /// Interactive session keeping every store alive between commands
    Shell,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ProductsArgs {
    /// Case-insensitive substring matched against title and category
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Fetch again even if the catalog is already loaded
    #[arg(long)]
    pub refresh: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    /// Print the cart
    Show,
    /// Add one unit of a product
    Add { id: ProductId },
    /// Remove a product line entirely
    Remove { id: ProductId },
    /// Increase a line's quantity by one
    Inc { id: ProductId },
    /// Decrease a line's quantity by one (never below 1)
    Dec { id: ProductId },
    /// Empty the cart
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingAction {
    Toggle,
}

/// Runs one command against `app`.
///
/// `Shell` is handled by the caller, since it owns the input stream.
pub async fn execute(app: &AppState, command: Command, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Command::Products(args) => products::list(app, args, out).await,
        Command::Product { id } => products::show(app, &id, out).await,
        Command::Cart { action } => cart::run(app, action.unwrap_or(CartCommand::Show), out).await,
        Command::Theme { action } => prefs::theme(app, action, out),
        Command::Lang { action } => prefs::lang(app, action, out),
        Command::Shell => {
            writeln!(out, "already in a shell")?;
            Ok(())
        }
    }
}
