//! # Interactive Shell
//!
//! One process, one set of stores: the catalog is fetched once, the filter
//! and signed-in user persist between lines, and the cart is written through
//! to storage after every change like in one-shot mode.
//!
//! ```text
//! shopfront> products --filter shirt
//! shopfront> cart add 2
//! shopfront> login Asha --email asha@example.com
//! shopfront> quit
//! ```
//!
//! Each line is split into words (double quotes group words and keep spaces)
//! and parsed with the same clap definitions as the one-shot commands. A
//! parse error or a failed command is printed and the loop continues.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use shopfront_core::Language;
use tracing::debug;

use super::{execute, prefs, Command};
use crate::error::CliResult;
use crate::state::AppState;

const PROMPT: &str = "shopfront> ";

#[derive(Debug, Parser)]
#[command(name = "shopfront", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Store(Command),

    /// Sign in (no credentials are checked)
    Login {
        name: String,
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show or update session preferences
    Prefs {
        #[arg(long, value_name = "BOOL")]
        dark_mode: Option<bool>,
        #[arg(long, value_name = "en|hi")]
        language: Option<Language>,
    },

    /// Set the product filter (text is used exactly as typed)
    Filter {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Clear the product filter
    Unfilter,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Splits a line into words. `"a b"` is one word; an unterminated quote runs
/// to the end of the line.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

/// Reads commands from `input` until `quit` or end of input.
pub async fn run<R: BufRead>(app: &AppState, input: R, out: &mut dyn Write) -> CliResult<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let words = split_words(&line?);
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                write!(out, "{}", e.render())?;
                continue;
            }
        };
        debug!(?command, "shell command");

        if let ShellCommand::Quit = command {
            return Ok(());
        }
        if let Err(e) = dispatch(app, command, out).await {
            writeln!(out, "{}: {}", app.locale.translate("error"), e)?;
        }
    }
}

async fn dispatch(app: &AppState, command: ShellCommand, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ShellCommand::Store(command) => execute(app, command, out).await,
        ShellCommand::Login { name, email } => prefs::login(app, name, email, out),
        ShellCommand::Logout => prefs::logout(app, out),
        ShellCommand::Whoami => prefs::whoami(app, out),
        ShellCommand::Prefs {
            dark_mode,
            language,
        } => prefs::prefs(app, dark_mode, language, out),
        ShellCommand::Filter { text } => {
            app.products.set_filter(text.join(" "));
            Ok(())
        }
        ShellCommand::Unfilter => {
            app.products.clear_filter();
            Ok(())
        }
        ShellCommand::Quit => Ok(()),
    }
}
