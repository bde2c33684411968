//! modforge CLI entry point.
//!
//! Parses arguments, executes the selected command, and renders failures
//! through the user-friendly error context so every error reaching the
//! terminal carries an actionable hint.

use anyhow::Result;
use clap::Parser;
use modforge_cli::cli;
use modforge_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
