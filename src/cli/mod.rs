//! Command-line interface for modforge.
//!
//! Each command lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `init` — create a fresh catalog document
//! - `add` / `remove` — edit components from the shell
//! - `list` — show the catalog's components or families
//! - `validate` — report dangling references, bad versions, and cycles
//! - `generate` — write every package manifest and run the script hook
//!
//! Global flags control logging verbosity. All commands locate the catalog
//! by walking up from the working directory unless `--document` points at a
//! specific file.

mod add;
pub mod common;
mod generate;
mod init;
mod list;
mod remove;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Deterministic Swift package manifest generator for modular component
/// catalogs.
#[derive(Parser)]
#[command(name = "modforge", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new catalog document
    Init(init::InitCommand),
    /// Add a component to the catalog
    Add(add::AddCommand),
    /// Remove a component from the catalog
    Remove(remove::RemoveCommand),
    /// List components or families
    List(list::ListCommand),
    /// Check the catalog for broken references
    Validate(validate::ValidateCommand),
    /// Generate package manifests for every component
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// Executes the selected command.
    pub async fn execute(self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        match self.command {
            Commands::Init(cmd) => cmd.execute(),
            Commands::Add(cmd) => cmd.execute(),
            Commands::Remove(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
            Commands::Validate(cmd) => cmd.execute(),
            Commands::Generate(cmd) => cmd.execute(self.quiet).await,
        }
    }
}

/// Initializes tracing output on stderr.
///
/// `RUST_LOG` wins when set; otherwise verbosity flags pick the level.
fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose {
        "modforge_cli=debug"
    } else if quiet {
        "modforge_cli=error"
    } else {
        "modforge_cli=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is fine to ignore
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
