//! Command-line interface for psagent
//!
//! Global options feed config resolution; subcommands inspect the resolved
//! setup and the operation catalog.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod doctor;
mod ops;
mod output;
mod utils;

pub use utils::{build_invocation, Invocation};

/// Agent for a host application's automation surface
#[derive(Parser)]
#[command(name = "psagent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Named configuration profile
    #[arg(long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Emit JSON output (takes precedence over --plain)
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit plain key=value output
    #[arg(long, global = true)]
    pub plain: bool,

    /// Network call budget in milliseconds
    #[arg(long, global = true, value_name = "MS", allow_hyphen_values = true)]
    pub timeout: Option<String>,

    /// Compute mutating operations without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// User config file (default: ~/.config/psagent/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory containing docs/reference/ with the operation documents
    #[arg(long, global = true, value_name = "DIR")]
    pub docs_root: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect current setup
    Doctor,

    /// Show the resolved configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),

    /// Browse the operation catalog
    #[command(subcommand)]
    Ops(ops::OpsCommand),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.global.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Doctor => doctor::run(&build_invocation(&cli.global)),
        Commands::Config(args) => config::run(&build_invocation(&cli.global), args),
        Commands::Ops(args) => ops::run(&build_invocation(&cli.global), args),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "psagent", &mut std::io::stdout());
            Ok(())
        }
    }
}
