//! Labkit CLI - ckpt command

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cmd;
mod config;
mod util;

/// Labkit - checkpoint directory management for experiment workflows
#[derive(Parser)]
#[command(name = "ckpt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkpoint root directory (default: config file, then ./checkpoints)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Mirror command logging to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show namespace status (count, ID span, gaps, duplicates)
    Status,
    /// Allocate the next ID and create its directory
    New {
        /// Free-text description appended to the directory name
        description: Option<String>,

        /// Seed from this base checkpoint ID
        #[arg(long)]
        base: Option<u64>,

        /// Checkpoint file number within the base (default: last)
        #[arg(long, requires = "base")]
        iter: Option<u64>,
    },
    /// Print the path for an ID or description substring
    Path {
        /// Purely numeric input is an ID, anything else a description
        reference: String,
    },
    /// Print the path of the latest checkpoint
    Last,
    /// Delete a checkpoint directory by ID
    Rm {
        id: u64,

        /// Fail if the ID does not exist
        #[arg(long)]
        strict: bool,
    },
    /// Best-effort deletion of every ID below a cutoff
    RmUntil {
        /// IDs strictly below this are removed
        id: u64,
    },
    /// Delete empty directories, keeping the latest checkpoint
    Prune {
        /// Report what would be deleted without removing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Summarize the checkpoint files inside one directory
    Files {
        /// Directory to scan (default: the latest checkpoint)
        dir: Option<PathBuf>,
    },
    /// Show resolved configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let ctx = util::CommandContext::load(cli.root, cli.log_file)?;

    match cli.command {
        Commands::Status => cmd::status::run(&ctx),
        Commands::New {
            description,
            base,
            iter,
        } => cmd::new::run(&ctx, description.as_deref().unwrap_or(""), base, iter),
        Commands::Path { reference } => cmd::path::run(&ctx, &reference),
        Commands::Last => cmd::last::run(&ctx),
        Commands::Rm { id, strict } => cmd::rm::run(&ctx, id, strict),
        Commands::RmUntil { id } => cmd::rm_until::run(&ctx, id),
        Commands::Prune { dry_run } => cmd::prune::run(&ctx, dry_run),
        Commands::Files { dir } => cmd::files::run(&ctx, dir),
        Commands::Config => cmd::config::run(&ctx),
    }
}
