//! Summarize checkpoint files inside one directory

use crate::util::CommandContext;
use anyhow::{Context, Result};
use checkpoint::CheckpointFileManager;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn run(ctx: &CommandContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => ctx
            .open_manager()?
            .last_path()
            .context("No directory given and no latest checkpoint to fall back to")?,
    };

    let manager = CheckpointFileManager::open(&dir)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;

    println!("{}", "Checkpoint Files".bold());
    println!("Directory:   {}", manager.dir().display().to_string().cyan());

    match manager.summary() {
        None => println!("{}", "No checkpoint files found".dimmed()),
        Some(summary) => {
            println!("Files:       {}", summary.count);
            println!("ID span:     {} - {}", summary.min_id, summary.max_id);
            if !summary.duplicates.is_empty() {
                println!(
                    "Duplicates:  {}",
                    format!("{:?}", summary.duplicates).red()
                );
            }
        }
    }

    Ok(())
}
