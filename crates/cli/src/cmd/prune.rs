//! Delete empty checkpoint directories

use crate::util::CommandContext;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(ctx: &CommandContext, dry_run: bool) -> Result<()> {
    let mut manager = ctx.open_manager()?;

    let pruned = manager
        .prune_empty(dry_run)
        .context("Failed to prune empty checkpoint directories")?;

    if pruned.is_empty() {
        println!("{}", "No empty checkpoint directories found".dimmed());
        return Ok(());
    }

    for path in &pruned {
        if dry_run {
            println!("Would delete: {}", path.display());
        } else {
            ctx.logger.i("Prune", &format!("deleted {}", path.display()));
            println!("Deleted: {}", path.display());
        }
    }

    println!();
    if dry_run {
        println!(
            "{} empty directories {}",
            pruned.len(),
            "(dry run, nothing removed)".yellow()
        );
    } else {
        println!(
            "{} Removed {} empty directories (latest checkpoint retained)",
            "✓".green(),
            pruned.len()
        );
    }
    Ok(())
}
