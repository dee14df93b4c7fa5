//! Best-effort deletion of every ID below a cutoff

use crate::util::CommandContext;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(ctx: &CommandContext, cutoff: u64) -> Result<()> {
    let mut manager = ctx.open_manager()?;
    let before = manager.count();

    manager
        .delete_until(cutoff)
        .with_context(|| format!("Failed to delete checkpoints below {cutoff:03}"))?;

    let removed = before - manager.count();
    ctx.logger.i(
        "RmUntil",
        &format!("removed {} checkpoint(s) below {:03}", removed, cutoff),
    );

    println!(
        "{} Removed {} checkpoint(s), {} remaining",
        "✓".green(),
        removed,
        manager.count()
    );
    Ok(())
}
