//! Delete a checkpoint directory by ID

use crate::util::CommandContext;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub fn run(ctx: &CommandContext, id: u64, strict: bool) -> Result<()> {
    let mut manager = ctx.open_manager()?;

    if !manager.contains_id(id) && !strict {
        println!("{}", format!("Checkpoint {:03} does not exist", id).dimmed());
        return Ok(());
    }

    manager
        .delete(id, !strict)
        .with_context(|| format!("Failed to delete checkpoint {id:03}"))?;

    ctx.logger.i("Rm", &format!("deleted checkpoint {id:03}"));
    println!("{} Deleted checkpoint {:03}", "✓".green(), id);
    Ok(())
}
