//! Print the path of the latest checkpoint

use crate::util::CommandContext;
use anyhow::{Context, Result};

pub fn run(ctx: &CommandContext) -> Result<()> {
    let manager = ctx.open_manager()?;

    let path = manager
        .last_path()
        .context("Failed to locate the latest checkpoint")?;

    println!("{}", path.display());
    Ok(())
}
