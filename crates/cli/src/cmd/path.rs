//! Resolve an ID or description to a path

use crate::util::CommandContext;
use anyhow::{Context, Result};

pub fn run(ctx: &CommandContext, reference: &str) -> Result<()> {
    let manager = ctx.open_manager()?;

    let path = manager
        .resolve(reference)
        .with_context(|| format!("Failed to resolve checkpoint '{reference}'"))?;

    // plain output for shell substitution
    println!("{}", path.display());
    Ok(())
}
