//! Allocate the next ID and create its directory

use crate::util::CommandContext;
use anyhow::{Context, Result};

pub fn run(
    ctx: &CommandContext,
    description: &str,
    base: Option<u64>,
    iter: Option<u64>,
) -> Result<()> {
    let mut manager = ctx.open_manager()?;

    let path = manager
        .create_next(description, base, iter)
        .context("Failed to create checkpoint directory")?;

    ctx.logger.i("New", &format!("created {}", path.display()));
    if let Some(base) = base {
        ctx.logger
            .d("New", &format!("seeded from base checkpoint {:03}", base));
    }

    println!("{}", path.display());
    Ok(())
}
