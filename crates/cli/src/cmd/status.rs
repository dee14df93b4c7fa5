//! Show checkpoint namespace status

use crate::util::CommandContext;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let manager = ctx.open_manager()?;

    println!("{}", "Checkpoint Status".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("Root:        {}", manager.root().display().to_string().cyan());

    match manager.summary() {
        None => {
            println!();
            println!("{}", "No checkpoints yet".dimmed());
            println!("  {}", "Tip: Create one with 'ckpt new <description>'".dimmed());
        }
        Some(summary) => {
            println!("Checkpoints: {}", summary.count);
            println!(
                "ID span:     {:03} - {:03}",
                summary.min_id, summary.max_id
            );
            if !summary.missing.is_empty() {
                println!(
                    "Missing:     {}",
                    format!("{:?}", summary.missing).yellow()
                );
            }
            if !summary.duplicates.is_empty() {
                println!(
                    "Duplicates:  {} {}",
                    format!("{:?}", summary.duplicates).red(),
                    "(more than one directory per ID)".dimmed()
                );
            }
        }
    }

    Ok(())
}
