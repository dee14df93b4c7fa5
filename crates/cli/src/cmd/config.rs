//! Show resolved configuration

use crate::config;
use crate::util::CommandContext;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(ctx: &CommandContext) -> Result<()> {
    println!("{}", "Configuration".bold());
    match config::config_file_path() {
        Some(path) if path.exists() => {
            println!("{}: {}", "Location".dimmed(), path.display());
        }
        Some(path) => {
            println!(
                "{}: {} {}",
                "Location".dimmed(),
                path.display(),
                "(not present, using defaults)".dimmed()
            );
        }
        None => println!("{}", "No config directory available".dimmed()),
    }
    println!();

    println!("{} = {}", "root".cyan(), ctx.root().display());
    match &ctx.config.log_file {
        Some(path) => println!("{} = {}", "log_file".cyan(), path.display()),
        None => println!("{} = {}", "log_file".cyan(), "(unset)".dimmed()),
    }

    let policy = ctx.policy();
    println!("\n{}", "[prune]".yellow());
    println!(
        "  {} = {:?}",
        "config_extensions".cyan(),
        policy.config_extensions
    );
    println!("  {} = {:?}", "aux_dirs".cyan(), policy.aux_dirs);

    println!("\n{}", "Example:".bold());
    println!("{}", config::example_config());
    Ok(())
}
