use anyhow::{Context, Result};
use clap::Args;
use waymeet::ConfigContext;

use crate::examples::ExampleGroup;
use crate::output::OutputManager;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Setup",
    commands: &[
        "waymeet init           # Write .waymeet/config.toml in the current directory",
        "waymeet init --force   # Overwrite an existing config",
    ],
}];

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

pub fn handle_init(args: InitArgs, output: &OutputManager) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let ctx = ConfigContext::from_root(root).context("Failed to resolve config")?;

    if ctx.config_path.exists() && !args.force {
        output.warning(&format!("{} already exists", ctx.config_path.display()));
        output.info("Use --force to overwrite it.");
        return Ok(());
    }

    ctx.write_default().context("Failed to write config")?;
    output.success(&format!("Wrote {}", ctx.config_path.display()));
    output.key_value("Storage", &format!("{:?}", ctx.config.storage.backend));
    output.key_value("Session file", &ctx.config.storage.path.display().to_string());
    Ok(())
}
