use anyhow::{Context, Result};
use waymeet::storage::MemoryStorage;
use waymeet::{App, WaymeetConfig, tour};

use crate::context::Device;
use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::TourReport;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Walkthrough",
    commands: &[
        "waymeet tour                 # Run a first session end to end",
        "waymeet tour --output json   # Same, as JSON",
    ],
}];

/// Runs against throwaway memory storage so the stored session is untouched.
pub async fn handle_tour(device: Device, output: &OutputManager) -> Result<()> {
    let config = waymeet::ConfigContext::find()
        .map(|ctx| ctx.config)
        .unwrap_or_else(|err| {
            log::warn!("ignoring config: {err}");
            WaymeetConfig::default()
        });
    let mut app = App::from_config(MemoryStorage::new(), device, &config);

    output.heading("WayMeet tour");
    output.progress("Walking through a first session");
    let steps = tour::run(&mut app).await.context("Tour stopped early")?;
    output.clear_line();

    output.display(&TourReport(steps))
}
