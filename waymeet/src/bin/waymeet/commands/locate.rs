use anyhow::Result;

use crate::context::{CliContext, Device};
use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::theme::PIN;
use crate::views::LocationView;

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Location",
    commands: &[
        "waymeet locate                            # Permission denied: configured fallback",
        "waymeet locate --lat=-25.43 --lon=-49.27  # Device reports a position",
    ],
}];

pub async fn handle_locate(device: Device, output: &OutputManager) -> Result<()> {
    let mut ctx = CliContext::open(device, output).await?;
    let location = &mut ctx.app.location;

    let permission_granted = location.request_permission().await;
    let current = location.get_current_location().await;
    if !permission_granted {
        output.warning("Location permission denied, using the default location");
    }
    if let Some(city) = &current.city {
        output.info(&format!("{} {city}", PIN));
    }

    output.display(&LocationView {
        permission_granted,
        location: current,
    })
}
