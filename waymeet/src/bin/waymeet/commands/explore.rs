use anyhow::Result;
use clap::Subcommand;
use waymeet::{ExploreTab, mock};

use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::{CategoryTable, ItineraryTable, PlaceTable};

pub const EXAMPLES: &[ExampleGroup] = &[ExampleGroup {
    title: "Explore",
    commands: &[
        "waymeet explore places                 # Recommended places",
        "waymeet explore itineraries            # Curated travel routes",
        "waymeet explore categories             # Categories offered during onboarding",
        "waymeet explore tabs                   # Explore screen tabs",
    ],
}];

#[derive(Subcommand)]
pub enum ExploreCommands {
    /// Recommended places
    #[command(name = "places")]
    Places {
        /// Only places in this city
        #[arg(long)]
        city: Option<String>,
    },

    /// Curated itineraries
    #[command(name = "itineraries")]
    Itineraries,

    /// Event categories
    #[command(name = "categories")]
    Categories,

    /// Tabs of the explore screen
    #[command(name = "tabs")]
    Tabs,
}

pub fn handle_explore_commands(command: ExploreCommands, output: &OutputManager) -> Result<()> {
    match command {
        ExploreCommands::Places { city } => {
            let places = mock::places()
                .iter()
                .filter(|place| {
                    city.as_deref()
                        .is_none_or(|wanted| place.city.to_lowercase().contains(&wanted.to_lowercase()))
                })
                .cloned()
                .collect();
            output.display(&PlaceTable(places))
        }
        ExploreCommands::Itineraries => output.display(&ItineraryTable(mock::itineraries().to_vec())),
        ExploreCommands::Categories => output.display(&CategoryTable(mock::categories().to_vec())),
        ExploreCommands::Tabs => {
            output.heading("Explore tabs");
            for tab in ExploreTab::ALL {
                output.bullet(tab.label());
            }
            Ok(())
        }
    }
}
