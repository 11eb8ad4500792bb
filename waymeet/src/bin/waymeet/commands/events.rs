use anyhow::{Context, Result};
use chrono::{NaiveDateTime, TimeZone, Utc};
use clap::{Args, Subcommand};
use waymeet::{EventsStore, FilterStatePatch};

use crate::context::{CliApp, CliContext, Device};
use crate::examples::ExampleGroup;
use crate::output::OutputManager;
use crate::views::{EventDetail, EventRow, EventTable};

pub const EXAMPLES: &[ExampleGroup] = &[
    ExampleGroup {
        title: "Browsing",
        commands: &[
            "waymeet events list                                 # Every event in the feed",
            "waymeet events list --category Música --max-price 0 # Free music events",
            "waymeet events list --search trilha                 # Search title, place or category",
            "waymeet events show 1                               # Event details",
            "waymeet events nearby --radius 5 --lat=-23.31 --lon=-51.16",
        ],
    },
    ExampleGroup {
        title: "Taking Part",
        commands: &[
            "waymeet events join 2      # Join and post a notice in the chat",
            "waymeet events leave 2     # Leave again",
            "waymeet events create \"Jam\" --category Música --place \"Bar do Zé\" --at \"2025-05-01 19:00\"",
        ],
    },
];

#[derive(Subcommand)]
pub enum EventsCommands {
    /// List events, optionally filtered
    #[command(name = "list")]
    List(ListArgs),

    /// Show one event
    #[command(name = "show")]
    Show { event_id: String },

    /// Create an event hosted by the first sample user
    #[command(name = "create")]
    Create(CreateArgs),

    /// Join the event
    #[command(name = "join")]
    Join { event_id: String },

    /// Leave the event
    #[command(name = "leave")]
    Leave { event_id: String },

    /// Events around the device position, nearest first
    #[command(name = "nearby")]
    Nearby {
        /// Radius in km (defaults to the distance filter)
        #[arg(long)]
        radius: Option<f64>,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Category name; repeat for several
    #[arg(long = "category")]
    categories: Vec<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    /// Free-text search on title, place and category
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
pub struct CreateArgs {
    title: String,
    #[arg(long)]
    category: String,
    /// Place name
    #[arg(long)]
    place: String,
    /// Start as "YYYY-MM-DD HH:MM" (UTC)
    #[arg(long)]
    at: String,
    /// Participant cap; anything unparsable becomes 10
    #[arg(long, default_value = "")]
    max: String,
}

pub async fn handle_events_commands(command: EventsCommands, device: Device, output: &OutputManager) -> Result<()> {
    let mut ctx = CliContext::open(device, output).await?;
    let app = &mut ctx.app;

    output.progress("Loading events");
    app.events.fetch_events().await;
    output.clear_line();

    match command {
        EventsCommands::List(args) => {
            let has_filters = !args.categories.is_empty() || args.min_price.is_some() || args.max_price.is_some();
            if has_filters {
                let mut patch = FilterStatePatch::new();
                if !args.categories.is_empty() {
                    patch = patch.categories(args.categories);
                }
                patch.price_min = args.min_price;
                patch.price_max = args.max_price;
                app.events.set_filters(patch);
            }

            let rows: Vec<EventRow> = match args.search.as_deref() {
                Some(query) => {
                    app.ui.set_search_query(query);
                    let filters = app.events.filters();
                    app.events
                        .search(query)
                        .into_iter()
                        .filter(|event| filters.matches(event))
                        .map(EventRow::new)
                        .collect()
                }
                None => app.events.filtered_events().into_iter().map(EventRow::new).collect(),
            };
            if rows.is_empty() {
                output.warning("No events match");
            }
            output.display(&EventTable(rows))?;
        }
        EventsCommands::Show { event_id } => {
            let event = app
                .events
                .get_event(&event_id)
                .with_context(|| format!("Event {event_id} not found"))?;
            output.display(&EventDetail(event.clone()))?;
        }
        EventsCommands::Create(args) => {
            let naive = NaiveDateTime::parse_from_str(&args.at, "%Y-%m-%d %H:%M")
                .with_context(|| format!("Invalid --at '{}', expected YYYY-MM-DD HH:MM", args.at))?;
            let draft = EventsStore::draft_event(&args.title, &args.category, &args.place, Utc.from_utc_datetime(&naive), &args.max);
            let event = app.events.create_event(draft)?.clone();
            output.success(&format!("Created event {}", event.id));
            output.display(&EventDetail(event))?;
        }
        EventsCommands::Join { event_id } => {
            let changed = app.join(&event_id)?;
            if changed {
                output.success(&format!("Joined event {event_id}"));
            } else {
                output.warning(&format!("Already going to event {event_id}"));
            }
            show_attendance(app, &event_id, changed, output)?;
        }
        EventsCommands::Leave { event_id } => {
            let changed = app.leave(&event_id)?;
            if changed {
                output.success(&format!("Left event {event_id}"));
            } else {
                output.warning(&format!("Not going to event {event_id}"));
            }
            show_attendance(app, &event_id, changed, output)?;
        }
        EventsCommands::Nearby { radius } => {
            let (here, nearby) = app.events_near_me(radius).await;
            output.info(&format!(
                "Around {:.4},{:.4}{}",
                here.latitude,
                here.longitude,
                here.city.as_deref().map(|c| format!(" ({c})")).unwrap_or_default()
            ));
            let rows = nearby.into_iter().map(|(event, km)| EventRow::new(event).with_distance(km)).collect();
            output.display(&EventTable(rows))?;
        }
    }

    Ok(())
}

fn show_attendance(app: &CliApp, event_id: &str, changed: bool, output: &OutputManager) -> Result<()> {
    if changed && let Some(notice) = app.chat.messages_for(event_id).last() {
        output.bullet(&notice.text);
    }
    match app.events.get_event(event_id) {
        Some(event) => output.display(&EventDetail(event.clone())),
        None => Ok(()),
    }
}
