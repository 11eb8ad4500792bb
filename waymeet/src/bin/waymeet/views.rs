//! Serializable shapes printed by the commands.

use chrono::Utc;
use comfy_table::{Cell, Color as TableColor, Table};
use serde::Serialize;
use waymeet::format::{format_distance, format_event_date_time, format_price, time_ago, truncate_text};
use waymeet::tour::TourStep;
use waymeet::{AuthStatus, Category, ChatMessage, Event, Itinerary, Place, User, UserLocation};

use crate::output::{GlobalOptions, TableDisplay, detail_table, themed_table};

const TITLE_WIDTH: usize = 32;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub status: AuthStatus,
    pub has_completed_onboarding: bool,
    pub storage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    pub user: Option<User>,
}

impl TableDisplay for SessionView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut rows = vec![
            ("Status", self.status.to_string()),
            ("Onboarded", self.has_completed_onboarding.to_string()),
            ("Storage", self.storage.to_string()),
            ("Config", self.config.clone().unwrap_or_else(|| "defaults".to_string())),
        ];
        if let Some(user) = &self.user {
            rows.push(("User", format!("{} ({})", user.display_name, user.id)));
            rows.push(("Email", user.email.clone()));
            rows.push(("Verified", user.email_verified.to_string()));
            if !user.home_city.is_empty() {
                rows.push(("City", user.home_city.clone()));
            }
            if !user.selected_categories.is_empty() {
                rows.push(("Categories", user.selected_categories.join(", ")));
            }
        }
        detail_table(options, &rows)
    }

    fn to_compact(&self) -> String {
        match &self.user {
            Some(user) => format!("{} {} onboarded={}", self.status, user.id, self.has_completed_onboarding),
            None => self.status.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub when: String,
    pub location: String,
    pub price: String,
    pub attendees: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
}

impl EventRow {
    pub fn new(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category.clone(),
            when: format_event_date_time(&event.date, &event.time),
            location: event.location_name.clone(),
            price: format_price(event.price),
            attendees: format!("{}/{}", event.attendee_count(), event.max_participants),
            distance: None,
        }
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance = Some(format_distance(km));
        self
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct EventTable(pub Vec<EventRow>);

impl TableDisplay for EventTable {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let with_distance = self.0.iter().any(|row| row.distance.is_some());
        let mut headers = vec!["ID", "Title", "Category", "When", "Where", "Price", "Going"];
        if with_distance {
            headers.push("Distance");
        }
        let mut table = themed_table(options, &headers);
        for row in &self.0 {
            let mut cells = vec![
                Cell::new(&row.id),
                Cell::new(truncate_text(&row.title, TITLE_WIDTH)),
                Cell::new(&row.category),
                Cell::new(&row.when),
                Cell::new(&row.location),
                Cell::new(&row.price),
                Cell::new(&row.attendees),
            ];
            if with_distance {
                cells.push(Cell::new(row.distance.as_deref().unwrap_or("-")));
            }
            table.add_row(cells);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0.iter().map(|row| row.id.as_str()).collect::<Vec<_>>().join(",")
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct EventDetail(pub Event);

impl TableDisplay for EventDetail {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let event = &self.0;
        let going: Vec<&str> = event.attendees.iter().map(|a| a.display_name.as_str()).collect();
        detail_table(
            options,
            &[
                ("ID", event.id.clone()),
                ("Title", event.title.clone()),
                ("Description", event.description.clone()),
                ("Category", event.category.clone()),
                ("When", format_event_date_time(&event.date, &event.time)),
                ("Where", event.location_name.clone()),
                ("Price", format_price(event.price)),
                ("Host", event.creator.display_name.clone()),
                ("Going", format!("{} ({} spots left)", going.join(", "), event.spots_left())),
            ],
        )
    }

    fn to_compact(&self) -> String {
        format!("{} {} {}/{}", self.0.id, self.0.title, self.0.attendee_count(), self.0.max_participants)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatView {
    pub event_id: String,
    pub messages: Vec<ChatMessage>,
}

impl TableDisplay for ChatView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let now = Utc::now();
        let mut table = themed_table(options, &["When", "From", "Message"]);
        for message in &self.messages {
            let from = if message.is_system { "" } else { message.user.display_name.as_str() };
            let mut text = Cell::new(&message.text);
            if message.is_system && !options.no_color {
                text = text.fg(TableColor::Yellow);
            }
            table.add_row(vec![Cell::new(time_ago(message.timestamp, now)), Cell::new(from), text]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!("{}: {} messages", self.event_id, self.messages.len())
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct PlaceTable(pub Vec<Place>);

impl TableDisplay for PlaceTable {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["ID", "Name", "City", "Category", "Rating"]);
        for place in &self.0 {
            table.add_row(vec![
                Cell::new(&place.id),
                Cell::new(&place.name),
                Cell::new(&place.city),
                Cell::new(format!("{} {}", place.category_icons.join(""), place.category)),
                Cell::new(format!("{:.1}", place.rating)),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct ItineraryTable(pub Vec<Itinerary>);

impl TableDisplay for ItineraryTable {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["ID", "Title", "Stops", "Duration", "Price", "Rating"]);
        for itinerary in &self.0 {
            table.add_row(vec![
                Cell::new(&itinerary.id),
                Cell::new(&itinerary.title),
                Cell::new(itinerary.locations.join(" → ")),
                Cell::new(&itinerary.duration),
                Cell::new(format_price(itinerary.price)),
                Cell::new(format!("{:.1}", itinerary.rating)),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0.iter().map(|i| i.title.as_str()).collect::<Vec<_>>().join(", ")
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct CategoryTable(pub Vec<Category>);

impl TableDisplay for CategoryTable {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["ID", "", "Name", "Color"]);
        for category in &self.0 {
            table.add_row(vec![
                Cell::new(&category.id),
                Cell::new(&category.icon),
                Cell::new(&category.name),
                Cell::new(&category.color),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        self.0.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(",")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub permission_granted: bool,
    pub location: UserLocation,
}

impl TableDisplay for LocationView {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        detail_table(
            options,
            &[
                ("Permission", if self.permission_granted { "granted" } else { "denied" }.to_string()),
                ("Latitude", format!("{:.4}", self.location.latitude)),
                ("Longitude", format!("{:.4}", self.location.longitude)),
                ("City", self.location.city.clone().unwrap_or_else(|| "-".to_string())),
            ],
        )
    }

    fn to_compact(&self) -> String {
        format!("{:.4},{:.4}", self.location.latitude, self.location.longitude)
    }
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct TourReport(pub Vec<TourStep>);

impl TableDisplay for TourReport {
    fn to_table(&self, options: &GlobalOptions) -> Table {
        let mut table = themed_table(options, &["#", "Step", "Result"]);
        for (index, step) in self.0.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(step.step),
                Cell::new(&step.detail),
            ]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!("{} steps", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymeet::mock;

    fn plain() -> GlobalOptions {
        GlobalOptions {
            no_color: true,
            ..Default::default()
        }
    }

    #[test]
    fn event_rows_format_price_and_going() {
        let events = mock::events();
        let row = EventRow::new(&events[1]);
        assert_eq!(row.price, "R$ 25,00");
        assert_eq!(row.attendees, "2/200");
        assert!(row.distance.is_none());
        assert_eq!(EventRow::new(&events[0]).with_distance(0.45).distance.as_deref(), Some("450m"));
    }

    #[test]
    fn event_table_adds_distance_column_only_when_known() {
        let events = mock::events();
        let plain_rows = EventTable(events.iter().map(EventRow::new).collect());
        assert!(!plain_rows.to_table(&plain()).to_string().contains("Distance"));

        let near = EventTable(vec![EventRow::new(&events[2]).with_distance(0.0)]);
        assert!(near.to_table(&plain()).to_string().contains("Distance"));
        assert_eq!(near.to_compact(), "3");
    }

    #[test]
    fn session_compact_without_user() {
        let view = SessionView {
            status: AuthStatus::Unauthenticated,
            has_completed_onboarding: false,
            storage: "memory",
            config: None,
            user: None,
        };
        assert_eq!(view.to_compact(), "unauthenticated");
    }

    #[test]
    fn session_table_names_config_source() {
        let mut view = SessionView {
            status: AuthStatus::Unauthenticated,
            has_completed_onboarding: false,
            storage: "file",
            config: None,
            user: None,
        };
        assert!(view.to_table(&plain()).to_string().contains("defaults"));

        view.config = Some(".waymeet/config.toml".to_string());
        let rendered = view.to_table(&plain()).to_string();
        assert!(rendered.contains(".waymeet/config.toml"));
        assert!(serde_json::to_string(&view).unwrap().contains("\"config\""));
    }
}
