//! Event feed container.
//!
//! Joins are not deduplicated and capacity is not enforced; calling
//! [`EventsStore::join_event`] twice lists the user twice.

use chrono::{DateTime, Timelike, Utc};
use rand::Rng;

use crate::errors::{StoreResult, ValidationError, ValidationIssue};
use crate::format::distance_km;
use crate::id::generate_entity_id;
use crate::latency::{Latency, Operation};
use crate::location::DEFAULT_LOCATION;
use crate::mock;
use crate::patch::Patch;
use crate::types::{Event, FilterState, FilterStatePatch, NewEvent, User, UserLocation};
use crate::validators::{is_blank, is_valid_date, is_valid_time};

/// Cover image used for events created from the app.
pub const DEFAULT_EVENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=300&fit=crop";
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 10;
/// Half-width of the box new events are scattered in around the default location.
const JITTER_DEGREES: f64 = 0.01;

pub struct EventsStore {
    events: Vec<Event>,
    filters: FilterState,
    is_loading: bool,
    latency: Latency,
}

impl Default for EventsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsStore {
    pub fn new() -> Self {
        Self::with_latency(Latency::default())
    }

    pub fn with_latency(latency: Latency) -> Self {
        Self::from_events(mock::events(), latency)
    }

    pub fn from_events(events: Vec<Event>, latency: Latency) -> Self {
        Self {
            events,
            filters: FilterState::default(),
            is_loading: false,
            latency,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Reloads the sample feed, discarding local changes.
    pub async fn fetch_events(&mut self) {
        self.is_loading = true;
        self.latency.simulate(Operation::FetchEvents).await;
        self.events = mock::events();
        self.is_loading = false;
        log::debug!("fetched {} events", self.events.len());
    }

    /// Validates the required fields, then prepends the event with a fresh id.
    /// The first sample user is recorded as creator and only attendee.
    pub fn create_event(&mut self, draft: NewEvent) -> StoreResult<&Event> {
        Self::validate(&draft)?;

        let creator = mock::first_user();
        let event = draft.into_event(generate_entity_id(), Utc::now(), creator);
        log::debug!("created event {} ({})", event.id, event.title);
        self.events.insert(0, event);
        Ok(&self.events[0])
    }

    fn validate(draft: &NewEvent) -> StoreResult<()> {
        let mut issues = Vec::new();
        if is_blank(&draft.title) {
            issues.push(ValidationIssue::new("title", "required", "title is required"));
        }
        if is_blank(&draft.category) {
            issues.push(ValidationIssue::new("category", "required", "category is required"));
        }
        if is_blank(&draft.location_name) {
            issues.push(ValidationIssue::new("location_name", "required", "location is required"));
        }
        if !is_valid_date(&draft.date) {
            issues.push(ValidationIssue::new("date", "invalid_date", "date must be YYYY-MM-DD"));
        }
        if !is_valid_time(&draft.time) {
            issues.push(ValidationIssue::new("time", "invalid_time", "time must be HH:MM"));
        }
        ValidationError::new(issues).into_result()?;
        Ok(())
    }

    /// Build a draft the way the create form does: coordinates scattered around
    /// the default location, free, public, and a participant cap parsed from text
    /// (falling back to 10).
    pub fn draft_event(
        title: &str,
        category: &str,
        location_name: &str,
        at: DateTime<Utc>,
        max_participants: &str,
    ) -> NewEvent {
        let mut rng = rand::thread_rng();
        NewEvent {
            title: title.to_string(),
            description: String::new(),
            image_url: DEFAULT_EVENT_IMAGE.to_string(),
            category: category.to_string(),
            date: at.format("%Y-%m-%d").to_string(),
            time: format!("{:02}:{:02}", at.hour(), at.minute()),
            latitude: DEFAULT_LOCATION.latitude + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES),
            longitude: DEFAULT_LOCATION.longitude + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES),
            location_name: location_name.to_string(),
            creator_id: mock::first_user().id,
            max_participants: max_participants
                .trim()
                .parse()
                .ok()
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_MAX_PARTICIPANTS),
            price: 0.0,
            is_public: true,
        }
    }

    /// Appends `user` to the event's attendees. Unknown ids are ignored.
    pub fn join_event(&mut self, event_id: &str, user: &User) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == event_id) {
            event.attendees.push(user.clone());
            log::debug!("{} joined event {event_id} ({} attending)", user.id, event.attendees.len());
        }
    }

    /// Removes every attendee entry with `user_id`.
    pub fn leave_event(&mut self, event_id: &str, user_id: &str) {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == event_id) {
            event.attendees.retain(|attendee| attendee.id != user_id);
            log::debug!("{user_id} left event {event_id} ({} attending)", event.attendees.len());
        }
    }

    pub fn set_filters(&mut self, updates: FilterStatePatch) {
        updates.apply(&mut self.filters);
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Events passing the category and price filters, in feed order.
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.events.iter().filter(|event| self.filters.matches(event)).collect()
    }

    pub fn get_event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    pub fn events_created_by(&self, user_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|event| event.creator_id == user_id).collect()
    }

    /// Case-insensitive match on title, location or category. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.events.iter().collect();
        }
        self.events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&needle)
                    || event.location_name.to_lowercase().contains(&needle)
                    || event.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Events within `radius_km` of `origin` (default: the `distance_max` filter),
    /// nearest first, paired with their distance.
    pub fn nearby(&self, origin: &UserLocation, radius_km: Option<f64>) -> Vec<(&Event, f64)> {
        let radius = radius_km.unwrap_or(self.filters.distance_max);
        let mut within: Vec<(&Event, f64)> = self
            .events
            .iter()
            .map(|event| {
                let km = distance_km(origin.latitude, origin.longitude, event.latitude, event.longitude);
                (event, km)
            })
            .filter(|(_, km)| *km <= radius)
            .collect();
        within.sort_by(|a, b| a.1.total_cmp(&b.1));
        within
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StoreError;
    use chrono::TimeZone;

    fn store() -> EventsStore {
        EventsStore::with_latency(Latency::none())
    }

    fn draft() -> NewEvent {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 19, 5, 0).unwrap();
        EventsStore::draft_event("Jam session", "Música", "Bar do Zé", at, "12")
    }

    #[test]
    fn draft_follows_form_defaults() {
        let draft = draft();
        assert_eq!(draft.date, "2025-05-01");
        assert_eq!(draft.time, "19:05");
        assert_eq!(draft.max_participants, 12);
        assert_eq!(draft.price, 0.0);
        assert_eq!(draft.creator_id, "1");
        assert!((draft.latitude - DEFAULT_LOCATION.latitude).abs() <= JITTER_DEGREES);
        assert!((draft.longitude - DEFAULT_LOCATION.longitude).abs() <= JITTER_DEGREES);

        let at = Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap();
        let fallback = EventsStore::draft_event("x", "Arte", "y", at, "muitos");
        assert_eq!(fallback.max_participants, DEFAULT_MAX_PARTICIPANTS);
    }

    #[test]
    fn create_prepends_with_creator_as_attendee() {
        let mut store = store();
        let before = store.events().len();
        let event = store.create_event(draft()).unwrap().clone();

        assert_eq!(store.events().len(), before + 1);
        assert_eq!(store.events()[0].id, event.id);
        assert_eq!(event.attendee_count(), 1);
        assert_eq!(event.creator.id, "1");
    }

    #[test]
    fn create_rejects_missing_fields() {
        let mut store = store();
        let mut bad = draft();
        bad.title = " ".to_string();
        bad.location_name.clear();
        bad.time = "7pm".to_string();

        let err = store.create_event(bad).unwrap_err();
        let StoreError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert!(validation.has_field("title"));
        assert!(validation.has_field("location_name"));
        assert!(validation.has_field("time"));
        assert!(!validation.has_field("category"));
    }

    #[test]
    fn leave_removes_every_entry() {
        let mut store = store();
        let bruno = mock::find_user("2").unwrap();
        store.join_event("1", &bruno);
        assert_eq!(store.get_event("1").unwrap().attendees.iter().filter(|a| a.id == "2").count(), 2);

        store.leave_event("1", "2");
        assert!(!store.get_event("1").unwrap().is_attending("2"));
    }

    #[test]
    fn unknown_event_is_ignored() {
        let mut store = store();
        let snapshot = store.events().to_vec();
        store.join_event("missing", &mock::first_user());
        store.leave_event("missing", "1");
        assert_eq!(store.events(), snapshot.as_slice());
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = store();
        let hits: Vec<_> = store.search("igapó").into_iter().map(|e| e.id.as_str()).collect();
        assert_eq!(hits, vec!["1"]);
        assert_eq!(store.search("  ").len(), store.events().len());
        assert_eq!(store.search("natureza").len(), 1);
    }

    #[test]
    fn nearby_sorts_and_honours_radius() {
        let mut store = store();
        let origin = DEFAULT_LOCATION.to_location();

        let local = store.nearby(&origin, Some(20.0));
        assert!(local.iter().all(|(e, _)| e.id != "6"), "Curitiba is far away");
        assert!(local.windows(2).all(|w| w[0].1 <= w[1].1));
        assert_eq!(local[0].0.id, "3");

        store.set_filters(FilterStatePatch::new().distance_max(1_000.0));
        assert_eq!(store.nearby(&origin, None).len(), store.events().len());
    }

    #[tokio::test]
    async fn fetch_discards_local_changes() {
        let mut store = store();
        store.create_event(draft()).unwrap();
        store.fetch_events().await;
        assert_eq!(store.events(), mock::events().as_slice());
        assert!(!store.is_loading());
    }
}
