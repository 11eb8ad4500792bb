//! Application shell: owns every container and the flows that touch more than one.

use crate::config::WaymeetConfig;
use crate::errors::{StoreError, StoreResult};
use crate::latency::Latency;
use crate::location::{LocationProvider, LocationService};
use crate::storage::KeyValueStorage;
use crate::stores::{ChatStore, EventsStore, UiStore, UserStore};
use crate::types::{Event, UserLocation};

/// Which part of the app the current session may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Welcome / login / signup.
    Auth,
    /// Category selection before first use.
    Onboarding,
    /// Main tabs.
    Main,
}

/// Outcome of [`App::toggle_attendance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Joined,
    Left,
}

pub struct App<S, P> {
    pub session: UserStore<S>,
    pub events: EventsStore,
    pub chat: ChatStore,
    pub ui: UiStore,
    pub location: LocationService<P>,
}

impl<S: KeyValueStorage, P: LocationProvider> App<S, P> {
    pub fn new(storage: S, provider: P, latency: Latency) -> Self {
        Self::assemble(storage, LocationService::new(provider), latency)
    }

    /// Latency and fallback location come from the loaded config.
    pub fn from_config(storage: S, provider: P, config: &WaymeetConfig) -> Self {
        let location = LocationService::with_fallback(provider, config.location.to_location());
        Self::assemble(storage, location, config.latency)
    }

    fn assemble(storage: S, location: LocationService<P>, latency: Latency) -> Self {
        Self {
            session: UserStore::with_latency(storage, latency),
            events: EventsStore::with_latency(latency),
            chat: ChatStore::with_latency(latency),
            ui: UiStore::new(),
            location,
        }
    }

    pub fn gate(&self) -> Gate {
        if !self.session.is_authenticated() {
            Gate::Auth
        } else if !self.session.has_completed_onboarding() {
            Gate::Onboarding
        } else {
            Gate::Main
        }
    }

    /// Store the picked categories and mark onboarding done.
    pub async fn finish_onboarding(&mut self, categories: Vec<String>) -> StoreResult<()> {
        self.session.set_selected_categories(categories);
        self.session.complete_onboarding().await
    }

    /// Whether the signed-in user is on the event's attendee list.
    pub fn is_attending(&self, event_id: &str) -> StoreResult<bool> {
        let user = self.session.user().ok_or(StoreError::NotAuthenticated)?;
        let event = self
            .events
            .get_event(event_id)
            .ok_or_else(|| StoreError::not_found("event", event_id))?;
        Ok(event.is_attending(&user.id))
    }

    /// Join when not attending, leave otherwise, and post the matching notice in
    /// the event's chat.
    pub fn toggle_attendance(&mut self, event_id: &str) -> StoreResult<Attendance> {
        let attending = self.is_attending(event_id)?;
        let user = self.session.user().cloned().ok_or(StoreError::NotAuthenticated)?;

        if attending {
            self.events.leave_event(event_id, &user.id);
            self.chat
                .add_system_message(event_id, &format!("{} saiu do grupo", user.display_name));
            Ok(Attendance::Left)
        } else {
            self.events.join_event(event_id, &user);
            self.chat
                .add_system_message(event_id, &format!("{} entrou no grupo", user.display_name));
            Ok(Attendance::Joined)
        }
    }

    /// Joins unless already going. `Ok(false)` means nothing changed.
    pub fn join(&mut self, event_id: &str) -> StoreResult<bool> {
        self.set_attendance(event_id, true)
    }

    /// Leaves if going. `Ok(false)` means nothing changed.
    pub fn leave(&mut self, event_id: &str) -> StoreResult<bool> {
        self.set_attendance(event_id, false)
    }

    fn set_attendance(&mut self, event_id: &str, going: bool) -> StoreResult<bool> {
        if self.is_attending(event_id)? == going {
            return Ok(false);
        }
        self.toggle_attendance(event_id)?;
        Ok(true)
    }

    /// Events created by the signed-in user.
    pub fn my_events(&self) -> Vec<&Event> {
        match self.session.user() {
            Some(user) => self.events.events_created_by(&user.id),
            None => Vec::new(),
        }
    }

    /// Current position (or the fallback) and the events around it.
    pub async fn events_near_me(&mut self, radius_km: Option<f64>) -> (UserLocation, Vec<(&Event, f64)>) {
        let here = self.location.get_current_location().await;
        let nearby = self.events.nearby(&here, radius_km);
        (here, nearby)
    }
}
