//! Records shared by the stores.
//!
//! Everything here is a plain serde record. The JSON shape uses camelCase keys so
//! persisted values and `--output json` match what the mobile client produced.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::patch::Patch;

#[derive(Patch, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[patch(skip)]
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
    pub cover_photo_url: String,
    pub home_city: String,
    pub bio: String,
    /// Category ids picked during onboarding.
    pub selected_categories: Vec<String>,
    pub followers_count: u32,
    pub following_count: u32,
    #[patch(skip)]
    pub created_at: DateTime<Utc>,
    pub email_verified: bool,
    pub gdpr_consent: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Emoji shown on the chip.
    pub icon: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Category name, e.g. `"Música"`.
    pub category: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub creator_id: String,
    pub creator: User,
    pub attendees: Vec<User>,
    pub max_participants: u32,
    pub price: f64,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_attending(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|attendee| attendee.id == user_id)
    }

    /// Remaining capacity. Joins are not capped, so this saturates at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.attendees.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

/// Caller-supplied part of an [`Event`]; the store fills in id, timestamps,
/// creator and attendees.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub date: String,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub creator_id: String,
    pub max_participants: u32,
    pub price: f64,
    pub is_public: bool,
}

impl NewEvent {
    pub(crate) fn into_event(self, id: String, created_at: DateTime<Utc>, creator: User) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            date: self.date,
            time: self.time,
            latitude: self.latitude,
            longitude: self.longitude,
            location_name: self.location_name,
            creator_id: self.creator_id,
            attendees: vec![creator.clone()],
            creator,
            max_participants: self.max_participants,
            price: self.price,
            is_public: self.is_public,
            created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub rating: f32,
    pub locations: Vec<String>,
    pub category: String,
    pub creator: User,
    pub created_at: DateTime<Utc>,
    pub duration: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rating: f32,
    pub address: String,
    pub city: String,
    pub category: String,
    pub category_icons: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub event_id: String,
    /// Author id, or `"system"` for join/leave notices.
    pub user_id: String,
    pub user: User,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_system: bool,
}

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 10_000.0;
pub const DEFAULT_DISTANCE_MAX_KM: f64 = 100.0;

/// Explore filter selection. Transient; never persisted.
#[derive(Patch, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category names; empty means every category.
    pub categories: Vec<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub distance_max: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            distance_max: DEFAULT_DISTANCE_MAX_KM,
        }
    }
}

impl FilterState {
    /// Category membership (when any are selected) and the inclusive price range.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.categories.is_empty() && !self.categories.iter().any(|c| c == &event.category) {
            return false;
        }
        event.price >= self.price_min && event.price <= self.price_max
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    #[default]
    Idle,
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            AuthStatus::Idle => "idle",
            AuthStatus::Loading => "loading",
            AuthStatus::Authenticated => "authenticated",
            AuthStatus::Unauthenticated => "unauthenticated",
        }
    }
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreTab {
    #[default]
    #[serde(rename = "Tudo")]
    All,
    #[serde(rename = "Recomendados")]
    Recommended,
    #[serde(rename = "Rotas de viagem")]
    TravelRoutes,
    #[serde(rename = "Internacional")]
    International,
    #[serde(rename = "Hoje")]
    Today,
}

impl ExploreTab {
    pub const ALL: [ExploreTab; 5] = [
        ExploreTab::All,
        ExploreTab::Recommended,
        ExploreTab::TravelRoutes,
        ExploreTab::International,
        ExploreTab::Today,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExploreTab::All => "Tudo",
            ExploreTab::Recommended => "Recomendados",
            ExploreTab::TravelRoutes => "Rotas de viagem",
            ExploreTab::International => "Internacional",
            ExploreTab::Today => "Hoje",
        }
    }
}

impl fmt::Display for ExploreTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExploreTab {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ExploreTab::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StoreError::InvalidRequest {
                message: format!("unknown explore tab: {trimmed}"),
            })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    pub const fn as_str(self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Apple => "apple",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialProvider {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(SocialProvider::Google),
            "apple" => Ok(SocialProvider::Apple),
            other => Err(StoreError::InvalidRequest {
                message: format!("unsupported social provider: {other}"),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl UserLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn default_filters_match_every_mock_event() {
        let filters = FilterState::default();
        assert!(mock::events().iter().all(|event| filters.matches(event)));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let mut event = mock::events().remove(0);
        event.price = 50.0;
        let filters = FilterState {
            price_min: 50.0,
            price_max: 50.0,
            ..FilterState::default()
        };
        assert!(filters.matches(&event));

        event.price = 50.01;
        assert!(!filters.matches(&event));
    }

    #[test]
    fn spots_left_saturates() {
        let mut event = mock::events().remove(0);
        event.max_participants = 1;
        event.attendees = vec![mock::first_user(), mock::first_user()];
        assert_eq!(event.spots_left(), 0);
        assert!(event.is_full());
    }

    #[test]
    fn explore_tab_parses_labels() {
        assert_eq!("Rotas de viagem".parse::<ExploreTab>().unwrap(), ExploreTab::TravelRoutes);
        assert_eq!("hoje".parse::<ExploreTab>().unwrap(), ExploreTab::Today);
        assert!("Amanhã".parse::<ExploreTab>().is_err());
    }

    #[test]
    fn user_serializes_camel_case() {
        let json = serde_json::to_value(mock::first_user()).unwrap();
        assert!(json.get("displayName").is_some());
        assert!(json.get("emailVerified").is_some());
    }
}
