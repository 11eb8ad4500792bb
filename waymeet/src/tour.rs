//! Scripted walkthrough of a first session: sign in, onboard, browse, join,
//! chat, create, sign out. Drives a fresh [`App`] and records what each step saw.

use chrono::{Duration, Utc};
use serde::Serialize;

use crate::app::{App, Attendance};
use crate::errors::StoreResult;
use crate::format::{format_distance, format_event_date_time, format_price};
use crate::location::LocationProvider;
use crate::storage::KeyValueStorage;
use crate::stores::EventsStore;
use crate::types::FilterStatePatch;

pub const TOUR_EMAIL: &str = "test@x.com";
/// Picked during onboarding by id; the events filter matches on the name.
pub const TOUR_CATEGORY_ID: &str = "2";
pub const TOUR_CATEGORY: &str = "Gastronomia";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourStep {
    pub step: &'static str,
    pub detail: String,
}

impl TourStep {
    fn new(step: &'static str, detail: impl Into<String>) -> Self {
        Self {
            step,
            detail: detail.into(),
        }
    }
}

pub async fn run<S, P>(app: &mut App<S, P>) -> StoreResult<Vec<TourStep>>
where
    S: KeyValueStorage,
    P: LocationProvider,
{
    let mut steps = Vec::new();

    app.session.check_session().await;
    steps.push(TourStep::new(
        "check_session",
        format!("{} (onboarded: {})", app.session.auth_status(), app.session.has_completed_onboarding()),
    ));

    let user = app.session.login(TOUR_EMAIL, "secret").await?.clone();
    steps.push(TourStep::new("login", format!("{} <{}>", user.display_name, user.email)));

    app.session.check_session().await;
    let restored = app.session.user().map(|u| u.id.as_str()).unwrap_or("-");
    steps.push(TourStep::new("check_session", format!("{} as {restored}", app.session.auth_status())));

    app.finish_onboarding(vec![TOUR_CATEGORY_ID.to_string()]).await?;
    let picked = app.session.user().map(|user| user.selected_categories.join(",")).unwrap_or_default();
    steps.push(TourStep::new("onboarding", format!("categories {picked}; gate is now {:?}", app.gate())));

    app.events.fetch_events().await;
    app.events
        .set_filters(FilterStatePatch::new().categories(vec![TOUR_CATEGORY.to_string()]));
    let picked = app.events.filtered_events().first().map(|event| {
        (
            event.id.clone(),
            format!(
                "{} | {} | {}",
                event.title,
                format_event_date_time(&event.date, &event.time),
                format_price(event.price)
            ),
        )
    });
    let Some((event_id, summary)) = picked else {
        steps.push(TourStep::new("filter", "no events match"));
        return Ok(steps);
    };
    steps.push(TourStep::new("filter", summary));

    let attendance = app.toggle_attendance(&event_id)?;
    let verb = match attendance {
        Attendance::Joined => "joined",
        Attendance::Left => "left",
    };
    steps.push(TourStep::new("attendance", format!("{verb} event {event_id}")));

    app.chat.fetch_messages(&event_id).await;
    app.chat.send_message(&event_id, &user.id, "Oi pessoal, chego às 12h!");
    let thread: Vec<String> = app
        .chat
        .messages_for(&event_id)
        .iter()
        .map(|message| message.text.clone())
        .collect();
    steps.push(TourStep::new("chat", thread.join(" / ")));

    let draft = EventsStore::draft_event(
        "Piquenique no parque",
        "Natureza",
        "Parque Arthur Thomas",
        Utc::now() + Duration::days(3),
        "",
    );
    let created = app.events.create_event(draft)?;
    steps.push(TourStep::new(
        "create_event",
        format!("{} ({} spots)", created.title, created.max_participants),
    ));

    let (here, nearby) = app.events_near_me(Some(10.0)).await;
    let closest = nearby
        .first()
        .map(|(event, km)| format!("{} at {}", event.title, format_distance(*km)))
        .unwrap_or_else(|| "nothing close".to_string());
    steps.push(TourStep::new(
        "nearby",
        format!("{} events within 10km of {:.4},{:.4}; closest: {closest}", nearby.len(), here.latitude, here.longitude),
    ));

    app.session.logout().await?;
    steps.push(TourStep::new("logout", format!("gate is now {:?}", app.gate())));

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::Latency;
    use crate::location::DeniedProvider;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn walkthrough_covers_every_step() {
        let mut app = App::new(MemoryStorage::new(), DeniedProvider, Latency::none());
        let steps = run(&mut app).await.unwrap();
        let names: Vec<_> = steps.iter().map(|s| s.step).collect();
        assert_eq!(
            names,
            vec![
                "check_session",
                "login",
                "check_session",
                "onboarding",
                "filter",
                "attendance",
                "chat",
                "create_event",
                "nearby",
                "logout",
            ]
        );
        assert_eq!(steps[0].detail, "unauthenticated (onboarded: false)");
        assert_eq!(steps[2].detail, "authenticated as 1");
        assert_eq!(steps[3].detail, "categories 2; gate is now Main");
        assert_eq!(steps[5].detail, "joined event 2");
        assert!(steps[6].detail.starts_with("Ana Souza entrou no grupo"));
        assert_eq!(steps[9].detail, "gate is now Auth");
    }

    #[test]
    fn tour_category_id_names_the_filtered_category() {
        let category = crate::mock::categories().iter().find(|c| c.id == TOUR_CATEGORY_ID).unwrap();
        assert_eq!(category.name, TOUR_CATEGORY);
    }
}
