//! Feed filtering, attendance and the chat notices it produces.

use waymeet::mock;
use waymeet::storage::MemoryStorage;
use waymeet::{App, Attendance, DeniedProvider, EventsStore, FilterStatePatch, Gate, Latency, StoreError};

fn app() -> App<MemoryStorage, DeniedProvider> {
    App::new(MemoryStorage::new(), DeniedProvider, Latency::none())
}

fn ids<'a>(events: impl IntoIterator<Item = &'a waymeet::Event>) -> Vec<&'a str> {
    events.into_iter().map(|event| event.id.as_str()).collect()
}

#[test]
fn default_filters_show_the_whole_feed() {
    let store = EventsStore::with_latency(Latency::none());
    assert_eq!(ids(store.filtered_events()), ids(store.events()));
}

#[test]
fn category_and_price_filters_combine() {
    let mut store = EventsStore::with_latency(Latency::none());

    store.set_filters(FilterStatePatch::new().categories(vec!["Música".to_string(), "Arte".to_string()]));
    assert_eq!(ids(store.filtered_events()), vec!["1", "4"]);

    store.set_filters(FilterStatePatch::new().categories(Vec::new()).price_max(30.0));
    assert_eq!(ids(store.filtered_events()), vec!["1", "2", "4"]);

    store.set_filters(FilterStatePatch::new().price_min(45.0).price_max(80.0));
    assert_eq!(ids(store.filtered_events()), vec!["3", "5"]);
    assert_eq!(store.filters().price_min, 45.0);

    store.reset_filters();
    assert_eq!(store.filtered_events().len(), store.events().len());
}

#[test]
fn filtering_never_changes_the_feed() {
    let mut store = EventsStore::with_latency(Latency::none());
    store.set_filters(FilterStatePatch::new().categories(vec!["Festa".to_string()]));
    assert!(store.filtered_events().is_empty());
    assert_eq!(store.events(), mock::events().as_slice());
}

#[test]
fn join_then_leave_restores_attendees() {
    let mut store = EventsStore::with_latency(Latency::none());
    let diego = mock::find_user("4").unwrap();
    let before = store.get_event("5").unwrap().attendees.clone();

    store.join_event("5", &diego);
    let joined = store.get_event("5").unwrap();
    assert_eq!(joined.attendee_count(), before.len() + 1);
    assert_eq!(joined.attendees.last().map(|u| u.id.as_str()), Some("4"));

    store.leave_event("5", "4");
    assert_eq!(store.get_event("5").unwrap().attendees, before);
}

#[test]
fn join_ignores_capacity() {
    let mut store = EventsStore::with_latency(Latency::none());
    let draft = EventsStore::draft_event("Mesa pequena", "Gastronomia", "Cozinha", chrono::Utc::now(), "1");
    let id = store.create_event(draft).unwrap().id.clone();
    assert!(store.get_event(&id).unwrap().is_full());

    store.join_event(&id, &mock::find_user("2").unwrap());
    let event = store.get_event(&id).unwrap();
    assert_eq!(event.attendee_count(), 2);
    assert_eq!(event.spots_left(), 0);
}

#[tokio::test]
async fn chat_keeps_call_order() {
    let mut app = app();
    app.session.login("bruno@waymeet.app", "").await.unwrap();
    let seeded = app.chat.messages_for("1").len();

    app.chat.send_message("1", "2", "primeira");
    assert_eq!(app.toggle_attendance("1").unwrap(), Attendance::Left);
    app.chat.send_message("1", "3", "terceira");

    let tail: Vec<_> = app.chat.messages_for("1")[seeded..]
        .iter()
        .map(|m| (m.text.as_str(), m.is_system))
        .collect();
    assert_eq!(
        tail,
        vec![("primeira", false), ("Bruno Lima saiu do grupo", true), ("terceira", false)]
    );
}

#[tokio::test]
async fn signed_out_users_cannot_toggle() {
    let mut app = app();
    assert_eq!(app.gate(), Gate::Auth);
    assert!(matches!(app.toggle_attendance("2"), Err(StoreError::NotAuthenticated)));
    assert!(!app.chat.has_thread("2"));
}
