//! Session lifecycle against in-memory storage.

use waymeet::keys::{ONBOARDING_KEY, SESSION_KEY};
use waymeet::storage::{KeyValueStorage, MemoryStorage};
use waymeet::{AuthStatus, Latency, SocialProvider, StoreError, UserPatch, UserStore};

fn store(storage: MemoryStorage) -> UserStore<MemoryStorage> {
    UserStore::with_latency(storage, Latency::none())
}

#[tokio::test]
async fn empty_storage_checks_out_unauthenticated() {
    let mut session = store(MemoryStorage::new());
    assert_eq!(session.auth_status(), AuthStatus::Idle);

    session.check_session().await;
    assert_eq!(session.auth_status(), AuthStatus::Unauthenticated);
    assert!(!session.has_completed_onboarding());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn login_then_check_session_keeps_profile() {
    let mut session = store(MemoryStorage::new());
    let logged_in = session.login("test@x.com", "whatever").await.unwrap().clone();
    assert_eq!(session.auth_status(), AuthStatus::Authenticated);
    assert_eq!(logged_in.email, "test@x.com");

    session.check_session().await;
    assert_eq!(session.auth_status(), AuthStatus::Authenticated);
    assert_eq!(session.user(), Some(&logged_in));
    assert_eq!(session.storage().peek(SESSION_KEY), Some(r#"{"userId":"1"}"#));
}

#[tokio::test]
async fn restart_restores_user_and_onboarding() {
    let mut session = store(MemoryStorage::new());
    session.login("carla@waymeet.app", "").await.unwrap();
    session.complete_onboarding().await.unwrap();

    let mut restarted = store(session.into_storage());
    restarted.check_session().await;
    assert!(restarted.is_authenticated());
    assert!(restarted.has_completed_onboarding());
    assert_eq!(restarted.user().unwrap().display_name, "Carla Mendes");
}

#[tokio::test]
async fn malformed_session_reads_as_signed_out() {
    let storage = MemoryStorage::with_items([(SESSION_KEY, "{not json")]);
    let mut session = store(storage);
    session.check_session().await;
    assert_eq!(session.auth_status(), AuthStatus::Unauthenticated);
    assert!(session.user().is_none());
}

#[tokio::test]
async fn unknown_stored_id_maps_to_first_user() {
    let storage = MemoryStorage::with_items([(SESSION_KEY, r#"{"userId":"999"}"#), (ONBOARDING_KEY, "true")]);
    let mut session = store(storage);
    session.check_session().await;
    assert!(session.is_authenticated());
    assert!(session.has_completed_onboarding());
    assert_eq!(session.user().unwrap().id, "1");
}

#[tokio::test]
async fn onboarding_flag_must_be_exactly_true() {
    let storage = MemoryStorage::with_items([(SESSION_KEY, r#"{"userId":"2"}"#), (ONBOARDING_KEY, "yes")]);
    let mut session = store(storage);
    session.check_session().await;
    assert!(session.is_authenticated());
    assert!(!session.has_completed_onboarding());
}

#[tokio::test]
async fn logout_keeps_onboarding_but_delete_clears_it() {
    let mut session = store(MemoryStorage::new());
    session.social_login(SocialProvider::Apple).await.unwrap();
    session.complete_onboarding().await.unwrap();

    session.logout().await.unwrap();
    assert_eq!(session.auth_status(), AuthStatus::Unauthenticated);
    assert!(session.storage().peek(SESSION_KEY).is_none());
    assert_eq!(session.storage().peek(ONBOARDING_KEY), Some("true"));

    session.login("ana@waymeet.app", "").await.unwrap();
    assert!(session.has_completed_onboarding());

    session.delete_account().await.unwrap();
    assert!(session.storage().is_empty());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn signup_creates_fresh_unonboarded_user() {
    let mut storage = MemoryStorage::new();
    storage.set_item(ONBOARDING_KEY, "true").await.unwrap();
    let mut session = store(storage);

    let user = session.signup("nova@mail.com", "pw", "  Nova  ").await.unwrap().clone();
    assert_eq!(user.display_name, "Nova");
    assert!(user.id.chars().all(|c| c.is_ascii_digit()));
    assert!(!user.email_verified);
    assert!(!session.has_completed_onboarding());
    assert_eq!(
        session.storage().peek(SESSION_KEY),
        Some(format!(r#"{{"userId":"{}"}}"#, user.id).as_str())
    );
}

#[tokio::test]
async fn signup_rejects_bad_input() {
    let mut session = store(MemoryStorage::new());
    let err = session.signup("not-an-email", "", " ").await.unwrap_err();
    let StoreError::Validation(validation) = err else {
        panic!("expected validation error");
    };
    assert!(validation.has_field("email"));
    assert!(validation.has_field("display_name"));
    assert_eq!(session.auth_status(), AuthStatus::Unauthenticated);
    assert!(session.storage().is_empty());
}

#[tokio::test]
async fn profile_updates_only_touch_set_fields() {
    let mut session = store(MemoryStorage::new());
    session.update_profile(UserPatch::new().bio("ignored"));
    assert!(session.user().is_none());

    session.login("bruno@waymeet.app", "").await.unwrap();
    let before = session.user().unwrap().clone();
    session.update_profile(UserPatch::new().bio("Corredor").home_city("Maringá"));

    let after = session.user().unwrap();
    assert_eq!(after.bio, "Corredor");
    assert_eq!(after.home_city, "Maringá");
    assert_eq!(after.display_name, before.display_name);
    assert_eq!(after.id, before.id);
}

#[tokio::test]
async fn verification_needs_a_user() {
    let mut session = store(MemoryStorage::new());
    assert!(matches!(
        session.resend_verification_email().await,
        Err(StoreError::NotAuthenticated)
    ));
    session.login("diego@waymeet.app", "").await.unwrap();
    session.resend_verification_email().await.unwrap();
    assert!(session.user().unwrap().email_verified);
    session.reset_password("diego@waymeet.app").await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn login_waits_out_simulated_latency() {
    let mut session = UserStore::new(MemoryStorage::new());
    let started = tokio::time::Instant::now();
    session.login("test@x.com", "").await.unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_millis(1000));
}
