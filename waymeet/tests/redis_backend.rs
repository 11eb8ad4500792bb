//! Redis-backed session storage. Needs a server at `REDIS_URL`
//! (default `redis://127.0.0.1:6379`); run with `--ignored`.

use waymeet::id::generate_entity_id;
use waymeet::keys::{ONBOARDING_KEY, SESSION_KEY};
use waymeet::storage::{KeyValueStorage, RedisStorage};
use waymeet::{Latency, UserStore};

async fn connect() -> RedisStorage {
    let redis_url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let prefix = format!("waymeet_test_{}", generate_entity_id());
    RedisStorage::connect(&redis_url, prefix).await.expect("Failed to connect to Redis")
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn items_round_trip_under_prefix() {
    let mut storage = connect().await;
    assert_eq!(storage.get_item(SESSION_KEY).await.unwrap(), None);

    storage.set_item(ONBOARDING_KEY, "true").await.unwrap();
    assert_eq!(storage.get_item(ONBOARDING_KEY).await.unwrap().as_deref(), Some("true"));

    storage.remove_item(ONBOARDING_KEY).await.unwrap();
    storage.remove_item(ONBOARDING_KEY).await.unwrap();
    assert_eq!(storage.get_item(ONBOARDING_KEY).await.unwrap(), None);

    storage.clear().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn session_is_shared_between_connections() {
    let storage = connect().await;
    let mut writer = UserStore::with_latency(storage.clone(), Latency::none());
    writer.login("diego@waymeet.app", "").await.unwrap();
    writer.complete_onboarding().await.unwrap();

    let mut reader = UserStore::with_latency(storage, Latency::none());
    reader.check_session().await;
    assert!(reader.is_authenticated());
    assert!(reader.has_completed_onboarding());
    assert_eq!(reader.user().unwrap().id, "4");

    let mut cleanup = reader.into_storage();
    assert_eq!(cleanup.clear().await.unwrap(), 2);
}
