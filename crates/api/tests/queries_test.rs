mod test_utils;

use chrono::{Duration, Utc};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use studiobook_core::queries;
use studiobook_core::store::StudioStore;
use studiobook_db::mock::store::InMemoryStore;
use studiobook_core::models::fitness_class::ClassType;

use test_utils::seed_class;

#[tokio::test]
async fn test_upcoming_classes_excludes_past_and_sorts_ascending() {
    let store = InMemoryStore::new();
    let now = Utc::now();

    seed_class(&store, ClassType::Yoga, now - Duration::hours(2), 5).await;
    let later = seed_class(&store, ClassType::Hiit, now + Duration::days(3), 5).await;
    let sooner = seed_class(&store, ClassType::Zumba, now + Duration::days(1), 5).await;

    let classes = queries::upcoming_classes(&store, now, Tz::UTC).await.unwrap();

    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].id, sooner.id);
    assert_eq!(classes[1].id, later.id);
}

#[tokio::test]
async fn test_upcoming_classes_localizes_start_time() {
    let store = InMemoryStore::new();
    let start = Utc::now() + Duration::days(1);
    seed_class(&store, ClassType::Yoga, start, 5).await;

    let classes = queries::upcoming_classes(&store, Utc::now(), chrono_tz::Asia::Kolkata)
        .await
        .unwrap();

    assert_eq!(classes.len(), 1);
    assert!(classes[0].start_time_local.ends_with("IST"));
}

#[tokio::test]
async fn test_bookings_without_email_is_empty_not_an_error() {
    let store = InMemoryStore::new();

    let bookings = queries::bookings_by_email(&store, None, Tz::UTC).await.unwrap();
    assert!(bookings.is_empty());

    let bookings = queries::bookings_by_email(&store, Some("  "), Tz::UTC)
        .await
        .unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_bookings_by_email_returns_newest_first() {
    let store = InMemoryStore::new();
    let class = seed_class(&store, ClassType::Zumba, Utc::now() + Duration::days(2), 5).await;

    let client = store
        .find_or_create_client("Test Client", "test@example.com")
        .await
        .unwrap();
    let first = store.create_booking(class.id, client.id).await.unwrap();
    let second = store.create_booking(class.id, client.id).await.unwrap();

    // A booking for someone else must not leak into the listing
    let other = store
        .find_or_create_client("Other", "other@example.com")
        .await
        .unwrap();
    store.create_booking(class.id, other.id).await.unwrap();

    let bookings = queries::bookings_by_email(&store, Some("test@example.com"), Tz::UTC)
        .await
        .unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, second.id);
    assert_eq!(bookings[1].id, first.id);
    assert!(bookings.iter().all(|b| b.client_email == "test@example.com"));
}

#[tokio::test]
async fn test_list_clients_returns_all() {
    let store = InMemoryStore::new();
    for i in 0..3 {
        store
            .find_or_create_client(&format!("Client {i}"), &format!("client{i}@example.com"))
            .await
            .unwrap();
    }

    let clients = queries::list_clients(&store).await.unwrap();
    assert_eq!(clients.len(), 3);
}
