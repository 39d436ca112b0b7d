mod test_utils;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use studiobook_core::allocator;
use studiobook_core::errors::StudioError;
use studiobook_core::models::booking::CreateBookingRequest;
use studiobook_core::models::fitness_class::ClassType;
use studiobook_core::store::StudioStore;
use studiobook_db::mock::store::InMemoryStore;

use test_utils::{booking_request, seed_class, tomorrow};

#[tokio::test]
async fn test_successful_booking_consumes_one_slot() {
    let store = InMemoryStore::new();
    let class = seed_class(&store, ClassType::Yoga, tomorrow(), 5).await;

    let request = booking_request(Some(class.id), "Alice", "alice@example.com");
    let booking = allocator::allocate(&store, &request).await.unwrap();

    assert_eq!(booking.fitness_class_id, class.id);
    assert_eq!(store.booking_count(), 1);

    let class = store.get_class(class.id).await.unwrap().unwrap();
    assert_eq!(class.available_slots, 4);
}

#[tokio::test]
async fn test_booking_with_no_slots_fails_without_mutation() {
    let store = InMemoryStore::new();
    let class = seed_class(&store, ClassType::Zumba, tomorrow(), 0).await;

    let request = booking_request(Some(class.id), "Bob", "bob@example.com");
    let err = allocator::allocate(&store, &request).await.unwrap_err();

    assert!(matches!(err, StudioError::Capacity(_)));
    assert_eq!(err.to_string(), "No slots available.");
    assert_eq!(store.booking_count(), 0);

    let class = store.get_class(class.id).await.unwrap().unwrap();
    assert_eq!(class.available_slots, 0);
}

#[tokio::test]
async fn test_missing_class_id_is_rejected() {
    let store = InMemoryStore::new();

    let request = booking_request(None, "Alice", "alice@example.com");
    let err = allocator::allocate(&store, &request).await.unwrap_err();

    assert!(matches!(err, StudioError::Validation(_)));
    assert_eq!(err.to_string(), "class_id is required.");
    assert_eq!(store.client_count(), 0);
}

#[tokio::test]
async fn test_unknown_class_is_not_found() {
    let store = InMemoryStore::new();

    let request = booking_request(Some(999), "Alice", "alice@example.com");
    let err = allocator::allocate(&store, &request).await.unwrap_err();

    assert!(matches!(err, StudioError::NotFound(_)));
    assert_eq!(err.to_string(), "Fitness class does not exist.");
}

#[tokio::test]
async fn test_blank_name_and_bad_email_are_rejected_before_any_write() {
    let store = InMemoryStore::new();
    let class = seed_class(&store, ClassType::Yoga, tomorrow(), 5).await;

    let request = CreateBookingRequest {
        class_id: Some(class.id),
        client_name: Some("   ".to_string()),
        client_email: Some("alice@example.com".to_string()),
    };
    let err = allocator::allocate(&store, &request).await.unwrap_err();
    assert_eq!(err.to_string(), "client_name cannot be blank.");

    let request = booking_request(Some(class.id), "Alice", "not-an-email");
    let err = allocator::allocate(&store, &request).await.unwrap_err();
    assert_eq!(err.to_string(), "client_email must be a valid email address.");

    assert_eq!(store.client_count(), 0);
    assert_eq!(store.booking_count(), 0);
    let class = store.get_class(class.id).await.unwrap().unwrap();
    assert_eq!(class.available_slots, 5);
}

#[tokio::test]
async fn test_repeat_email_reuses_client_and_keeps_name() {
    let store = InMemoryStore::new();
    let class = seed_class(&store, ClassType::Hiit, tomorrow(), 5).await;

    let first = booking_request(Some(class.id), "Alice", "alice@example.com");
    allocator::allocate(&store, &first).await.unwrap();

    // Same email, different display name: identity is by email only
    let second = booking_request(Some(class.id), "Alicia", "alice@example.com");
    allocator::allocate(&store, &second).await.unwrap();

    assert_eq!(store.client_count(), 1);
    assert_eq!(store.booking_count(), 2);

    let clients = store.list_clients().await.unwrap();
    assert_eq!(clients[0].name, "Alice");
}

#[tokio::test]
async fn test_concurrent_allocation_of_last_slot() {
    let store = Arc::new(InMemoryStore::new());
    let class = seed_class(&store, ClassType::Hiit, tomorrow(), 1).await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = Arc::clone(&store);
        let class_id = class.id;
        handles.push(tokio::spawn(async move {
            let request = CreateBookingRequest {
                class_id: Some(class_id),
                client_name: Some(format!("Client {i}")),
                client_email: Some(format!("client{i}@example.com")),
            };
            allocator::allocate(store.as_ref(), &request).await
        }));
    }

    let mut successes = 0;
    let mut capacity_errors = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(StudioError::Capacity(_)) => capacity_errors += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(capacity_errors, 7);
    assert_eq!(store.booking_count(), 1);

    // Slots never go negative, even when every task raced for the last one
    let class = store.get_class(class.id).await.unwrap().unwrap();
    assert_eq!(class.available_slots, 0);
}
