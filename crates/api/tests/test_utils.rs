use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use studiobook_api::ApiState;
use studiobook_core::models::booking::CreateBookingRequest;
use studiobook_core::models::fitness_class::{ClassType, FitnessClass};
use studiobook_core::store::StudioStore;
use studiobook_db::mock::store::InMemoryStore;

/// State over the in-memory store, UTC default timezone.
#[allow(dead_code)]
pub fn build_state(store: Arc<InMemoryStore>) -> Arc<ApiState> {
    Arc::new(ApiState {
        store,
        default_timezone: Tz::UTC,
    })
}

#[allow(dead_code)]
pub fn tomorrow() -> DateTime<Utc> {
    Utc::now() + Duration::days(1)
}

#[allow(dead_code)]
pub async fn seed_class(
    store: &InMemoryStore,
    class_type: ClassType,
    start_time: DateTime<Utc>,
    available_slots: i32,
) -> FitnessClass {
    store
        .create_class(class_type, "Jordan Lee", start_time, available_slots)
        .await
        .expect("failed to seed class")
}

#[allow(dead_code)]
pub fn booking_request(class_id: Option<i64>, name: &str, email: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        class_id,
        client_name: Some(name.to_string()),
        client_email: Some(email.to_string()),
    }
}
