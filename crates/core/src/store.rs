use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use crate::models::booking::{Booking, BookingDetail};
use crate::models::client::Client;
use crate::models::fitness_class::{ClassType, FitnessClass};

/// Persistence capabilities required by the allocator and the query façade.
///
/// Implemented for PostgreSQL by `studiobook-db::store::PgStore` and in
/// memory by `studiobook-db::mock::store::InMemoryStore`. Implementations
/// must uphold two invariants:
///
/// - [`claim_slot`](StudioStore::claim_slot) is atomic: under concurrent
///   calls against a class with one remaining slot, exactly one call
///   observes `Some`.
/// - [`find_or_create_client`](StudioStore::find_or_create_client) is
///   idempotent by email, including under concurrency; an existing record
///   keeps its stored name.
#[async_trait]
pub trait StudioStore: Send + Sync {
    async fn create_class(
        &self,
        class_name: ClassType,
        instructor: &str,
        start_time: DateTime<Utc>,
        available_slots: i32,
    ) -> Result<FitnessClass>;

    async fn get_class(&self, id: i64) -> Result<Option<FitnessClass>>;

    /// Classes with `start_time >= after`, ascending by start time.
    async fn list_upcoming_classes(&self, after: DateTime<Utc>) -> Result<Vec<FitnessClass>>;

    /// Conditionally consumes one slot: decrements `available_slots` only
    /// where it is still positive, returning the updated class, or `None`
    /// when the class is full (or does not exist).
    async fn claim_slot(&self, class_id: i64) -> Result<Option<FitnessClass>>;

    async fn find_or_create_client(&self, name: &str, email: &str) -> Result<Client>;

    async fn list_clients(&self) -> Result<Vec<Client>>;

    async fn create_booking(&self, class_id: i64, client_id: i64) -> Result<Booking>;

    /// Bookings for the client with the given email, newest first.
    async fn bookings_by_email(&self, email: &str) -> Result<Vec<BookingDetail>>;
}
