//! In-memory [`StudioStore`] used by handler and allocator tests in place
//! of PostgreSQL.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::{Result, eyre};

use studiobook_core::models::booking::{Booking, BookingDetail};
use studiobook_core::models::client::Client;
use studiobook_core::models::fitness_class::{ClassType, FitnessClass};
use studiobook_core::store::StudioStore;

#[derive(Debug, Default)]
struct Inner {
    clients: Vec<Client>,
    classes: Vec<FitnessClass>,
    bookings: Vec<Booking>,
    next_client_id: i64,
    next_class_id: i64,
    next_booking_id: i64,
}

/// Every operation runs under the single lock, which gives `claim_slot`
/// and `find_or_create_client` the same atomicity the SQL statements have.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| eyre!("store lock poisoned"))
    }

    /// Number of bookings currently recorded. Test-assertion helper.
    pub fn booking_count(&self) -> usize {
        self.lock().map(|inner| inner.bookings.len()).unwrap_or(0)
    }

    /// Number of client records. Test-assertion helper.
    pub fn client_count(&self) -> usize {
        self.lock().map(|inner| inner.clients.len()).unwrap_or(0)
    }
}

#[async_trait]
impl StudioStore for InMemoryStore {
    async fn create_class(
        &self,
        class_name: ClassType,
        instructor: &str,
        start_time: DateTime<Utc>,
        available_slots: i32,
    ) -> Result<FitnessClass> {
        let mut inner = self.lock()?;
        inner.next_class_id += 1;
        let class = FitnessClass {
            id: inner.next_class_id,
            class_name,
            instructor: instructor.to_string(),
            start_time,
            available_slots,
        };
        inner.classes.push(class.clone());
        Ok(class)
    }

    async fn get_class(&self, id: i64) -> Result<Option<FitnessClass>> {
        let inner = self.lock()?;
        Ok(inner.classes.iter().find(|c| c.id == id).cloned())
    }

    async fn list_upcoming_classes(&self, after: DateTime<Utc>) -> Result<Vec<FitnessClass>> {
        let inner = self.lock()?;
        let mut classes: Vec<FitnessClass> = inner
            .classes
            .iter()
            .filter(|c| c.start_time >= after)
            .cloned()
            .collect();
        classes.sort_by_key(|c| c.start_time);
        Ok(classes)
    }

    async fn claim_slot(&self, class_id: i64) -> Result<Option<FitnessClass>> {
        let mut inner = self.lock()?;
        match inner.classes.iter_mut().find(|c| c.id == class_id) {
            Some(class) if class.available_slots > 0 => {
                class.available_slots -= 1;
                Ok(Some(class.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn find_or_create_client(&self, name: &str, email: &str) -> Result<Client> {
        let mut inner = self.lock()?;
        if let Some(existing) = inner.clients.iter().find(|c| c.email == email) {
            return Ok(existing.clone());
        }
        inner.next_client_id += 1;
        let client = Client {
            id: inner.next_client_id,
            name: name.to_string(),
            email: email.to_string(),
        };
        inner.clients.push(client.clone());
        Ok(client)
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let inner = self.lock()?;
        Ok(inner.clients.clone())
    }

    async fn create_booking(&self, class_id: i64, client_id: i64) -> Result<Booking> {
        let mut inner = self.lock()?;
        if !inner.classes.iter().any(|c| c.id == class_id) {
            return Err(eyre!("fitness class {} does not exist", class_id));
        }
        if !inner.clients.iter().any(|c| c.id == client_id) {
            return Err(eyre!("client {} does not exist", client_id));
        }
        inner.next_booking_id += 1;
        let booking = Booking {
            id: inner.next_booking_id,
            fitness_class_id: class_id,
            client_id,
        };
        inner.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn bookings_by_email(&self, email: &str) -> Result<Vec<BookingDetail>> {
        let inner = self.lock()?;
        let Some(client) = inner.clients.iter().find(|c| c.email == email) else {
            return Ok(Vec::new());
        };

        let mut details: Vec<BookingDetail> = inner
            .bookings
            .iter()
            .filter(|b| b.client_id == client.id)
            .filter_map(|b| {
                inner
                    .classes
                    .iter()
                    .find(|c| c.id == b.fitness_class_id)
                    .map(|class| BookingDetail {
                        id: b.id,
                        fitness_class: class.clone(),
                        client_email: client.email.clone(),
                    })
            })
            .collect();
        details.sort_by_key(|d| std::cmp::Reverse(d.id));
        Ok(details)
    }
}
