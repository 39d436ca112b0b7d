use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eyre::Result;

use studiobook_core::models::booking::{Booking, BookingDetail};
use studiobook_core::models::client::Client;
use studiobook_core::models::fitness_class::{ClassType, FitnessClass};
use studiobook_core::store::StudioStore;

use crate::{DbPool, repositories};

/// PostgreSQL-backed [`StudioStore`], delegating to the repository
/// functions in this crate.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudioStore for PgStore {
    async fn create_class(
        &self,
        class_name: ClassType,
        instructor: &str,
        start_time: DateTime<Utc>,
        available_slots: i32,
    ) -> Result<FitnessClass> {
        let row = repositories::fitness_class::create_class(
            &self.pool,
            class_name.as_str(),
            instructor,
            start_time,
            available_slots,
        )
        .await?;
        row.into_domain()
    }

    async fn get_class(&self, id: i64) -> Result<Option<FitnessClass>> {
        match repositories::fitness_class::get_class_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(row.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn list_upcoming_classes(&self, after: DateTime<Utc>) -> Result<Vec<FitnessClass>> {
        let rows = repositories::fitness_class::list_upcoming_classes(&self.pool, after).await?;
        rows.into_iter().map(|row| row.into_domain()).collect()
    }

    async fn claim_slot(&self, class_id: i64) -> Result<Option<FitnessClass>> {
        match repositories::fitness_class::claim_slot(&self.pool, class_id).await? {
            Some(row) => Ok(Some(row.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn find_or_create_client(&self, name: &str, email: &str) -> Result<Client> {
        let row = repositories::client::find_or_create_client(&self.pool, name, email).await?;
        Ok(row.into())
    }

    async fn list_clients(&self) -> Result<Vec<Client>> {
        let rows = repositories::client::list_clients(&self.pool).await?;
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn create_booking(&self, class_id: i64, client_id: i64) -> Result<Booking> {
        let row = repositories::booking::create_booking(&self.pool, class_id, client_id).await?;
        Ok(row.into())
    }

    async fn bookings_by_email(&self, email: &str) -> Result<Vec<BookingDetail>> {
        let rows = repositories::booking::bookings_by_email(&self.pool, email).await?;
        rows.into_iter().map(|row| row.into_domain()).collect()
    }
}
