use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

use eyre::{Result, eyre};
use studiobook_core::models::booking::{Booking, BookingDetail};
use studiobook_core::models::client::Client;
use studiobook_core::models::fitness_class::{ClassType, FitnessClass};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClient {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<DbClient> for Client {
    fn from(row: DbClient) -> Self {
        Client {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFitnessClass {
    pub id: i64,
    pub class_name: String,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub available_slots: i32,
}

impl DbFitnessClass {
    /// Converts a row into the domain type. The `class_name` column is
    /// constrained to the offered types by a CHECK constraint, so a parse
    /// failure here means the schema and the domain enum have diverged.
    pub fn into_domain(self) -> Result<FitnessClass> {
        let class_name = ClassType::from_str(&self.class_name)
            .map_err(|_| eyre!("unknown class_name '{}' in row {}", self.class_name, self.id))?;
        Ok(FitnessClass {
            id: self.id,
            class_name,
            instructor: self.instructor,
            start_time: self.start_time,
            available_slots: self.available_slots,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: i64,
    pub fitness_class_id: i64,
    pub client_id: i64,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: row.id,
            fitness_class_id: row.fitness_class_id,
            client_id: row.client_id,
        }
    }
}

/// Booking row joined with its class and the client's email.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingDetail {
    pub id: i64,
    pub fitness_class_id: i64,
    pub class_name: String,
    pub instructor: String,
    pub start_time: DateTime<Utc>,
    pub available_slots: i32,
    pub client_email: String,
}

impl DbBookingDetail {
    pub fn into_domain(self) -> Result<BookingDetail> {
        let class_name = ClassType::from_str(&self.class_name)
            .map_err(|_| eyre!("unknown class_name '{}' in row {}", self.class_name, self.id))?;
        Ok(BookingDetail {
            id: self.id,
            fitness_class: FitnessClass {
                id: self.fitness_class_id,
                class_name,
                instructor: self.instructor,
                start_time: self.start_time,
                available_slots: self.available_slots,
            },
            client_email: self.client_email,
        })
    }
}
