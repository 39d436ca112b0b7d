use serde::{Deserialize, Serialize};

use crate::models::fitness_class::{ClassSummary, FitnessClass};

/// A confirmed reservation linking one client to one fitness class.
/// Each booking consumed exactly one capacity unit when it was created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub fitness_class_id: i64,
    pub client_id: i64,
}

/// A booking joined with its class and the booking client's email,
/// as returned by the read path.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    pub id: i64,
    pub fitness_class: FitnessClass,
    pub client_email: String,
}

/// Payload for the booking endpoint.
///
/// Fields are optional at the serde level; the allocator validates presence
/// and reports `class_id is required.` style messages itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub class_id: Option<i64>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub fitness_class: ClassSummary,
    pub client_email: String,
}
