use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::sync::Arc;

use studiobook_core::{
    allocator,
    models::booking::{Booking, BookingResponse, CreateBookingRequest},
    queries,
};

use crate::{ApiState, middleware::error_handling::AppError};

/// `POST /api/book` — allocate one slot of the class to the client
/// identified by email, creating the client on first contact.
#[axum::debug_handler]
pub async fn book_class(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = allocator::allocate(state.store.as_ref(), &payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub email: Option<String>,
    pub timezone: Option<String>,
}

/// `GET /api/bookings?email=` — bookings for a client email, newest first.
/// No email yields an empty list rather than an error.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<BookingListParams>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let tz = queries::resolve_timezone(params.timezone.as_deref(), state.default_timezone);
    let bookings =
        queries::bookings_by_email(state.store.as_ref(), params.email.as_deref(), tz).await?;
    Ok(Json(bookings))
}
