use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/book", post(handlers::bookings::book_class))
        .route("/api/bookings", get(handlers::bookings::list_bookings))
}
