use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/classes",
        get(handlers::classes::list_upcoming_classes).post(handlers::classes::create_class),
    )
}
