use axum::{Json, extract::State};
use std::sync::Arc;

use studiobook_core::{models::client::ClientResponse, queries};

use crate::{ApiState, middleware::error_handling::AppError};

/// `GET /api/clients` — all registered clients as `{name, email}`.
#[axum::debug_handler]
pub async fn list_clients(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let clients = queries::list_clients(state.store.as_ref()).await?;
    Ok(Json(clients))
}
