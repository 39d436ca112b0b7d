use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

use studiobook_core::{
    errors::StudioError,
    models::fitness_class::{ClassSummary, CreateClassRequest, CreateClassResponse},
    queries, validate,
};

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
pub struct ClassListParams {
    pub timezone: Option<String>,
}

/// `GET /api/classes` — upcoming classes, ascending by start time, with
/// start times rendered in the requested (or default) timezone.
#[axum::debug_handler]
pub async fn list_upcoming_classes(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ClassListParams>,
) -> Result<Json<Vec<ClassSummary>>, AppError> {
    let tz = queries::resolve_timezone(params.timezone.as_deref(), state.default_timezone);
    let classes = queries::upcoming_classes(state.store.as_ref(), Utc::now(), tz).await?;
    Ok(Json(classes))
}

/// `POST /api/classes` — administrative class creation.
#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<(StatusCode, Json<CreateClassResponse>), AppError> {
    let class_name = validate::parse_class_type(payload.class_name.as_deref())?;
    let instructor = validate::require_non_blank(payload.instructor.as_deref(), "instructor")?;
    let available_slots = validate::require_available_slots(payload.available_slots)?;
    let start_time = payload
        .start_time
        .ok_or_else(|| StudioError::Validation("start_time is required.".to_string()))?;

    let class = state
        .store
        .create_class(class_name, instructor, start_time, available_slots)
        .await
        .map_err(StudioError::Database)?;

    tracing::info!(
        "New fitness class created: {} by instructor {} on {}",
        class.class_name,
        class.instructor,
        class.start_time
    );

    Ok((StatusCode::CREATED, Json(CreateClassResponse::from(class))))
}
