use crate::models::DbFitnessClass;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_class(
    pool: &Pool<Postgres>,
    class_name: &str,
    instructor: &str,
    start_time: DateTime<Utc>,
    available_slots: i32,
) -> Result<DbFitnessClass> {
    tracing::debug!(
        "Creating fitness class: name={}, instructor={}, start_time={}, slots={}",
        class_name,
        instructor,
        start_time,
        available_slots
    );

    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        INSERT INTO fitness_classes (class_name, instructor, start_time, available_slots)
        VALUES ($1, $2, $3, $4)
        RETURNING id, class_name, instructor, start_time, available_slots
        "#,
    )
    .bind(class_name)
    .bind(instructor)
    .bind(start_time)
    .bind(available_slots)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Fitness class created: id={}", class.id);
    Ok(class)
}

pub async fn get_class_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbFitnessClass>> {
    tracing::debug!("Getting fitness class by id: {}", id);

    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        SELECT id, class_name, instructor, start_time, available_slots
        FROM fitness_classes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(class)
}

pub async fn list_upcoming_classes(
    pool: &Pool<Postgres>,
    after: DateTime<Utc>,
) -> Result<Vec<DbFitnessClass>> {
    tracing::debug!("Listing classes starting at or after {}", after);

    let classes = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        SELECT id, class_name, instructor, start_time, available_slots
        FROM fitness_classes
        WHERE start_time >= $1
        ORDER BY start_time
        "#,
    )
    .bind(after)
    .fetch_all(pool)
    .await?;

    Ok(classes)
}

/// Consumes one slot with a conditional decrement. The WHERE guard makes
/// the check and the write a single atomic statement, so concurrent claims
/// against the last slot cannot drive `available_slots` negative: all but
/// one of them match zero rows and get `None`.
pub async fn claim_slot(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbFitnessClass>> {
    let class = sqlx::query_as::<_, DbFitnessClass>(
        r#"
        UPDATE fitness_classes
        SET available_slots = available_slots - 1
        WHERE id = $1 AND available_slots > 0
        RETURNING id, class_name, instructor, start_time, available_slots
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match &class {
        Some(c) => tracing::debug!("Claimed slot for class {}: {} remaining", id, c.available_slots),
        None => tracing::debug!("No slot claimed for class {}", id),
    }

    Ok(class)
}
