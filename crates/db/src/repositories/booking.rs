use crate::models::{DbBooking, DbBookingDetail};
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_booking(
    pool: &Pool<Postgres>,
    fitness_class_id: i64,
    client_id: i64,
) -> Result<DbBooking> {
    tracing::debug!(
        "Creating booking: class_id={}, client_id={}",
        fitness_class_id,
        client_id
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (fitness_class_id, client_id)
        VALUES ($1, $2)
        RETURNING id, fitness_class_id, client_id
        "#,
    )
    .bind(fitness_class_id)
    .bind(client_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Booking created: id={}", booking.id);
    Ok(booking)
}

pub async fn bookings_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Vec<DbBookingDetail>> {
    tracing::debug!("Listing bookings for client email: {}", email);

    let bookings = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT b.id,
               c.id AS fitness_class_id,
               c.class_name,
               c.instructor,
               c.start_time,
               c.available_slots,
               cl.email AS client_email
        FROM bookings b
        JOIN fitness_classes c ON c.id = b.fitness_class_id
        JOIN clients cl ON cl.id = b.client_id
        WHERE cl.email = $1
        ORDER BY b.id DESC
        "#,
    )
    .bind(email)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
