use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create clients table; email is the natural key, so the unique
    // constraint is what arbitrates concurrent find-or-create calls
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(254) NOT NULL UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create fitness_classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fitness_classes (
            id BIGSERIAL PRIMARY KEY,
            class_name VARCHAR(20) NOT NULL
                CHECK (class_name IN ('Yoga', 'Zumba', 'HIIT')),
            instructor VARCHAR(100) NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            available_slots INTEGER NOT NULL
                CHECK (available_slots >= 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table; deleting either parent removes the booking
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id BIGSERIAL PRIMARY KEY,
            fitness_class_id BIGINT NOT NULL REFERENCES fitness_classes(id) ON DELETE CASCADE,
            client_id BIGINT NOT NULL REFERENCES clients(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_fitness_classes_start_time ON fitness_classes(start_time);
        CREATE INDEX IF NOT EXISTS idx_bookings_client_id ON bookings(client_id);
        CREATE INDEX IF NOT EXISTS idx_bookings_fitness_class_id ON bookings(fitness_class_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
