use crate::models::DbClient;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn find_or_create_client(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
) -> Result<DbClient> {
    tracing::debug!("Resolving client by email: {}", email);

    // The DO UPDATE arm is a no-op on the row so that RETURNING yields the
    // existing record with its stored name untouched. The unique constraint
    // on email arbitrates concurrent first-time bookings.
    let client = sqlx::query_as::<_, DbClient>(
        r#"
        INSERT INTO clients (name, email)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email
        RETURNING id, name, email
        "#,
    )
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Client resolved: id={}, email={}", client.id, client.email);
    Ok(client)
}

pub async fn list_clients(pool: &Pool<Postgres>) -> Result<Vec<DbClient>> {
    tracing::debug!("Listing all clients");

    let clients = sqlx::query_as::<_, DbClient>(
        r#"
        SELECT id, name, email
        FROM clients
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(clients)
}
