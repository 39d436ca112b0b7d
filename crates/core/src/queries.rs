//! Read-only listing operations. Pure projections over the store: no
//! side effects beyond logging.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::errors::{StudioError, StudioResult};
use crate::models::booking::BookingResponse;
use crate::models::client::ClientResponse;
use crate::models::fitness_class::ClassSummary;
use crate::store::StudioStore;

/// Resolves an optional caller-supplied IANA timezone identifier.
/// Unrecognized or absent identifiers fall back to the configured default
/// rather than failing the request.
pub fn resolve_timezone(param: Option<&str>, default: Tz) -> Tz {
    match param {
        None => default,
        Some(name) => name.parse().unwrap_or_else(|_| {
            warn!(
                "Unrecognized timezone identifier '{}', falling back to {}",
                name, default
            );
            default
        }),
    }
}

/// Classes starting at or after `now`, ascending, with start times rendered
/// in `tz`.
pub async fn upcoming_classes(
    store: &dyn StudioStore,
    now: DateTime<Utc>,
    tz: Tz,
) -> StudioResult<Vec<ClassSummary>> {
    info!("Fetching upcoming fitness classes starting after {}", now);
    let classes = store
        .list_upcoming_classes(now)
        .await
        .map_err(StudioError::Database)?;
    Ok(classes
        .into_iter()
        .map(|class| ClassSummary::from_class(class, tz))
        .collect())
}

/// Bookings for the given client email, newest first. A missing or blank
/// email yields an empty list, not an error.
pub async fn bookings_by_email(
    store: &dyn StudioStore,
    email: Option<&str>,
    tz: Tz,
) -> StudioResult<Vec<BookingResponse>> {
    let Some(email) = email.filter(|e| !e.trim().is_empty()) else {
        warn!("No email query parameter provided in request.");
        return Ok(Vec::new());
    };

    info!("Fetching bookings for client email: {}", email);
    let bookings = store
        .bookings_by_email(email)
        .await
        .map_err(StudioError::Database)?;
    Ok(bookings
        .into_iter()
        .map(|detail| BookingResponse {
            id: detail.id,
            fitness_class: ClassSummary::from_class(detail.fitness_class, tz),
            client_email: detail.client_email,
        })
        .collect())
}

/// All registered clients.
pub async fn list_clients(store: &dyn StudioStore) -> StudioResult<Vec<ClientResponse>> {
    info!("Fetching list of all registered clients.");
    let clients = store.list_clients().await.map_err(StudioError::Database)?;
    Ok(clients.into_iter().map(ClientResponse::from).collect())
}
