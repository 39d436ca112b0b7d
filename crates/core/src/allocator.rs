//! The booking allocator: find-or-create the client, consume one slot of
//! the class's capacity, and record the booking.

use tracing::{debug, info, warn};

use crate::errors::{StudioError, StudioResult};
use crate::models::booking::{Booking, CreateBookingRequest};
use crate::store::StudioStore;
use crate::validate;

/// Creates a booking for the given class and client identity.
///
/// Validation and the read-only capacity check run before any mutating
/// store call. The capacity check is a fast fail only; the authoritative
/// guard is [`StudioStore::claim_slot`], whose conditional decrement cannot
/// race another allocation into negative slots.
///
/// On success exactly one capacity unit has been consumed, at most one
/// client row exists for the email, and exactly one new booking references
/// the class and that client.
pub async fn allocate(
    store: &dyn StudioStore,
    request: &CreateBookingRequest,
) -> StudioResult<Booking> {
    let class_id = validate::require_class_id(request.class_id).inspect_err(|_| {
        warn!("Validation failed: class_id is missing in the request.");
    })?;
    let client_name = validate::require_non_blank(request.client_name.as_deref(), "client_name")?;
    let client_email =
        validate::require_non_blank(request.client_email.as_deref(), "client_email")?;
    validate::validate_email(client_email)?;

    let class = store
        .get_class(class_id)
        .await
        .map_err(StudioError::Database)?
        .ok_or_else(|| {
            warn!(
                "Validation failed: Fitness class with ID {} does not exist.",
                class_id
            );
            StudioError::NotFound("Fitness class does not exist.".to_string())
        })?;
    debug!(
        "Fetched fitness class ID {}: {} with {} slots remaining.",
        class.id, class.class_name, class.available_slots
    );

    if class.available_slots <= 0 {
        info!(
            "No slots available for class ID {} ({}).",
            class.id, class.class_name
        );
        return Err(StudioError::Capacity("No slots available.".to_string()));
    }

    let client = store
        .find_or_create_client(client_name, client_email)
        .await
        .map_err(StudioError::Database)?;
    debug!("Resolved client: {} ({})", client.name, client.email);

    // A concurrent allocation may have taken the last slot since the check
    // above; the conditional decrement settles it.
    let class = store
        .claim_slot(class_id)
        .await
        .map_err(StudioError::Database)?
        .ok_or_else(|| {
            info!(
                "No slots available for class ID {} (lost claim race).",
                class_id
            );
            StudioError::Capacity("No slots available.".to_string())
        })?;
    info!(
        "Decremented slot for class '{}'. Remaining slots: {}",
        class.class_name, class.available_slots
    );

    let booking = store
        .create_booking(class.id, client.id)
        .await
        .map_err(StudioError::Database)?;
    info!(
        "Booking created: Client '{}' booked '{}' on {}",
        client.name, class.class_name, class.start_time
    );

    Ok(booking)
}
