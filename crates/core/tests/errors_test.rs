use std::error::Error;
use studiobook_core::errors::{StudioError, StudioResult};

#[test]
fn test_studio_error_display() {
    let validation = StudioError::Validation("class_id is required.".to_string());
    let not_found = StudioError::NotFound("Fitness class does not exist.".to_string());
    let capacity = StudioError::Capacity("No slots available.".to_string());
    let database = StudioError::Database(eyre::eyre!("Database connection failed"));
    let internal = StudioError::Internal(Box::new(std::io::Error::other("Internal error")));

    // The caller-facing variants surface the bare message
    assert_eq!(validation.to_string(), "class_id is required.");
    assert_eq!(not_found.to_string(), "Fitness class does not exist.");
    assert_eq!(capacity.to_string(), "No slots available.");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::other("IO error");
    let studio_error = StudioError::Internal(Box::new(io_error));

    assert!(studio_error.source().is_some());
}

#[test]
fn test_studio_result() {
    let result: StudioResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: StudioResult<i32> = Err(StudioError::Capacity("No slots available.".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("connection reset");
    let studio_error: StudioError = report.into();

    assert!(matches!(studio_error, StudioError::Database(_)));
}
