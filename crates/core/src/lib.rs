//! # Studiobook Core
//!
//! Domain types and business rules for the fitness-studio booking service.
//! This crate is storage-agnostic: persistence is reached through the
//! [`store::StudioStore`] trait, which the `studiobook-db` crate implements
//! for PostgreSQL and its mock module implements in memory for tests.

/// Booking allocation: validated, capacity-decrementing booking creation
pub mod allocator;
/// Domain error taxonomy
pub mod errors;
/// Domain entities and request/response types
pub mod models;
/// Read-only listing operations
pub mod queries;
/// Persistence interface consumed by the allocator and queries
pub mod store;
/// Field-level validation functions
pub mod validate;
