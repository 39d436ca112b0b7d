pub mod bookings;
pub mod classes;
pub mod clients;
