pub mod bookings;
pub mod classes;
pub mod clients;
pub mod health;
