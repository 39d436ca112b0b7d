pub mod booking;
pub mod client;
pub mod fitness_class;
