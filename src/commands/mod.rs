pub mod auth;
pub mod book;
pub mod bookings;
pub mod profile;
pub mod venue;
pub mod venue_bookings;
pub mod venues;
