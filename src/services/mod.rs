pub mod bookings;
pub mod scheduling;
