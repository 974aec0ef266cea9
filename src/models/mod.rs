pub mod booking;
pub mod time;

pub use booking::{Booking, BookingPatch, BookingPublic, NewBooking, Slot, DEFAULT_DURATION_MINUTES};
pub use time::{normalize_booking_time, TimeParseError};
