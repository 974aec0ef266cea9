use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::time;

pub const DEFAULT_DURATION_MINUTES: i32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub phone_number: String,
    pub booking_time: NaiveDateTime,
    pub duration_minutes: i32,
}

impl Booking {
    pub fn slot(&self) -> Slot {
        Slot::new(self.booking_time, self.duration_minutes)
    }

    pub fn to_public(&self) -> BookingPublic {
        BookingPublic {
            id: self.id,
            customer_name: self.customer_name.clone(),
            phone_number: self.phone_number.clone(),
            booking_time: self.booking_time.format(time::PUBLIC_FORMAT).to_string(),
            duration_minutes: self.duration_minutes,
        }
    }
}

/// Half-open interval `[start, end)` occupied by a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Slot {
    pub fn new(start: NaiveDateTime, duration_minutes: i32) -> Self {
        let end = start
            .checked_add_signed(Duration::minutes(duration_minutes as i64))
            .unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    /// Touching slots (one ends exactly when the other starts) do not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingPublic {
    pub id: i64,
    pub customer_name: String,
    pub phone_number: String,
    pub booking_time: String,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub customer_name: String,
    pub phone_number: String,
    #[serde(deserialize_with = "time::deserialize")]
    pub booking_time: NaiveDateTime,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

/// Partial update. `None` means "keep the stored value".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingPatch {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "time::deserialize_option")]
    pub booking_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
}

impl BookingPatch {
    /// Returns a copy of `current` with every supplied field replaced.
    pub fn merged_onto(&self, current: &Booking) -> Booking {
        Booking {
            id: current.id,
            customer_name: self
                .customer_name
                .clone()
                .unwrap_or_else(|| current.customer_name.clone()),
            phone_number: self
                .phone_number
                .clone()
                .unwrap_or_else(|| current.phone_number.clone()),
            booking_time: self.booking_time.unwrap_or(current.booking_time),
            duration_minutes: self.duration_minutes.unwrap_or(current.duration_minutes),
        }
    }
}
