use chrono::NaiveDateTime;

use crate::models::{Booking, Slot};

#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("slot overlaps booking {existing_id}")]
    Conflict { existing_id: i64 },
}

/// Scans `existing` for a booking whose slot overlaps the candidate slot.
///
/// `exclude_id` skips one record, so an update never conflicts with the booking
/// being updated. Stops at the first overlap.
pub fn check_no_conflict(
    start: &NaiveDateTime,
    duration_minutes: i32,
    existing: &[Booking],
    exclude_id: Option<i64>,
) -> Result<(), SchedulingError> {
    let candidate = Slot::new(*start, duration_minutes);

    match existing
        .iter()
        .filter(|b| Some(b.id) != exclude_id)
        .find(|b| b.slot().overlaps(&candidate))
    {
        Some(conflict) => Err(SchedulingError::Conflict {
            existing_id: conflict.id,
        }),
        None => Ok(()),
    }
}
