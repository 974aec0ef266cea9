//! Booking lifecycle: every write re-checks the whole timeline for overlaps inside
//! a single `BEGIN IMMEDIATE` transaction, so a rejected write leaves nothing behind.

use rusqlite::{Connection, TransactionBehavior};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::{Booking, BookingPatch, NewBooking};
use crate::services::scheduling::{check_no_conflict, SchedulingError};

pub fn create_booking(conn: &mut Connection, new: NewBooking) -> Result<Booking, AppError> {
    validate_customer_name(&new.customer_name)?;
    validate_duration(new.duration_minutes)?;

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let existing = queries::list_bookings(&tx)?;
    check_no_conflict(&new.booking_time, new.duration_minutes, &existing, None)
        .map_err(log_conflict)?;

    let mut booking = Booking {
        id: 0,
        customer_name: new.customer_name,
        phone_number: new.phone_number,
        booking_time: new.booking_time,
        duration_minutes: new.duration_minutes,
    };
    booking.id = queries::insert_booking(&tx, &booking)?;
    tx.commit()?;

    tracing::info!(booking_id = booking.id, start = %booking.booking_time, "booking created");
    Ok(booking)
}

pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>, AppError> {
    Ok(queries::list_bookings(conn)?)
}

pub fn get_booking(conn: &Connection, id: i64) -> Result<Booking, AppError> {
    queries::get_booking(conn, id)?.ok_or(AppError::NotFound)
}

pub fn update_booking(
    conn: &mut Connection,
    id: i64,
    patch: &BookingPatch,
) -> Result<Booking, AppError> {
    if let Some(name) = &patch.customer_name {
        validate_customer_name(name)?;
    }
    if let Some(duration) = patch.duration_minutes {
        validate_duration(duration)?;
    }

    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let current = queries::get_booking(&tx, id)?.ok_or(AppError::NotFound)?;
    let merged = patch.merged_onto(&current);

    let existing = queries::list_bookings(&tx)?;
    check_no_conflict(&merged.booking_time, merged.duration_minutes, &existing, Some(id))
        .map_err(log_conflict)?;

    queries::update_booking(&tx, &merged)?;
    tx.commit()?;

    tracing::info!(booking_id = id, start = %merged.booking_time, "booking updated");
    Ok(merged)
}

pub fn delete_booking(conn: &mut Connection, id: i64) -> Result<(), AppError> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    if !queries::delete_booking(&tx, id)? {
        return Err(AppError::NotFound);
    }
    tx.commit()?;

    tracing::info!(booking_id = id, "booking deleted");
    Ok(())
}

fn log_conflict(err: SchedulingError) -> AppError {
    let SchedulingError::Conflict { existing_id } = &err;
    tracing::warn!(existing_id, "rejected overlapping booking");
    err.into()
}

fn validate_customer_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "customer_name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_duration(duration_minutes: i32) -> Result<(), AppError> {
    if duration_minutes <= 0 {
        return Err(AppError::Validation(
            "duration_minutes must be positive".to_string(),
        ));
    }
    Ok(())
}
