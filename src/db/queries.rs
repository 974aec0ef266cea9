use chrono::NaiveDateTime;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{time, Booking};

const BOOKING_COLUMNS: &str = "id, customer_name, phone_number, booking_time, duration_minutes";

// ── Bookings ──

/// Inserts a booking and returns its store-assigned id. `booking.id` is ignored.
pub fn insert_booking(conn: &Connection, booking: &Booking) -> rusqlite::Result<i64> {
    let booking_time = booking.booking_time.format(time::DB_FORMAT).to_string();

    conn.execute(
        "INSERT INTO bookings (customer_name, phone_number, booking_time, duration_minutes)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            booking.customer_name,
            booking.phone_number,
            booking_time,
            booking.duration_minutes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_bookings(conn: &Connection) -> rusqlite::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY id ASC"
    ))?;

    let rows = stmt.query_map([], parse_booking_row)?;
    rows.collect()
}

pub fn get_booking(conn: &Connection, id: i64) -> rusqlite::Result<Option<Booking>> {
    conn.query_row(
        &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
        params![id],
        parse_booking_row,
    )
    .optional()
}

/// Overwrites every mutable column of the row with `booking.id`.
pub fn update_booking(conn: &Connection, booking: &Booking) -> rusqlite::Result<bool> {
    let booking_time = booking.booking_time.format(time::DB_FORMAT).to_string();

    let count = conn.execute(
        "UPDATE bookings
         SET customer_name = ?1, phone_number = ?2, booking_time = ?3, duration_minutes = ?4
         WHERE id = ?5",
        params![
            booking.customer_name,
            booking.phone_number,
            booking_time,
            booking.duration_minutes,
            booking.id,
        ],
    )?;
    Ok(count > 0)
}

pub fn delete_booking(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    let count = conn.execute("DELETE FROM bookings WHERE id = ?1", params![id])?;
    Ok(count > 0)
}

fn parse_booking_row(row: &rusqlite::Row) -> rusqlite::Result<Booking> {
    let booking_time_str: String = row.get(3)?;
    let booking_time = NaiveDateTime::parse_from_str(&booking_time_str, time::DB_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Booking {
        id: row.get(0)?,
        customer_name: row.get(1)?,
        phone_number: row.get(2)?,
        booking_time,
        duration_minutes: row.get(4)?,
    })
}
