use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::extractors::{AppJson, AppPath};
use crate::models::{BookingPatch, BookingPublic, NewBooking};
use crate::services::bookings;
use crate::state::AppState;

// POST /bookings/
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AppJson(new): AppJson<NewBooking>,
) -> Result<Json<BookingPublic>, AppError> {
    let booking = {
        let mut db = state.db()?;
        bookings::create_booking(&mut db, new)?
    };

    Ok(Json(booking.to_public()))
}

// GET /bookings/
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingPublic>>, AppError> {
    let all = {
        let db = state.db()?;
        bookings::list_bookings(&db)?
    };

    Ok(Json(all.iter().map(|b| b.to_public()).collect()))
}

// GET /bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<BookingPublic>, AppError> {
    let booking = {
        let db = state.db()?;
        bookings::get_booking(&db, id)?
    };

    Ok(Json(booking.to_public()))
}

// PATCH /bookings/:id
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
    AppJson(patch): AppJson<BookingPatch>,
) -> Result<Json<BookingPublic>, AppError> {
    let booking = {
        let mut db = state.db()?;
        bookings::update_booking(&mut db, id, &patch)?
    };

    Ok(Json(booking.to_public()))
}

// DELETE /bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    {
        let mut db = state.db()?;
        bookings::delete_booking(&mut db, id)?;
    }

    Ok(Json(serde_json::json!({ "ok": true })))
}
