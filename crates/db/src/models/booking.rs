//! Booking entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow)]
pub struct Booking {
    pub id: DbId,
    pub listing_id: DbId,
    pub user_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for creating a booking. `user` is never client-writable; the
/// authenticated requester's id is threaded in by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub listing_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Read representation of a booking: display strings for the user and
/// listing relations rather than raw foreign keys.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingDetail {
    pub id: DbId,
    /// The booking user's username.
    pub user: String,
    /// The booked listing's title.
    pub listing: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: Timestamp,
}
