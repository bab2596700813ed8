//! Repository for the `bookings` table.

use sqlx::PgPool;
use stayhub_core::types::DbId;

use crate::models::booking::{Booking, BookingDetail, CreateBooking};

/// Column list for raw `bookings` rows.
const COLUMNS: &str = "id, listing_id, user_id, start_date, end_date, created_at";

/// Join projection for the read representation: display strings for the
/// user and listing relations.
const DETAIL_SELECT: &str = "SELECT b.id, u.username AS \"user\", l.title AS listing, \
    b.start_date, b.end_date, b.created_at \
    FROM bookings b \
    JOIN users u ON u.id = b.user_id \
    JOIN listings l ON l.id = b.listing_id";

/// Provides CRUD operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking for the given user, returning the created row.
    ///
    /// `user_id` is an explicit argument rather than part of the DTO: the
    /// requester's identity always comes from the authenticated request,
    /// never from the payload.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (listing_id, user_id, start_date, end_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.listing_id)
            .bind(user_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a booking's read representation by ID.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE b.id = $1");
        sqlx::query_as::<_, BookingDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all bookings' read representations, most recently created first.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<BookingDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY b.created_at DESC");
        sqlx::query_as::<_, BookingDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count bookings attached to a listing.
    pub async fn count_for_listing(pool: &PgPool, listing_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE listing_id = $1")
            .bind(listing_id)
            .fetch_one(pool)
            .await
    }
}
