//! Repository for the `reviews` table.

use sqlx::PgPool;
use stayhub_core::types::DbId;

use crate::models::review::{CreateReview, Review, ReviewDetail};

/// Column list for raw `reviews` rows.
const COLUMNS: &str = "id, listing_id, user_id, rating, comment, created_at";

/// Join projection for the read representation: display strings for the
/// user and listing relations.
const DETAIL_SELECT: &str = "SELECT r.id, u.username AS \"user\", l.title AS listing, \
    r.rating, r.comment, r.created_at \
    FROM reviews r \
    JOIN users u ON u.id = r.user_id \
    JOIN listings l ON l.id = r.listing_id";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review for the given user, returning the created row.
    ///
    /// `user_id` is an explicit argument rather than part of the DTO: the
    /// requester's identity always comes from the authenticated request,
    /// never from the payload.
    ///
    /// A concurrent duplicate that slips past the application-level check
    /// fails here on `uq_reviews_user_listing`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (listing_id, user_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.listing_id)
            .bind(user_id)
            .bind(input.rating)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// Find a review's read representation by ID.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ReviewDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.id = $1");
        sqlx::query_as::<_, ReviewDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all reviews' read representations, most recently created first.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<ReviewDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} ORDER BY r.created_at DESC");
        sqlx::query_as::<_, ReviewDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List read representations of a listing's reviews, newest first.
    pub async fn list_details_for_listing(
        pool: &PgPool,
        listing_id: DbId,
    ) -> Result<Vec<ReviewDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE r.listing_id = $1 ORDER BY r.created_at DESC");
        sqlx::query_as::<_, ReviewDetail>(&query)
            .bind(listing_id)
            .fetch_all(pool)
            .await
    }

    /// Check whether the user has already reviewed the listing.
    ///
    /// Advisory fast path only: two concurrent creates can both see `false`
    /// here. The unique constraint on (user_id, listing_id) is the guarantee.
    pub async fn exists_for_user_and_listing(
        pool: &PgPool,
        user_id: DbId,
        listing_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM reviews WHERE user_id = $1 AND listing_id = $2)",
        )
        .bind(user_id)
        .bind(listing_id)
        .fetch_one(pool)
        .await
    }

    /// Count reviews attached to a listing.
    pub async fn count_for_listing(pool: &PgPool, listing_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE listing_id = $1")
            .bind(listing_id)
            .fetch_one(pool)
            .await
    }
}
