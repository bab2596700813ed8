//! Repository for the `listings` table.

use sqlx::PgPool;
use stayhub_core::types::DbId;

use crate::models::listing::{CreateListing, Listing, UpdateListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, location, price_per_night, created_at";

/// Provides CRUD operations for listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateListing) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (title, description, location, price_per_night)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.price_per_night)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all listings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings ORDER BY created_at DESC");
        sqlx::query_as::<_, Listing>(&query).fetch_all(pool).await
    }

    /// Update a listing. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                location = COALESCE($4, location),
                price_per_night = COALESCE($5, price_per_night)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.price_per_night)
            .fetch_optional(pool)
            .await
    }

    /// Delete a listing. Returns `true` if a row was removed. The database
    /// cascades the delete to the listing's bookings and reviews.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
