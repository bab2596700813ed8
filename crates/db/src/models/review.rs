//! Review entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;
use stayhub_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow)]
pub struct Review {
    pub id: DbId,
    pub listing_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

/// DTO for creating a review. `user` is never client-writable; the
/// authenticated requester's id is threaded in by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub listing_id: DbId,
    pub rating: i32,
    pub comment: String,
}

/// Read representation of a review: display strings for the user and
/// listing relations. The api crate adds the derived `rating_label`.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewDetail {
    pub id: DbId,
    /// The reviewer's username.
    pub user: String,
    /// The reviewed listing's title.
    pub listing: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}
