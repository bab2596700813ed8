//! Listing entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stayhub_core::types::{DbId, Timestamp};

/// A row from the `listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Nightly price, NUMERIC(8,2). Serializes as a string ("120.50").
    pub price_per_night: Decimal,
    pub created_at: Timestamp,
}

/// DTO for creating a new listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price_per_night: Decimal,
}

/// DTO for updating an existing listing. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price_per_night: Option<Decimal>,
}
