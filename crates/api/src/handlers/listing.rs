//! Handlers for the `/listings` resource.
//!
//! Read representations carry the listing's nested reviews plus the
//! derived `reviews_count` and `average_rating` fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rust_decimal::Decimal;
use serde::Serialize;
use stayhub_core::listing::{validate_location, validate_price, validate_title};
use stayhub_core::review::average_rating;
use stayhub_core::types::{DbId, Timestamp};
use stayhub_db::models::listing::{CreateListing, Listing, UpdateListing};
use stayhub_db::repositories::{ListingRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::review::ReviewResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Wire representation of a listing: native fields plus nested reviews and
/// the derived aggregate rating fields.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Serializes as a string ("120.50"), preserving two decimal places.
    pub price_per_night: Decimal,
    pub created_at: Timestamp,
    pub reviews: Vec<ReviewResponse>,
    pub reviews_count: i64,
    /// Mean rating rounded half-up to one decimal place; `null` when the
    /// listing has no reviews.
    pub average_rating: Option<f64>,
}

/// Assemble the full read representation for one listing.
async fn listing_response(state: &AppState, listing: Listing) -> AppResult<ListingResponse> {
    let details = ReviewRepo::list_details_for_listing(&state.pool, listing.id).await?;
    let ratings: Vec<i32> = details.iter().map(|d| d.rating).collect();

    Ok(ListingResponse {
        id: listing.id,
        title: listing.title,
        description: listing.description,
        location: listing.location,
        price_per_night: listing.price_per_night,
        created_at: listing.created_at,
        reviews_count: details.len() as i64,
        average_rating: average_rating(&ratings),
        reviews: details.into_iter().map(Into::into).collect(),
    })
}

/// POST /api/v1/listings
///
/// Field constraints (text lengths, price precision) are checked before
/// the insert so violations answer with a field-keyed message.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateListing>,
) -> AppResult<(StatusCode, Json<ListingResponse>)> {
    validate_title(&input.title)?;
    validate_location(&input.location)?;
    validate_price(input.price_per_night)?;

    let listing = ListingRepo::create(&state.pool, &input).await?;
    tracing::info!(listing_id = %listing.id, user_id = %user.user_id, "Listing created");

    let response = listing_response(&state, listing).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/listings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ListingResponse>>> {
    let listings = ListingRepo::list(&state.pool).await?;

    let mut responses = Vec::with_capacity(listings.len());
    for listing in listings {
        responses.push(listing_response(&state, listing).await?);
    }
    Ok(Json(responses))
}

/// GET /api/v1/listings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ListingResponse>> {
    let listing = ListingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Listing", id))?;
    let response = listing_response(&state, listing).await?;
    Ok(Json(response))
}

/// PUT /api/v1/listings/{id}
///
/// Partial update: only non-`None` fields are applied.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateListing>,
) -> AppResult<Json<ListingResponse>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(location) = &input.location {
        validate_location(location)?;
    }
    if let Some(price) = input.price_per_night {
        validate_price(price)?;
    }

    let listing = ListingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Listing", id))?;
    tracing::info!(listing_id = %listing.id, user_id = %user.user_id, "Listing updated");

    let response = listing_response(&state, listing).await?;
    Ok(Json(response))
}

/// DELETE /api/v1/listings/{id}
///
/// Cascades: the listing's bookings and reviews are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ListingRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(listing_id = %id, user_id = %user.user_id, "Listing deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Listing", id))
    }
}
