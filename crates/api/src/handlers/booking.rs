//! Handlers for the `/bookings` resource.
//!
//! The write path accepts `listing_id` and the date range; the booking
//! user is always the authenticated requester, passed explicitly into the
//! repository call.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use stayhub_core::booking::validate_date_range;
use stayhub_core::error::CoreError;
use stayhub_core::types::DbId;
use stayhub_db::models::booking::{BookingDetail, CreateBooking};
use stayhub_db::repositories::{BookingRepo, ListingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/bookings
///
/// Creates a booking by the authenticated requester. Rejects inverted date
/// ranges; a same-day booking (start == end) is accepted.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<BookingDetail>)> {
    validate_date_range(input.start_date, input.end_date)?;

    if ListingRepo::find_by_id(&state.pool, input.listing_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::validation(
            "listing_id",
            format!("Listing with id {} does not exist.", input.listing_id),
        )));
    }

    let booking = BookingRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(booking_id = %booking.id, user_id = %user.user_id, listing_id = %input.listing_id, "Booking created");

    let detail = BookingRepo::find_detail(&state.pool, booking.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created booking vanished".into()))?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/bookings
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BookingDetail>>> {
    let bookings = BookingRepo::list_details(&state.pool).await?;
    Ok(Json(bookings))
}

/// GET /api/v1/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookingDetail>> {
    let detail = BookingRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Booking", id))?;
    Ok(Json(detail))
}
