//! Handlers for the `/reviews` resource.
//!
//! The write path accepts `listing_id`, `rating`, and `comment`; the
//! reviewer is always the authenticated requester, passed explicitly into
//! the repository call. The read representation renders `user` and
//! `listing` as display strings and adds the derived `rating_label`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use stayhub_core::error::CoreError;
use stayhub_core::review::{rating_label, validate_rating, DUPLICATE_REVIEW_MSG};
use stayhub_core::types::{DbId, Timestamp};
use stayhub_db::models::review::{CreateReview, ReviewDetail};
use stayhub_db::repositories::{ListingRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Wire representation of a review.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: DbId,
    /// The reviewer's username.
    pub user: String,
    /// The reviewed listing's title.
    pub listing: String,
    pub rating: i32,
    /// Human-readable tier name derived from `rating`.
    pub rating_label: &'static str,
    pub comment: String,
    pub created_at: Timestamp,
}

impl From<ReviewDetail> for ReviewResponse {
    fn from(detail: ReviewDetail) -> Self {
        ReviewResponse {
            id: detail.id,
            user: detail.user,
            listing: detail.listing,
            rating: detail.rating,
            rating_label: rating_label(detail.rating),
            comment: detail.comment,
            created_at: detail.created_at,
        }
    }
}

/// POST /api/v1/reviews
///
/// Creates a review by the authenticated requester. At most one review per
/// (user, listing) pair: a fast-path existence check yields the friendly
/// message, and the storage unique constraint backstops concurrent racers.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateReview>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    validate_rating(input.rating)?;

    if ListingRepo::find_by_id(&state.pool, input.listing_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::validation(
            "listing_id",
            format!("Listing with id {} does not exist.", input.listing_id),
        )));
    }

    if ReviewRepo::exists_for_user_and_listing(&state.pool, user.user_id, input.listing_id).await? {
        return Err(AppError::Core(CoreError::validation_non_field(
            DUPLICATE_REVIEW_MSG,
        )));
    }

    let review = ReviewRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(review_id = %review.id, user_id = %user.user_id, listing_id = %input.listing_id, "Review created");

    let detail = ReviewRepo::find_detail(&state.pool, review.id)
        .await?
        .ok_or_else(|| AppError::InternalError("Created review vanished".into()))?;

    Ok((StatusCode::CREATED, Json(detail.into())))
}

/// GET /api/v1/reviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReviewResponse>>> {
    let reviews = ReviewRepo::list_details(&state.pool).await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/reviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ReviewResponse>> {
    let detail = ReviewRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Review", id))?;
    Ok(Json(detail.into()))
}
