//! Review business rules: rating bounds, rating labels, and the
//! average-rating computation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CoreError;

/// Exact validation message for an out-of-range rating.
pub const RATING_RANGE_MSG: &str = "Rating must be between 1 and 5.";

/// Exact validation message for a duplicate (user, listing) review.
pub const DUPLICATE_REVIEW_MSG: &str = "You have already reviewed this listing.";

/// Inclusive rating bounds.
const MIN_RATING: i32 = 1;
const MAX_RATING: i32 = 5;

/// Check that a rating lies in the inclusive 1..=5 range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::validation("rating", RATING_RANGE_MSG));
    }
    Ok(())
}

/// Human-readable tier name for an integer rating.
///
/// Ratings outside 1..=5 are unreachable after [`validate_rating`] but map
/// to an empty string rather than panicking.
pub fn rating_label(rating: i32) -> &'static str {
    match rating {
        5 => "Excellent",
        4 => "Good",
        3 => "Average",
        2 => "Poor",
        1 => "Terrible",
        _ => "",
    }
}

/// Arithmetic mean of a listing's review ratings, rounded half-up to one
/// decimal place. Returns `None` when there are no ratings.
///
/// Rounding is done in fixed-point `Decimal` with the midpoint-away-from-zero
/// strategy; the default float rounding (half-even) would disagree on
/// midpoints like 4.25.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let mean = Decimal::from(sum) / Decimal::from(ratings.len() as i64);
    mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
