//! Booking business rules.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Exact validation message for an inverted booking date range.
pub const DATE_ORDER_MSG: &str = "End date must be after start date.";

/// Reject bookings whose end date precedes their start date.
///
/// Equal start and end dates pass: a same-day booking is accepted. The
/// check is deliberately strict-less-than, matching the API's documented
/// behaviour (see the tests flagging the zero-length case).
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if end < start {
        return Err(CoreError::validation_non_field(DATE_ORDER_MSG));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NON_FIELD;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_before_start_rejected() {
        let err = validate_date_range(date(2024, 1, 10), date(2024, 1, 9)).unwrap_err();
        assert_matches!(err, CoreError::Validation { field, message } => {
            assert_eq!(field, NON_FIELD);
            assert_eq!(message, DATE_ORDER_MSG);
        });
    }

    #[test]
    fn test_end_after_start_accepted() {
        assert!(validate_date_range(date(2024, 1, 10), date(2024, 1, 12)).is_ok());
    }

    /// Zero-length (same-day) bookings are accepted. If product intent ever
    /// changes to disallow them, this is the test to flip.
    #[test]
    fn test_equal_dates_accepted() {
        assert!(validate_date_range(date(2024, 1, 10), date(2024, 1, 10)).is_ok());
    }
}
