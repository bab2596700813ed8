//! Listing field constraints enforced on the write path.
//!
//! Mirrors the column constraints (VARCHAR(255) text fields, NUMERIC(8,2)
//! price) so oversized values are rejected with a field-keyed message
//! before they reach storage.

use rust_decimal::Decimal;

use crate::error::CoreError;

/// Maximum character length for `title` and `location`.
pub const MAX_TEXT_FIELD_LEN: usize = 255;

/// Total digits allowed in `price_per_night`.
pub const PRICE_MAX_DIGITS: u32 = 8;

/// Decimal places allowed in `price_per_night`.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

fn too_long_msg() -> String {
    format!("Ensure this field has no more than {MAX_TEXT_FIELD_LEN} characters.")
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.chars().count() > MAX_TEXT_FIELD_LEN {
        return Err(CoreError::validation("title", too_long_msg()));
    }
    Ok(())
}

pub fn validate_location(location: &str) -> Result<(), CoreError> {
    if location.chars().count() > MAX_TEXT_FIELD_LEN {
        return Err(CoreError::validation("location", too_long_msg()));
    }
    Ok(())
}

/// Check that a price fits NUMERIC(8,2): at most two decimal places, at
/// most eight digits in total.
pub fn validate_price(price: Decimal) -> Result<(), CoreError> {
    if price.normalize().scale() > PRICE_DECIMAL_PLACES {
        return Err(CoreError::validation(
            "price_per_night",
            format!("Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."),
        ));
    }
    let integral_limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES));
    if price.abs() >= integral_limit {
        return Err(CoreError::validation(
            "price_per_night",
            format!("Ensure that there are no more than {PRICE_MAX_DIGITS} digits in total."),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_title_at_limit_accepted() {
        assert!(validate_title(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_title_over_limit_rejected() {
        let err = validate_title(&"x".repeat(256)).unwrap_err();
        assert_matches!(err, CoreError::Validation { field: "title", message } => {
            assert_eq!(message, "Ensure this field has no more than 255 characters.");
        });
    }

    #[test]
    fn test_location_over_limit_rejected() {
        let err = validate_location(&"y".repeat(300)).unwrap_err();
        assert_matches!(err, CoreError::Validation { field: "location", .. });
    }

    #[test]
    fn test_price_at_digit_limit_accepted() {
        // 999999.99 uses all eight digits.
        assert!(validate_price(Decimal::new(99_999_999, 2)).is_ok());
    }

    #[test]
    fn test_price_over_digit_limit_rejected() {
        // 1234567.00 has seven integral digits.
        let err = validate_price(Decimal::new(123_456_700, 2)).unwrap_err();
        assert_matches!(err, CoreError::Validation { field: "price_per_night", message } => {
            assert_eq!(message, "Ensure that there are no more than 8 digits in total.");
        });
    }

    #[test]
    fn test_price_excess_decimal_places_rejected() {
        let err = validate_price(Decimal::new(10_999, 3)).unwrap_err();
        assert_matches!(err, CoreError::Validation { field: "price_per_night", message } => {
            assert_eq!(message, "Ensure that there are no more than 2 decimal places.");
        });
    }

    #[test]
    fn test_price_trailing_zero_scale_accepted() {
        // 120.500 normalizes to 120.5.
        assert!(validate_price(Decimal::new(120_500, 3)).is_ok());
    }
}
