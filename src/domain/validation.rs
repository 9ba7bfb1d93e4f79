//! Field validators shared by request payloads.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::config::{AREA_MAX_DIGITS, DECIMAL_PLACES, DISTANCE_MAX_DIGITS, PRICE_MAX_DIGITS};

/// Letters, digits and `@ . + - _`, matching the username rules of the
/// account store.
pub static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("username pattern compiles"));

/// Optional leading `+`, then 7 to 20 digits, spaces, dashes or parentheses.
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]{7,20}$").expect("phone pattern compiles"));

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Check sign, scale and precision of a decimal column value.
fn check_decimal(value: &Decimal, max_digits: u32, allow_zero: bool) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error(
            "min_value",
            "Ensure this value is greater than or equal to 0.".to_string(),
        ));
    }
    if !allow_zero && value.is_zero() {
        return Err(error(
            "min_value",
            "Ensure this value is greater than 0.".to_string(),
        ));
    }

    let normalized = value.normalize();
    if normalized.scale() > DECIMAL_PLACES {
        return Err(error(
            "max_decimal_places",
            format!(
                "Ensure that there are no more than {} decimal places.",
                DECIMAL_PLACES
            ),
        ));
    }

    let whole_digits = normalized.trunc().abs().to_string().trim_start_matches('0').len() as u32;
    if whole_digits > max_digits - DECIMAL_PLACES {
        return Err(error(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {} digits before the decimal point.",
                max_digits - DECIMAL_PLACES
            ),
        ));
    }

    Ok(())
}

/// Property price: non-negative, at most 12 digits with 2 decimal places.
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    check_decimal(value, PRICE_MAX_DIGITS, true)
}

/// Land area: positive, at most 10 digits with 2 decimal places.
pub fn validate_area(value: &Decimal) -> Result<(), ValidationError> {
    check_decimal(value, AREA_MAX_DIGITS, false)
}

/// Distance to campus: non-negative, at most 5 digits with 2 decimal places.
pub fn validate_distance(value: &Decimal) -> Result<(), ValidationError> {
    check_decimal(value, DISTANCE_MAX_DIGITS, true)
}

/// Reject strings made of whitespace only.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field may not be blank.".to_string()));
    }
    Ok(())
}

/// Round a stored decimal to the column scale so it renders as `"500.00"`.
pub fn to_column_scale(mut value: Decimal) -> Decimal {
    value.rescale(DECIMAL_PLACES);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_price_accepts_valid_values() {
        assert!(validate_price(&dec("0")).is_ok());
        assert!(validate_price(&dec("500.00")).is_ok());
        assert!(validate_price(&dec("9999999999.99")).is_ok());
    }

    #[test]
    fn test_price_rejects_negative() {
        let err = validate_price(&dec("-1.00")).unwrap_err();
        assert_eq!(err.code, "min_value");
    }

    #[test]
    fn test_price_rejects_extra_decimal_places() {
        let err = validate_price(&dec("10.125")).unwrap_err();
        assert_eq!(err.code, "max_decimal_places");
        // Trailing zeros are not significant
        assert!(validate_price(&dec("10.1200")).is_ok());
    }

    #[test]
    fn test_price_rejects_too_many_digits() {
        let err = validate_price(&dec("12345678901.00")).unwrap_err();
        assert_eq!(err.code, "max_whole_digits");
    }

    #[test]
    fn test_area_must_be_positive() {
        assert!(validate_area(&dec("0")).is_err());
        assert!(validate_area(&dec("120.5")).is_ok());
    }

    #[test]
    fn test_distance_precision() {
        assert!(validate_distance(&dec("999.99")).is_ok());
        assert!(validate_distance(&dec("1000.00")).is_err());
    }

    #[test]
    fn test_patterns() {
        assert!(USERNAME_PATTERN.is_match("jane.doe+1@x"));
        assert!(!USERNAME_PATTERN.is_match("jane doe"));
        assert!(PHONE_PATTERN.is_match("+254 712-345678"));
        assert!(!PHONE_PATTERN.is_match("call me"));
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("Flat A").is_ok());
    }

    #[test]
    fn test_column_scale() {
        assert_eq!(to_column_scale(dec("500")).to_string(), "500.00");
        assert_eq!(to_column_scale(dec("12.5")).to_string(), "12.50");
    }
}
