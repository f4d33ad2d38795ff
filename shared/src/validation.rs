//! Validation utilities shared by the API and the browser module
//!
//! Field-level rules live on the input structs as `validator` attributes;
//! the functions here back the `custom` and `schema` hooks those attributes
//! reference, plus a few checks used outside of a derive.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::types::DateWindow;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

// ============================================================================
// Custom field validators
// ============================================================================

/// Reject strings that are empty once surrounding whitespace is removed
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank"));
    }
    Ok(())
}

/// Reject negative monetary amounts
pub fn validate_non_negative_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error("negative", "must not be negative"));
    }
    Ok(())
}

/// Economic loss is stored as NUMERIC(15, 2)
pub fn validate_money_scale(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative_decimal(value)?;
    if value.normalize().scale() > 2 {
        return Err(error("scale", "must have at most two decimal places"));
    }
    if value.trunc() >= Decimal::from(10_000_000_000_000i64) {
        return Err(error("overflow", "must be less than 10^13"));
    }
    Ok(())
}

/// Schema-level check for filters carrying a start and end date
pub fn validate_date_window(window: DateWindow) -> Result<(), ValidationError> {
    if !window.is_ordered() {
        return Err(error("date_window", "start_date must not be after end_date"));
    }
    Ok(())
}

// ============================================================================
// Error flattening
// ============================================================================

/// First offending field and its message, in field-name order.
///
/// Struct-level (schema) failures are reported under `__all__`.
pub fn first_error(errors: &ValidationErrors) -> Option<(String, String)> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields.into_iter().find_map(|(field, errs)| {
        errs.first().map(|err| {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| describe_code(err));
            (field.to_string(), message)
        })
    })
}

fn describe_code(err: &ValidationError) -> String {
    match err.code.as_ref() {
        "range" => {
            let min = err.params.get("min").map(|v| v.to_string());
            let max = err.params.get("max").map(|v| v.to_string());
            match (min, max) {
                (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
                (Some(min), None) => format!("must be at least {}", min),
                (None, Some(max)) => format!("must be at most {}", max),
                (None, None) => "is out of range".to_string(),
            }
        }
        "length" => "has an invalid length".to_string(),
        code => format!("failed validation: {}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Buy rice").is_ok());
        assert!(validate_not_blank(" x ").is_ok());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("   \t\n").is_err());
    }

    #[test]
    fn test_non_negative_decimal() {
        assert!(validate_non_negative_decimal(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_decimal(&Decimal::from(1500)).is_ok());
        assert!(validate_non_negative_decimal(&Decimal::from(-1)).is_err());
        // -0 is still zero
        assert!(validate_non_negative_decimal(&Decimal::from_str("-0.00").unwrap()).is_ok());
    }

    #[test]
    fn test_money_scale() {
        assert!(validate_money_scale(&Decimal::from_str("1250000.50").unwrap()).is_ok());
        assert!(validate_money_scale(&Decimal::from_str("10.500").unwrap()).is_ok());
        assert!(validate_money_scale(&Decimal::from_str("10.505").unwrap()).is_err());
        assert!(validate_money_scale(&Decimal::from_str("10000000000000").unwrap()).is_err());
    }

    #[test]
    fn test_date_window() {
        let open = DateWindow::default();
        assert!(validate_date_window(open).is_ok());

        let half_open = DateWindow::new(Some(date(2024, 1, 1)), None);
        assert!(validate_date_window(half_open).is_ok());

        let same_day = DateWindow::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 1)));
        assert!(validate_date_window(same_day).is_ok());

        let reversed = DateWindow::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(validate_date_window(reversed).is_err());
    }

    #[test]
    fn test_first_error_uses_custom_message() {
        let mut errors = ValidationErrors::new();
        errors.add("title", error("blank", "must not be blank"));

        let (field, message) = first_error(&errors).unwrap();
        assert_eq!(field, "title");
        assert_eq!(message, "must not be blank");
    }

    #[test]
    fn test_first_error_describes_range() {
        let mut err = ValidationError::new("range");
        err.add_param(Cow::Borrowed("min"), &0.0);
        err.add_param(Cow::Borrowed("max"), &100.0);

        let mut errors = ValidationErrors::new();
        errors.add("humidity", err);

        let (field, message) = first_error(&errors).unwrap();
        assert_eq!(field, "humidity");
        assert_eq!(message, "must be between 0.0 and 100.0");
    }
}
