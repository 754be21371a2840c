//! # Validation Module
//!
//! Input validation rules for request data.
//!
//! Runs at the HTTP edge before business logic; the database layer adds
//! its own constraints (NOT NULL, UNIQUE, CHECK) as the last line of
//! defense.

use crate::channel::normalize_whatsapp_number;
use crate::error::ValidationError;
use crate::MAX_QUOTE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_QUOTE_QUANTITY`]
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "qty".to_string(),
        });
    }

    if qty > MAX_QUOTE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "qty".to_string(),
            min: 1,
            max: MAX_QUOTE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates that a required text field is present and non-blank.
/// Returns the trimmed value.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validates a customer phone number.
///
/// ## Rules
/// - Non-empty after normalization (spaces, `+`, `-` stripped)
/// - Digits only once normalized
/// - 8 to 15 digits (ITU E.164 upper bound)
pub fn validate_phone(raw: &str) -> ValidationResult<String> {
    let normalized = normalize_whatsapp_number(raw.trim());

    if normalized.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !normalized.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, '+' or '-'".to_string(),
        });
    }

    if normalized.len() < 8 || normalized.len() > 15 {
        return Err(ValidationError::OutOfRange {
            field: "phone".to_string(),
            min: 8,
            max: 15,
        });
    }

    Ok(normalized)
}

// =============================================================================
// Unit Tests
// =============================================================================
