//! # Validation Module
//!
//! Soft checks on line inputs and tax rates.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form inputs (React)                                          │
//! │  └── Free typing, anything goes                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine computation                                           │
//! │  └── NEVER rejects or clamps: -5 qty or 120% discount are computed     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE (advisory)                                       │
//! │  ├── Flags negative quantity / rate                                    │
//! │  ├── Flags discount outside 0-100                                      │
//! │  └── Rejects tax catalog rates outside 0-100 at load time              │
//! │                                                                         │
//! │  Totals are identical whether or not these checks pass.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::validation::{validate_discount_percent, validate_line_item};
//! use billing_core::LineItem;
//!
//! assert!(validate_discount_percent(10.0).is_ok());
//! assert!(validate_line_item(&LineItem::new("Bolt", -1.0, 5.0, 0.0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::LineItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest percentage accepted for discounts and tax rates.
pub const MAX_PERCENT: f64 = 100.0;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Quantity must not be negative. Zero is allowed (row being edited).
pub fn validate_quantity(quantity: f64) -> ValidationResult<()> {
    non_negative("quantity", quantity)
}

/// Rate must not be negative. Zero is allowed (free item).
pub fn validate_rate(rate: f64) -> ValidationResult<()> {
    non_negative("rate", rate)
}

/// Discount must be within 0-100.
///
/// ## Example
/// ```rust
/// use billing_core::validation::validate_discount_percent;
///
/// assert!(validate_discount_percent(0.0).is_ok());
/// assert!(validate_discount_percent(100.0).is_ok());
/// assert!(validate_discount_percent(100.5).is_err());
/// assert!(validate_discount_percent(-1.0).is_err());
/// ```
pub fn validate_discount_percent(discount_percent: f64) -> ValidationResult<()> {
    percent("discount", discount_percent)
}

/// Tax rate must be within 0-100.
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    percent("tax_rate", rate)
}

// =============================================================================
// Record Validators
// =============================================================================

/// Checks every numeric input of a row; returns the first problem found.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_quantity(item.quantity)?;
    validate_rate(item.rate)?;
    validate_discount_percent(item.discount_percent)?;
    Ok(())
}

/// Every problem on a row, for callers that want to flag all fields at once.
pub fn line_item_issues(item: &LineItem) -> Vec<ValidationError> {
    [
        validate_quantity(item.quantity),
        validate_rate(item.rate),
        validate_discount_percent(item.discount_percent),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

fn non_negative(field: &str, value: f64) -> ValidationResult<()> {
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn percent(field: &str, value: f64) -> ValidationResult<()> {
    if !(0.0..=MAX_PERCENT).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_PERCENT,
            value,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
