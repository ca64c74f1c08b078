//! # Error Types
//!
//! Domain-specific error types for billing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billing-core errors (this file)                                       │
//! │  ├── CoreError        - Domain errors (range, empty document, catalog) │
//! │  └── ValidationError  - Input problems (non-numeric, out of bounds)    │
//! │                                                                         │
//! │  billing-cli errors (separate crate)                                   │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (binary) → stderr          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recovery
//! None of these are fatal. `InvalidNumericInput` is normally swallowed by the
//! lenient parser (the field counts as `0`), and the others are reported to
//! the caller, which substitutes a safe default.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core document computation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An amount cannot be rendered in words.
    ///
    /// ## When This Occurs
    /// - The integer part needs more than nine digits (99,99,99,999 is the max)
    /// - The amount is negative, NaN or infinite
    ///
    /// Printed documents show the `"overflow"` sentinel instead of words.
    #[error("Amount {value} is out of range for words (max {max_digits} integer digits, non-negative)")]
    ValueOutOfRange { value: f64, max_digits: usize },

    /// A draft would be left without any line item.
    ///
    /// ## User Workflow
    /// ```text
    /// Draft with 1 row
    ///      │
    ///      ▼
    /// Click trash icon on that row
    ///      │
    ///      ▼
    /// EmptyDocument → row stays, nothing changes
    /// ```
    #[error("A document must keep at least one line item")]
    EmptyDocument,

    /// A row index does not exist in the draft.
    #[error("Line {index} does not exist (document has {len} lines)")]
    LineIndexOutOfBounds { index: usize, len: usize },

    /// Locale string is not one we can format for.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Tax catalog JSON could not be parsed.
    #[error("Invalid tax catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The computation itself never rejects these values; they exist so a caller
/// can highlight a suspicious field.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Text typed into a numeric field did not start with a number.
    #[error("{field} is not a number: {raw:?}")]
    InvalidNumericInput { field: String, raw: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
