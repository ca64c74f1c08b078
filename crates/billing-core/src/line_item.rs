//! # Line Item Calculator
//!
//! Per-row amount math and the document subtotal.
//!
//! ## Where It Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types in a row cell (qty / rate / discount)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LineItem::apply_edit(field, raw)                                       │
//! │       │   parse_numeric(raw)        "" / "abc" → 0                      │
//! │       ▼                                                                 │
//! │  compute_line_amount(q, r, d) = q × r × (1 − d/100)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_sub_total(&items) = Σ amount                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is cheap enough to run on each keystroke.

use tracing::debug;

use crate::error::ValidationError;
use crate::types::{LineField, LineItem};
use crate::validation::ValidationResult;

// =============================================================================
// Numeric Input
// =============================================================================

/// Parses the leading number of `raw`, the way a browser's `parseFloat` does.
///
/// Leading whitespace is skipped and trailing junk is ignored (`"12kg"` is
/// `12`). Text with no leading number is an error.
///
/// ## Example
/// ```rust
/// use billing_core::line_item::parse_numeric_strict;
///
/// assert_eq!(parse_numeric_strict("rate", " 12.5kg").unwrap(), 12.5);
/// assert!(parse_numeric_strict("rate", "kg").is_err());
/// ```
pub fn parse_numeric_strict(field: &str, raw: &str) -> ValidationResult<f64> {
    numeric_prefix(raw).ok_or_else(|| ValidationError::InvalidNumericInput {
        field: field.to_string(),
        raw: raw.to_string(),
    })
}

/// Lenient parse: anything that is not a number counts as `0`.
///
/// ## Example
/// ```rust
/// use billing_core::line_item::parse_numeric;
///
/// assert_eq!(parse_numeric("3"), 3.0);
/// assert_eq!(parse_numeric(""), 0.0);
/// assert_eq!(parse_numeric("n/a"), 0.0);
/// ```
pub fn parse_numeric(raw: &str) -> f64 {
    match numeric_prefix(raw) {
        Some(value) if !value.is_nan() => value,
        _ => {
            if !raw.trim().is_empty() {
                debug!(raw, "non-numeric input, using 0");
            }
            0.0
        }
    }
}

fn numeric_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return s[..end + "Infinity".len()].parse().ok();
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            end = j;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse().ok()
}

// =============================================================================
// Line Amount
// =============================================================================

/// Computes one row's amount: `quantity × rate × (1 − discount% / 100)`.
///
/// The result is NOT rounded. Negative inputs and discounts outside 0-100 are
/// used as given; a NaN input counts as `0`.
///
/// ## Example
/// ```rust
/// use billing_core::line_item::compute_line_amount;
///
/// assert_eq!(compute_line_amount(2.0, 500.0, 10.0), 900.0);
/// assert_eq!(compute_line_amount(3.0, 40.0, 100.0), 0.0);
/// assert_eq!(compute_line_amount(1.0, 100.0, 150.0), -50.0);
/// ```
pub fn compute_line_amount(quantity: f64, rate: f64, discount_percent: f64) -> f64 {
    let quantity = or_zero(quantity);
    let rate = or_zero(rate);
    let discount_percent = or_zero(discount_percent);

    quantity * rate * (1.0 - discount_percent / 100.0)
}

/// Same as [`compute_line_amount`], straight from the text in the row cells.
pub fn compute_line_amount_raw(quantity: &str, rate: &str, discount_percent: &str) -> f64 {
    compute_line_amount(
        parse_numeric(quantity),
        parse_numeric(rate),
        parse_numeric(discount_percent),
    )
}

#[inline]
fn or_zero(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

// =============================================================================
// Subtotal
// =============================================================================

/// Sums the current `amount` of every row. An empty slice gives `0`.
///
/// Rows are read as they are: an amount that was not recomputed after an
/// edit is summed stale.
///
/// ## Example
/// ```rust
/// use billing_core::line_item::compute_sub_total;
/// use billing_core::LineItem;
///
/// let items = vec![
///     LineItem::new("A", 2.0, 500.0, 10.0),
///     LineItem::new("B", 1.0, 1000.0, 0.0),
/// ];
/// assert_eq!(compute_sub_total(&items), 1900.0);
/// assert_eq!(compute_sub_total(&[]), 0.0);
/// ```
pub fn compute_sub_total(items: &[LineItem]) -> f64 {
    items.iter().map(|item| or_zero(item.amount())).sum()
}

// =============================================================================
// Row Editing
// =============================================================================

impl LineItem {
    /// Writes `raw` into `field` and recomputes the amount.
    ///
    /// Numeric fields go through the lenient parse, so a half-typed value
    /// like `""` or `"-"` gives a zero amount instead of an error.
    pub fn apply_edit(&mut self, field: LineField, raw: &str) {
        match field {
            LineField::Details => self.details = raw.to_string(),
            LineField::Quantity => self.quantity = parse_numeric(raw),
            LineField::Rate => self.rate = parse_numeric(raw),
            LineField::Discount => self.discount_percent = parse_numeric(raw),
        }
        self.recompute();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_numeric_prefix_rules() {
        assert_eq!(parse_numeric("42"), 42.0);
        assert_eq!(parse_numeric("  7.25  "), 7.25);
        assert_eq!(parse_numeric("12kg"), 12.0);
        assert_eq!(parse_numeric(".5"), 0.5);
        assert_eq!(parse_numeric("5."), 5.0);
        assert_eq!(parse_numeric("-3"), -3.0);
        assert_eq!(parse_numeric("+3"), 3.0);
        assert_eq!(parse_numeric("1e3"), 1000.0);
        assert_eq!(parse_numeric("1e"), 1.0);
        assert_eq!(parse_numeric("2.5e-1x"), 0.25);
        assert_eq!(parse_numeric("1,000"), 1.0);
    }

    #[test]
    fn test_parse_numeric_falls_back_to_zero() {
        assert_eq!(parse_numeric(""), 0.0);
        assert_eq!(parse_numeric("   "), 0.0);
        assert_eq!(parse_numeric("-"), 0.0);
        assert_eq!(parse_numeric("."), 0.0);
        assert_eq!(parse_numeric("abc"), 0.0);
        assert_eq!(parse_numeric("NaN"), 0.0);
    }

    #[test]
    fn test_parse_numeric_infinity() {
        assert_eq!(parse_numeric("Infinity"), f64::INFINITY);
        assert_eq!(parse_numeric("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_numeric_strict_reports_field() {
        let err = parse_numeric_strict("quantity", "two").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumericInput {
                field: "quantity".to_string(),
                raw: "two".to_string(),
            }
        );
    }

    #[test]
    fn test_line_amount_examples() {
        assert_close(compute_line_amount(2.0, 500.0, 10.0), 900.0);
        assert_close(compute_line_amount(1.0, 1000.0, 0.0), 1000.0);
        assert_close(compute_line_amount(3.0, 33.33, 0.0), 99.99);
    }

    #[test]
    fn test_full_discount_is_zero() {
        assert_eq!(compute_line_amount(7.0, 123.45, 100.0), 0.0);
    }

    #[test]
    fn test_out_of_range_values_not_clamped() {
        // discount above 100 goes negative
        assert_close(compute_line_amount(1.0, 100.0, 120.0), -20.0);
        // negative discount inflates
        assert_close(compute_line_amount(1.0, 100.0, -10.0), 110.0);
        // negative quantity / rate pass through
        assert_close(compute_line_amount(-2.0, 50.0, 0.0), -100.0);
        assert_close(compute_line_amount(2.0, -50.0, 0.0), -100.0);
    }

    #[test]
    fn test_nan_counts_as_zero() {
        assert_eq!(compute_line_amount(f64::NAN, 10.0, 0.0), 0.0);
        assert_close(compute_line_amount(2.0, 10.0, f64::NAN), 20.0);
    }

    #[test]
    fn test_line_amount_raw() {
        assert_close(compute_line_amount_raw("2", "500", "10"), 900.0);
        assert_eq!(compute_line_amount_raw("", "500", "10"), 0.0);
        assert_close(compute_line_amount_raw("2", "500", ""), 1000.0);
    }

    #[test]
    fn test_sub_total() {
        let items = vec![
            LineItem::new("A", 2.0, 500.0, 10.0),
            LineItem::new("B", 1.0, 1000.0, 0.0),
        ];
        assert_close(compute_sub_total(&items), 1900.0);
        assert_eq!(compute_sub_total(&[]), 0.0);
    }

    #[test]
    fn test_sub_total_uses_stale_amounts() {
        let mut items = vec![LineItem::new("A", 1.0, 100.0, 0.0)];
        items[0].rate = 200.0;
        assert_close(compute_sub_total(&items), 100.0);
        items[0].recompute();
        assert_close(compute_sub_total(&items), 200.0);
    }

    #[test]
    fn test_sub_total_does_not_mutate_input() {
        let items = vec![LineItem::new("A", 2.0, 5.0, 0.0)];
        let before = items.clone();
        let _ = compute_sub_total(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_apply_edit() {
        let mut item = LineItem::default();
        item.apply_edit(LineField::Rate, "500");
        assert_close(item.amount(), 500.0);
        item.apply_edit(LineField::Quantity, "2");
        item.apply_edit(LineField::Discount, "10");
        assert_close(item.amount(), 900.0);
        item.apply_edit(LineField::Quantity, "");
        assert_eq!(item.quantity, 0.0);
        assert_eq!(item.amount(), 0.0);
        item.apply_edit(LineField::Details, "Steel bracket");
        assert_eq!(item.details, "Steel bracket");
    }

    proptest! {
        #[test]
        fn prop_line_amount_formula(
            q in 0.0f64..10_000.0,
            r in 0.0f64..100_000.0,
            d in 0.0f64..=100.0,
        ) {
            let expected = q * r * (1.0 - d / 100.0);
            prop_assert_eq!(compute_line_amount(q, r, d), expected);
        }

        #[test]
        fn prop_line_amount_non_increasing_in_discount(
            q in 0.0f64..10_000.0,
            r in 0.0f64..100_000.0,
            d1 in 0.0f64..=100.0,
            d2 in 0.0f64..=100.0,
        ) {
            let (lo, hi) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
            prop_assert!(compute_line_amount(q, r, hi) <= compute_line_amount(q, r, lo));
        }

        #[test]
        fn prop_sub_total_is_sum_of_amounts(
            rows in proptest::collection::vec(
                (0.0f64..1_000.0, 0.0f64..10_000.0, 0.0f64..=100.0),
                0..20,
            )
        ) {
            let items: Vec<LineItem> = rows
                .iter()
                .map(|&(q, r, d)| LineItem::new("", q, r, d))
                .collect();
            let expected: f64 = items.iter().map(|i| i.amount()).sum();
            prop_assert_eq!(compute_sub_total(&items), expected);
        }
    }
}
