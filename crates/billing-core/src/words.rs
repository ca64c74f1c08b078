//! # Amount in Words
//!
//! Renders the whole-rupee part of an amount in Indian-English words, as
//! printed under the totals of an exported document.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1508.75                                                                │
//! │     │  drop paise, zero-pad to 9 digits                                 │
//! │     ▼                                                                   │
//! │  "000001508"                                                            │
//! │     │  fixed-width split 2-2-2-1-2                                      │
//! │     ▼                                                                   │
//! │  crore=00  lakh=00  thousand=01  hundred=5  tens=08                     │
//! │     │  each non-zero group → words + suffix                             │
//! │     ▼                                                                   │
//! │  "One Thousand" "Five Hundred" "and" "Eight" "Only"                     │
//! │                                                                         │
//! │  → "Indian Rupee One Thousand Five Hundred and Eight Only"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Anything needing a tenth digit (≥ 100 crore) is rejected with
//! [`CoreError::ValueOutOfRange`]; printed documents show [`OVERFLOW_SENTINEL`].

use tracing::warn;

use crate::error::{CoreError, CoreResult};

/// Integer digits the grouping can express (up to 99,99,99,999).
pub const MAX_WORDS_DIGITS: usize = 9;

/// Largest whole amount that can be rendered.
pub const MAX_WORDS_VALUE: u64 = 999_999_999;

/// Prefix used when no currency label is configured.
pub const DEFAULT_WORDS_LABEL: &str = "Indian Rupee";

/// Text printed in place of words when the amount is out of range.
pub const OVERFLOW_SENTINEL: &str = "overflow";

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// =============================================================================
// Digit Groups
// =============================================================================

/// A whole amount split into Indian place-value groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitGroups {
    /// Digits 1-2 (tens of crores and crores).
    pub crore: u8,
    /// Digits 3-4.
    pub lakh: u8,
    /// Digits 5-6.
    pub thousand: u8,
    /// Digit 7.
    pub hundred: u8,
    /// Digits 8-9 (0-99).
    pub tens: u8,
}

impl DigitGroups {
    /// Splits `value` zero-padded to nine digits as 2-2-2-1-2.
    ///
    /// Returns `None` when `value` needs more than nine digits.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::words::DigitGroups;
    ///
    /// let g = DigitGroups::split(123_456_789).unwrap();
    /// assert_eq!((g.crore, g.lakh, g.thousand, g.hundred, g.tens), (12, 34, 56, 7, 89));
    /// assert!(DigitGroups::split(1_000_000_000).is_none());
    /// ```
    pub fn split(value: u64) -> Option<Self> {
        if value > MAX_WORDS_VALUE {
            return None;
        }

        let padded = format!("{:0width$}", value, width = MAX_WORDS_DIGITS);
        let d: Vec<u8> = padded.bytes().map(|b| b - b'0').collect();
        let pair = |i: usize| d[i] * 10 + d[i + 1];

        Some(DigitGroups {
            crore: pair(0),
            lakh: pair(2),
            thousand: pair(4),
            hundred: d[6],
            tens: pair(7),
        })
    }

    /// True when any group above tens/units is non-zero.
    pub fn has_higher_groups(&self) -> bool {
        self.crore != 0 || self.lakh != 0 || self.thousand != 0 || self.hundred != 0
    }
}

/// Words for 0-99. Zero is the empty string.
///
/// ## Example
/// ```rust
/// use billing_core::words::two_digit_words;
///
/// assert_eq!(two_digit_words(13), "Thirteen");
/// assert_eq!(two_digit_words(40), "Forty");
/// assert_eq!(two_digit_words(99), "Ninety Nine");
/// ```
pub fn two_digit_words(n: u8) -> String {
    let n = usize::from(n % 100);
    if n < 20 {
        return ONES[n].to_string();
    }

    let (tens, units) = (n / 10, n % 10);
    if units == 0 {
        TENS[tens].to_string()
    } else {
        format!("{} {}", TENS[tens], ONES[units])
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders `amount` as "Indian Rupee ... Only".
///
/// ## Example
/// ```rust
/// use billing_core::words::amount_to_words;
///
/// assert_eq!(
///     amount_to_words(1508.0).unwrap(),
///     "Indian Rupee One Thousand Five Hundred and Eight Only"
/// );
/// assert_eq!(amount_to_words(0.0).unwrap(), "Indian Rupee Zero Only");
/// assert!(amount_to_words(1e10).is_err());
/// ```
pub fn amount_to_words(amount: f64) -> CoreResult<String> {
    amount_to_words_with_label(amount, DEFAULT_WORDS_LABEL)
}

/// Same as [`amount_to_words`] with a custom currency label (may be empty).
///
/// Only the integer part is rendered; paise are dropped. Negative, NaN and
/// infinite amounts are out of range.
pub fn amount_to_words_with_label(amount: f64, label: &str) -> CoreResult<String> {
    let out_of_range = || CoreError::ValueOutOfRange {
        value: amount,
        max_digits: MAX_WORDS_DIGITS,
    };

    if !amount.is_finite() || amount < 0.0 {
        warn!(amount, "cannot render amount in words");
        return Err(out_of_range());
    }

    let whole = amount.trunc();
    if whole > MAX_WORDS_VALUE as f64 {
        warn!(amount, max_digits = MAX_WORDS_DIGITS, "amount too large for words");
        return Err(out_of_range());
    }

    let groups = DigitGroups::split(whole as u64).ok_or_else(out_of_range)?;
    let body = groups_to_words(&groups);

    if label.is_empty() {
        Ok(body)
    } else {
        Ok(format!("{} {}", label, body))
    }
}

fn groups_to_words(groups: &DigitGroups) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (value, suffix) in [
        (groups.crore, "Crore"),
        (groups.lakh, "Lakh"),
        (groups.thousand, "Thousand"),
    ] {
        if value != 0 {
            parts.push(format!("{} {}", two_digit_words(value), suffix));
        }
    }

    if groups.hundred != 0 {
        parts.push(format!("{} Hundred", two_digit_words(groups.hundred)));
    }

    if groups.tens != 0 {
        if groups.has_higher_groups() {
            parts.push("and".to_string());
        }
        parts.push(two_digit_words(groups.tens));
    }

    if parts.is_empty() {
        parts.push("Zero".to_string());
    }

    parts.push("Only".to_string());
    parts.join(" ")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn words(amount: f64) -> String {
        amount_to_words_with_label(amount, "").unwrap()
    }

    #[test]
    fn test_split_pads_to_nine_digits() {
        let g = DigitGroups::split(5).unwrap();
        assert_eq!((g.crore, g.lakh, g.thousand, g.hundred, g.tens), (0, 0, 0, 0, 5));
        assert!(!g.has_higher_groups());

        let g = DigitGroups::split(MAX_WORDS_VALUE).unwrap();
        assert_eq!((g.crore, g.lakh, g.thousand, g.hundred, g.tens), (99, 99, 99, 9, 99));
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(two_digit_words(0), "");
        assert_eq!(two_digit_words(1), "One");
        assert_eq!(two_digit_words(11), "Eleven");
        assert_eq!(two_digit_words(19), "Nineteen");
        assert_eq!(two_digit_words(20), "Twenty");
        assert_eq!(two_digit_words(21), "Twenty One");
        assert_eq!(two_digit_words(85), "Eighty Five");
    }

    #[test]
    fn test_zero() {
        assert_eq!(words(0.0), "Zero Only");
        assert_eq!(words(0.99), "Zero Only");
    }

    #[test]
    fn test_place_values() {
        assert_eq!(words(100.0), "One Hundred Only");
        assert_eq!(words(1_000.0), "One Thousand Only");
        assert_eq!(words(100_000.0), "One Lakh Only");
        assert_eq!(words(10_000_000.0), "One Crore Only");
    }

    #[test]
    fn test_and_before_final_group() {
        assert_eq!(words(7.0), "Seven Only");
        assert_eq!(words(115.0), "One Hundred and Fifteen Only");
        assert_eq!(words(1_900.0), "One Thousand Nine Hundred Only");
        assert_eq!(words(2_021.0), "Two Thousand and Twenty One Only");
        assert_eq!(words(100_001.0), "One Lakh and One Only");
    }

    #[test]
    fn test_full_range() {
        assert_eq!(
            words(123_456_789.0),
            "Twelve Crore Thirty Four Lakh Fifty Six Thousand Seven Hundred and Eighty Nine Only"
        );
        assert_eq!(
            words(999_999_999.0),
            "Ninety Nine Crore Ninety Nine Lakh Ninety Nine Thousand Nine Hundred and Ninety Nine Only"
        );
    }

    #[test]
    fn test_paise_ignored() {
        assert_eq!(words(1_508.99), "One Thousand Five Hundred and Eight Only");
    }

    #[test]
    fn test_default_label() {
        let text = amount_to_words(100.0).unwrap();
        assert!(text.starts_with("Indian Rupee "));
        assert!(text.contains("One Hundred"));
        assert!(text.ends_with("Only"));
        assert_eq!(
            amount_to_words(100_000.0).unwrap(),
            "Indian Rupee One Lakh Only"
        );
        assert!(amount_to_words(10_000_000.0).unwrap().contains("One Crore"));
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            amount_to_words(1_000_000_000.0),
            Err(CoreError::ValueOutOfRange { max_digits: 9, .. })
        ));
        assert!(amount_to_words(999_999_999.99).is_ok());
        assert!(amount_to_words(-1.0).is_err());
        assert!(amount_to_words(f64::NAN).is_err());
        assert!(amount_to_words(f64::INFINITY).is_err());
    }
}
