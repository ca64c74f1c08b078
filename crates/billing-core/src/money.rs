//! # Money Module
//!
//! Display-side money: rounding to paise and locale-aware formatting.
//!
//! ## Compute in f64, Display in Paise
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The screens compute amounts as raw floats:                             │
//! │    2 × 333.33 × (1 − 0.15) = 566.661                                    │
//! │                                                                         │
//! │  Nothing is rounded until it is shown. At that point the value         │
//! │  becomes whole paise (i64) once, and every string is built from        │
//! │  those integers:                                                        │
//! │    566.661  → Money(56666) → "₹566.66"                                  │
//! │                                                                         │
//! │  Indian grouping (en-IN):  ₹12,34,567.50   (3 digits, then pairs)       │
//! │  Western grouping (en-US): ₹1,234,567.50   (groups of 3)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billing_core::money::{format_currency, Locale, Money};
//!
//! assert_eq!(format_currency(1234567.5, Locale::EnIn, "INR"), "₹12,34,567.50");
//! assert_eq!(Money::from_amount(1900.0).to_fixed(), "1900.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;

/// Locale used when none is configured.
pub const DEFAULT_LOCALE: Locale = Locale::EnIn;

/// ISO 4217 code used when none is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "INR";

// =============================================================================
// Locale
// =============================================================================

/// Number formatting locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Locale {
    /// Indian English: lakh/crore grouping.
    #[default]
    #[serde(rename = "en-IN")]
    EnIn,
    /// US English: thousands grouping.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnIn => "en-IN",
            Locale::EnUs => "en-US",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Accepts `en-IN` / `en_IN` / `en-US` in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-in" => Ok(Locale::EnIn),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(CoreError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 of the currency unit).
///
/// Only built at the display boundary, from an already computed `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps a value already in paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Rounds a computed amount to the nearest paisa (half away from zero).
    ///
    /// NaN becomes zero. Only meaningful below [`MAX_PAISE_AMOUNT`]; larger
    /// amounts are displayed with [`format_currency`] or [`format_fixed`].
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(566.661).paise(), 56666);
    /// assert_eq!(Money::from_amount(-0.125).paise(), -13);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Whole-unit portion, truncated toward zero.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Paise portion, always 0-99.
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Plain two-decimal text with no symbol or grouping (`"-50.00"`).
    ///
    /// This is the form printed in exported documents (`INR 1900.00`).
    pub fn to_fixed(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().unsigned_abs(), self.paise_part())
    }

    /// Symbol, locale grouping and two decimals (`"₹12,34,567.50"`).
    pub fn format(&self, locale: Locale, currency_code: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let grouped = group_digits(self.rupees().unsigned_abs(), locale);
        format!(
            "{}{}{}.{:02}",
            sign,
            currency_prefix(currency_code),
            grouped,
            self.paise_part()
        )
    }
}

/// Default display is Indian rupees.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_LOCALE, DEFAULT_CURRENCY_CODE))
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Largest magnitude that still fits in [`Money`] with paise to spare.
/// Beyond it amounts are formatted from their decimal text instead.
pub const MAX_PAISE_AMOUNT: f64 = 1e16;

/// Formats a computed amount for display.
///
/// Amounts too large for [`Money`] keep their full magnitude; infinities
/// print as `∞` and NaN as `NaN`, the same as the browser formatter.
///
/// ## Example
/// ```rust
/// use billing_core::money::{format_currency, Locale};
///
/// assert_eq!(format_currency(1234567.5, Locale::EnIn, "INR"), "₹12,34,567.50");
/// assert_eq!(format_currency(1234567.5, Locale::EnUs, "USD"), "$1,234,567.50");
/// assert_eq!(format_currency(-50.0, Locale::EnIn, "INR"), "-₹50.00");
/// ```
pub fn format_currency(amount: f64, locale: Locale, currency_code: &str) -> String {
    if amount.abs() < MAX_PAISE_AMOUNT {
        return Money::from_amount(amount).format(locale, currency_code);
    }

    let prefix = currency_prefix(currency_code);
    if amount.is_nan() {
        return format!("{}NaN", prefix);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}{}∞", sign, prefix);
    }

    let (whole, fraction) = split_fixed(amount.abs());
    format!(
        "{}{}{}.{}",
        sign,
        prefix,
        group_digit_str(&whole, locale),
        fraction
    )
}

/// Two-decimal text without grouping or symbol (`"1900.00"`, `"-50.00"`).
///
/// This is the form printed in exported documents. Unlike
/// [`Money::to_fixed`] it accepts any finite magnitude.
///
/// ## Example
/// ```rust
/// use billing_core::money::format_fixed;
///
/// assert_eq!(format_fixed(-50.0), "-50.00");
/// assert_eq!(format_fixed(1e20), "100000000000000000000.00");
/// ```
pub fn format_fixed(amount: f64) -> String {
    if amount.abs() < MAX_PAISE_AMOUNT {
        return Money::from_amount(amount).to_fixed();
    }
    if amount.is_nan() {
        return "NaN".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{}∞", sign);
    }

    let (whole, fraction) = split_fixed(amount.abs());
    format!("{}{}.{}", sign, whole, fraction)
}

/// Splits a non-negative finite amount into whole digits and two decimals.
fn split_fixed(amount: f64) -> (String, String) {
    let text = format!("{:.2}", amount);
    match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
        None => (text, "00".to_string()),
    }
}

/// Symbol for the common codes; anything else is printed as `"<CODE> "`.
pub fn currency_symbol(currency_code: &str) -> Option<&'static str> {
    match currency_code.to_ascii_uppercase().as_str() {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn currency_prefix(currency_code: &str) -> String {
    match currency_symbol(currency_code) {
        Some(symbol) => symbol.to_string(),
        None => format!("{} ", currency_code.to_ascii_uppercase()),
    }
}

/// Inserts group separators into a whole number.
fn group_digits(whole: u64, locale: Locale) -> String {
    group_digit_str(&whole.to_string(), locale)
}

/// Groups a run of ASCII digits.
///
/// The last three digits always form one group; the rest are grouped in
/// pairs for en-IN and in threes for en-US.
fn group_digit_str(digits: &str, locale: Locale) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let width = match locale {
        Locale::EnIn => 2,
        Locale::EnUs => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(width);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

// =============================================================================
// Unit Tests
// =============================================================================
