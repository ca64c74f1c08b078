//! # Domain Types
//!
//! Record shapes shared by every sales screen.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │ DocumentCharges │   │ DocumentTotals  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  details        │   │  tax (optional) │   │  sub_total      │       │
//! │  │  quantity       │   │  adjustment     │   │  tax_amount     │       │
//! │  │  rate           │   └────────┬────────┘   │  adjustment     │       │
//! │  │  discount_%     │            │            │  total          │       │
//! │  │  amount (deriv) │   ┌────────▼────────┐   └─────────────────┘       │
//! │  └─────────────────┘   │  TaxSelection   │                              │
//! │                        │  category, rate │   ┌─────────────────┐       │
//! │                        └─────────────────┘   │  DocumentKind   │       │
//! │                                              │  Quote ... DC   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numbers
//! Amounts are plain `f64`, exactly as the screens compute them. Rounding to
//! two decimals only happens when a value is displayed (see [`crate::money`]).

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::line_item::{compute_line_amount, parse_numeric};

// =============================================================================
// Line Item
// =============================================================================

/// One row of a sales document.
///
/// `amount` is private: it only changes through [`LineItem::recompute`] (or
/// the edit helpers that call it). A freshly deserialized row carries a zero
/// amount until it is recomputed, the same as a row whose inputs were edited
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Free-text description, may be empty while the row is being edited.
    pub details: String,

    /// Quantity (defaults to 1).
    pub quantity: f64,

    /// Unit rate in currency units.
    pub rate: f64,

    /// Discount percentage, nominally 0-100 but never clamped.
    pub discount_percent: f64,

    amount: f64,
}

impl LineItem {
    /// Creates a row and computes its amount.
    pub fn new(details: impl Into<String>, quantity: f64, rate: f64, discount_percent: f64) -> Self {
        let mut item = LineItem {
            details: details.into(),
            quantity,
            rate,
            discount_percent,
            amount: 0.0,
        };
        item.recompute();
        item
    }

    /// The amount as of the last recompute.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Re-derives `amount` from quantity, rate and discount.
    pub fn recompute(&mut self) {
        self.amount = compute_line_amount(self.quantity, self.rate, self.discount_percent);
    }
}

impl Default for LineItem {
    /// A new blank row: quantity 1, everything else zero.
    fn default() -> Self {
        LineItem::new("", 1.0, 0.0, 0.0)
    }
}

/// Editable fields of a [`LineItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum LineField {
    Details,
    Quantity,
    Rate,
    Discount,
}

impl LineField {
    /// Field name used in messages and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            LineField::Details => "details",
            LineField::Quantity => "quantity",
            LineField::Rate => "rate",
            LineField::Discount => "discount",
        }
    }
}

// =============================================================================
// Tax
// =============================================================================

/// Tax category shown next to the rate selector.
///
/// All categories are applied the same way (subtracted from the subtotal),
/// see [`crate::totals::compute_total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxCategory {
    #[default]
    None,
    /// Goods and Services Tax.
    Gst,
    /// Tax Deducted at Source.
    Tds,
    /// Tax Collected at Source.
    Tcs,
}

impl TaxCategory {
    /// Short label printed on documents ("GST", "TDS", "TCS").
    pub fn label(&self) -> &'static str {
        match self {
            TaxCategory::None => "Tax",
            TaxCategory::Gst => "GST",
            TaxCategory::Tds => "TDS",
            TaxCategory::Tcs => "TCS",
        }
    }
}

/// The category/rate pair picked on an invoice.
///
/// A rate of `0` is the "Select a Tax" option: no tax is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxSelection {
    pub category: TaxCategory,

    /// Percentage, e.g. `18.0` or `0.1`.
    pub rate: f64,
}

impl TaxSelection {
    pub fn new(category: TaxCategory, rate: f64) -> Self {
        TaxSelection { category, rate }
    }

    /// True when a non-zero rate has been chosen.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.rate != 0.0 && !self.rate.is_nan()
    }
}

// =============================================================================
// Document
// =============================================================================

/// The sales documents that carry line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Quote,
    SalesOrder,
    Invoice,
    RecurringInvoice,
    DeliveryChallan,
}

impl DocumentKind {
    /// Only invoices have the TDS/TCS tax widget.
    pub fn has_tax_section(&self) -> bool {
        matches!(self, DocumentKind::Invoice | DocumentKind::RecurringInvoice)
    }

    /// Heading printed at the top of the exported document.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Quote => "QUOTE",
            DocumentKind::SalesOrder => "SALES ORDER",
            DocumentKind::Invoice => "TAX INVOICE",
            DocumentKind::RecurringInvoice => "RECURRING INVOICE",
            DocumentKind::DeliveryChallan => "DELIVERY CHALLAN",
        }
    }
}

/// Printed name of the adjustment row when none is given.
pub const DEFAULT_ADJUSTMENT_LABEL: &str = "Adjustment";

/// Tax and adjustment inputs for one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCharges {
    pub tax: Option<TaxSelection>,

    /// Signed free-form correction added after tax.
    pub adjustment: f64,

    /// User-editable name of the adjustment (e.g. "Freight", "Round Off").
    pub adjustment_label: Option<String>,
}

impl DocumentCharges {
    /// Label for the adjustment row; blank or missing falls back to
    /// [`DEFAULT_ADJUSTMENT_LABEL`].
    pub fn adjustment_row_label(&self) -> &str {
        self.adjustment_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_ADJUSTMENT_LABEL)
    }
}

/// Totals derived from a document's lines and charges.
///
/// Never stored: build a fresh one with
/// [`crate::totals::compute_document_totals`] whenever an input changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    pub sub_total: f64,
    pub tax_amount: f64,
    pub adjustment: f64,
    pub total: f64,
}

impl DocumentTotals {
    /// Amount still owed after `amount_paid`.
    pub fn balance_due(&self, amount_paid: f64) -> f64 {
        self.total - amount_paid
    }
}

// =============================================================================
// Deserialization
// =============================================================================
//
// Front-end records arrive with numbers typed as text ("2", "", "abc").
// Each shape below accepts that input and is converted into the public type.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    #[serde(default)]
    details: String,
    #[serde(default = "default_quantity", deserialize_with = "lenient_number")]
    quantity: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    rate: f64,
    #[serde(default, alias = "discount", deserialize_with = "lenient_number")]
    discount_percent: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl<'de> Deserialize<'de> for LineItem {
    /// Any `amount` in the input is ignored; the row stays unrecomputed.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = LineItemRecord::deserialize(deserializer)?;
        Ok(LineItem {
            details: record.details,
            quantity: record.quantity,
            rate: record.rate,
            discount_percent: record.discount_percent,
            amount: 0.0,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaxSelectionRecord {
    #[serde(default)]
    category: TaxCategory,
    #[serde(default, deserialize_with = "lenient_number")]
    rate: f64,
}

impl<'de> Deserialize<'de> for TaxSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = TaxSelectionRecord::deserialize(deserializer)?;
        Ok(TaxSelection::new(record.category, record.rate))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentChargesRecord {
    #[serde(default)]
    tax: Option<TaxSelection>,
    #[serde(default, deserialize_with = "lenient_number")]
    adjustment: f64,
    #[serde(default)]
    adjustment_label: Option<String>,
}

impl<'de> Deserialize<'de> for DocumentCharges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = DocumentChargesRecord::deserialize(deserializer)?;
        Ok(DocumentCharges {
            tax: record.tax,
            adjustment: record.adjustment,
            adjustment_label: record.adjustment_label,
        })
    }
}

/// Accepts a JSON number, a numeric string, an empty string or null.
/// Anything non-numeric becomes 0, like the form inputs.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => n,
        Some(Raw::Text(s)) => parse_numeric(&s),
        None => 0.0,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
