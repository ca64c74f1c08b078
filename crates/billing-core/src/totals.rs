//! # Document Totalizer
//!
//! Turns a subtotal plus tax and adjustment into the grand total.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Invoice (has tax section)                                             │
//! │    tax_amount = sub_total × rate / 100                                 │
//! │    total      = sub_total − tax_amount + adjustment                    │
//! │                                                                         │
//! │  Quote / Sales Order / Delivery Challan (no tax section)               │
//! │    total      = sub_total + adjustment                                 │
//! │                                                                         │
//! │  The tax is ALWAYS subtracted, whatever the category. GST rates are    │
//! │  offered in the same selector as TDS/TCS and go through the same       │
//! │  subtraction.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are rebuilt from the inputs on every call and never cached.

use crate::line_item::compute_sub_total;
use crate::types::{DocumentCharges, DocumentKind, DocumentTotals, LineItem};

/// Tax on `sub_total` at `tax_rate` percent. A rate of 0 gives 0.
///
/// ## Example
/// ```rust
/// use billing_core::totals::compute_tax;
///
/// assert_eq!(compute_tax(1900.0, 18.0), 342.0);
/// assert_eq!(compute_tax(1900.0, 0.0), 0.0);
/// ```
pub fn compute_tax(sub_total: f64, tax_rate: f64) -> f64 {
    if tax_rate == 0.0 || tax_rate.is_nan() {
        return 0.0;
    }
    sub_total * tax_rate / 100.0
}

/// Grand total.
///
/// With a tax section the tax is deducted; without one `tax_amount` is
/// ignored.
///
/// ## Example
/// ```rust
/// use billing_core::totals::compute_total;
///
/// assert_eq!(compute_total(1900.0, 342.0, -50.0, true), 1508.0);
/// assert_eq!(compute_total(1900.0, 342.0, 0.0, false), 1900.0);
/// ```
pub fn compute_total(sub_total: f64, tax_amount: f64, adjustment: f64, has_tax_section: bool) -> f64 {
    if has_tax_section {
        sub_total - tax_amount + adjustment
    } else {
        sub_total + adjustment
    }
}

/// Computes every total for one document.
///
/// `charges.tax` is ignored for kinds without a tax section, so a stale tax
/// selection cannot leak into a quote.
///
/// ## Example
/// ```rust
/// use billing_core::totals::compute_document_totals;
/// use billing_core::{DocumentCharges, DocumentKind, LineItem, TaxCategory, TaxSelection};
///
/// let items = vec![
///     LineItem::new("Widget", 2.0, 500.0, 10.0),
///     LineItem::new("Service", 1.0, 1000.0, 0.0),
/// ];
/// let charges = DocumentCharges {
///     tax: Some(TaxSelection::new(TaxCategory::Gst, 18.0)),
///     adjustment: -50.0,
///     adjustment_label: None,
/// };
///
/// let totals = compute_document_totals(DocumentKind::Invoice, &items, &charges);
/// assert_eq!(totals.sub_total, 1900.0);
/// assert_eq!(totals.tax_amount, 342.0);
/// assert_eq!(totals.total, 1508.0);
/// ```
pub fn compute_document_totals(
    kind: DocumentKind,
    items: &[LineItem],
    charges: &DocumentCharges,
) -> DocumentTotals {
    let has_tax_section = kind.has_tax_section();
    let sub_total = compute_sub_total(items);

    let tax_amount = match charges.tax {
        Some(tax) if has_tax_section => compute_tax(sub_total, tax.rate),
        _ => 0.0,
    };

    let adjustment = if charges.adjustment.is_nan() {
        0.0
    } else {
        charges.adjustment
    };

    DocumentTotals {
        sub_total,
        tax_amount,
        adjustment,
        total: compute_total(sub_total, tax_amount, adjustment, has_tax_section),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
