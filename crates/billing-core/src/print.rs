//! # Print Summary
//!
//! The totals block handed to the export/print layer. The layer owns page
//! geometry; this module only decides which rows appear and what they say.
//!
//! ## Layout (invoice)
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Sub Total                 INR 1900.00       │
//! │  GST (18%)             (-) INR 342.00        │
//! │  Adjustment                INR -50.00        │
//! │  Total                     INR 1508.00       │
//! │                                              │
//! │  Indian Rupee One Thousand Five Hundred      │
//! │  and Eight Only                              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Quotes, sales orders and challans have no tax row, and show an
//! Adjustment row only when the adjustment is non-zero. The adjustment row
//! prints the document's own label when it has one ("Freight", "Round Off").

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::format_fixed;
use crate::types::{DocumentCharges, DocumentKind, DocumentTotals};
use crate::words::{amount_to_words_with_label, OVERFLOW_SENTINEL};

/// Currency code printed in front of every amount row.
pub const PRINT_CURRENCY_CODE: &str = "INR";

/// One label/value pair of the totals block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

impl SummaryRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        SummaryRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Everything the print layer needs below the line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PrintSummary {
    /// Document heading, e.g. "TAX INVOICE".
    pub title: String,
    pub rows: Vec<SummaryRow>,
    /// Total in words, or `"overflow"` when it cannot be rendered.
    pub amount_in_words: String,
}

impl PrintSummary {
    /// Builds the totals block from already computed totals.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::print::PrintSummary;
    /// use billing_core::totals::compute_document_totals;
    /// use billing_core::{DocumentCharges, DocumentKind, LineItem};
    ///
    /// let items = vec![LineItem::new("Widget", 1.0, 100.0, 0.0)];
    /// let charges = DocumentCharges::default();
    /// let totals = compute_document_totals(DocumentKind::Quote, &items, &charges);
    ///
    /// let summary = PrintSummary::build(DocumentKind::Quote, &totals, &charges, "Indian Rupee");
    /// assert_eq!(summary.rows.len(), 2);
    /// assert_eq!(summary.amount_in_words, "Indian Rupee One Hundred Only");
    /// ```
    pub fn build(
        kind: DocumentKind,
        totals: &DocumentTotals,
        charges: &DocumentCharges,
        words_label: &str,
    ) -> Self {
        let mut rows = vec![SummaryRow::new("Sub Total", inr(totals.sub_total))];

        if kind.has_tax_section() {
            if let Some(tax) = charges.tax.filter(|t| t.is_selected()) {
                rows.push(SummaryRow::new(
                    format!("{} ({}%)", tax.category.label(), tax.rate),
                    format!("(-) {}", inr(totals.tax_amount)),
                ));
            }
        }

        if kind.has_tax_section() || totals.adjustment != 0.0 {
            rows.push(SummaryRow::new(
                charges.adjustment_row_label(),
                inr(totals.adjustment),
            ));
        }

        rows.push(SummaryRow::new("Total", inr(totals.total)));

        let amount_in_words = amount_to_words_with_label(totals.total, words_label)
            .unwrap_or_else(|_| OVERFLOW_SENTINEL.to_string());

        PrintSummary {
            title: kind.title().to_string(),
            rows,
            amount_in_words,
        }
    }
}

fn inr(amount: f64) -> String {
    format!("{} {}", PRINT_CURRENCY_CODE, format_fixed(amount))
}

/// Plain-text rendering, labels left and values right-aligned.
impl fmt::Display for PrintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
        let value_width = self.rows.iter().map(|r| r.value.len()).max().unwrap_or(0);

        writeln!(f, "{}", self.title)?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<lw$}  {:>vw$}",
                row.label,
                row.value,
                lw = label_width,
                vw = value_width
            )?;
        }
        write!(f, "  {}", self.amount_in_words)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::compute_document_totals;
    use crate::types::{LineItem, TaxCategory, TaxSelection};

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::new("Widget", 2.0, 500.0, 10.0),
            LineItem::new("Service", 1.0, 1000.0, 0.0),
        ]
    }

    #[test]
    fn test_invoice_rows() {
        let charges = DocumentCharges {
            tax: Some(TaxSelection::new(TaxCategory::Gst, 18.0)),
            adjustment: -50.0,
            adjustment_label: None,
        };
        let totals = compute_document_totals(DocumentKind::Invoice, &sample_items(), &charges);
        let summary = PrintSummary::build(DocumentKind::Invoice, &totals, &charges, "Indian Rupee");

        assert_eq!(summary.title, "TAX INVOICE");
        assert_eq!(
            summary.rows,
            vec![
                SummaryRow::new("Sub Total", "INR 1900.00"),
                SummaryRow::new("GST (18%)", "(-) INR 342.00"),
                SummaryRow::new("Adjustment", "INR -50.00"),
                SummaryRow::new("Total", "INR 1508.00"),
            ]
        );
        assert_eq!(
            summary.amount_in_words,
            "Indian Rupee One Thousand Five Hundred and Eight Only"
        );
    }

    #[test]
    fn test_invoice_without_tax_selected() {
        let charges = DocumentCharges {
            tax: Some(TaxSelection::new(TaxCategory::Tds, 0.0)),
            adjustment: 0.0,
            adjustment_label: None,
        };
        let totals = compute_document_totals(DocumentKind::Invoice, &sample_items(), &charges);
        let summary = PrintSummary::build(DocumentKind::Invoice, &totals, &charges, "Indian Rupee");
        let labels: Vec<&str> = summary.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Sub Total", "Adjustment", "Total"]);
    }

    #[test]
    fn test_quote_rows() {
        let charges = DocumentCharges::default();
        let totals = compute_document_totals(DocumentKind::Quote, &sample_items(), &charges);
        let summary = PrintSummary::build(DocumentKind::Quote, &totals, &charges, "");
        assert_eq!(summary.title, "QUOTE");
        assert_eq!(
            summary.rows,
            vec![
                SummaryRow::new("Sub Total", "INR 1900.00"),
                SummaryRow::new("Total", "INR 1900.00"),
            ]
        );
        assert_eq!(summary.amount_in_words, "One Thousand Nine Hundred Only");
    }

    #[test]
    fn test_overflow_sentinel() {
        let items = vec![LineItem::new("Plant", 1.0, 2_000_000_000.0, 0.0)];
        let charges = DocumentCharges::default();
        let totals = compute_document_totals(DocumentKind::SalesOrder, &items, &charges);
        let summary = PrintSummary::build(DocumentKind::SalesOrder, &totals, &charges, "Indian Rupee");
        assert_eq!(summary.amount_in_words, "overflow");

        let items = vec![LineItem::new("Plant", 1.0, 1e18, 0.0)];
        let totals = compute_document_totals(DocumentKind::SalesOrder, &items, &charges);
        let summary = PrintSummary::build(DocumentKind::SalesOrder, &totals, &charges, "Indian Rupee");
        assert_eq!(
            summary.rows.last(),
            Some(&SummaryRow::new("Total", "INR 1000000000000000000.00"))
        );
    }

    #[test]
    fn test_negative_total_words_overflow() {
        let charges = DocumentCharges {
            tax: None,
            adjustment: -5000.0,
            adjustment_label: None,
        };
        let totals =
            compute_document_totals(DocumentKind::DeliveryChallan, &sample_items(), &charges);
        let summary =
            PrintSummary::build(DocumentKind::DeliveryChallan, &totals, &charges, "Indian Rupee");
        assert!(summary.rows.iter().any(|r| r.label == "Adjustment"));
        assert_eq!(summary.amount_in_words, OVERFLOW_SENTINEL);
    }

    #[test]
    fn test_challan_adjustment_label() {
        let charges = DocumentCharges {
            tax: None,
            adjustment: 150.0,
            adjustment_label: Some("Freight".to_string()),
        };
        let totals =
            compute_document_totals(DocumentKind::DeliveryChallan, &sample_items(), &charges);
        let summary =
            PrintSummary::build(DocumentKind::DeliveryChallan, &totals, &charges, "Indian Rupee");
        assert_eq!(summary.title, "DELIVERY CHALLAN");
        assert_eq!(
            summary.rows,
            vec![
                SummaryRow::new("Sub Total", "INR 1900.00"),
                SummaryRow::new("Freight", "INR 150.00"),
                SummaryRow::new("Total", "INR 2050.00"),
            ]
        );

        // a cleared label prints the default name
        let blank = DocumentCharges {
            adjustment_label: Some("  ".to_string()),
            ..charges
        };
        let summary =
            PrintSummary::build(DocumentKind::DeliveryChallan, &totals, &blank, "Indian Rupee");
        assert_eq!(summary.rows[1].label, "Adjustment");
    }

    #[test]
    fn test_display() {
        let charges = DocumentCharges::default();
        let totals = compute_document_totals(DocumentKind::Quote, &sample_items(), &charges);
        let text = PrintSummary::build(DocumentKind::Quote, &totals, &charges, "").to_string();
        assert!(text.starts_with("QUOTE\n"));
        assert!(text.contains("  Sub Total  INR 1900.00\n"));
        assert!(text.ends_with("One Thousand Nine Hundred Only"));
    }
}
