//! Document input file.
//!
//! The JSON shape the front-end posts for a sales document, reduced to the
//! fields the totals need:
//!
//! ```json
//! {
//!   "kind": "INVOICE",
//!   "items": [
//!     { "details": "Widget", "quantity": 2, "rate": 500, "discount": 10 },
//!     { "details": "Service", "quantity": "1", "rate": "1000" }
//!   ],
//!   "tax": { "category": "GST", "rate": 18 },
//!   "adjustment": -50,
//!   "adjustmentLabel": "Round Off",
//!   "amountPaid": 0
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use billing_core::{DocumentCharges, DocumentKind, LineItems};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInput {
    pub kind: DocumentKind,

    /// Amounts are recomputed on load; any `amount` in the file is ignored.
    #[serde(default)]
    pub items: LineItems,

    #[serde(flatten)]
    pub charges: DocumentCharges,

    #[serde(default)]
    pub amount_paid: f64,
}

impl DocumentInput {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        Self::from_json(&json)
            .map_err(|e| anyhow::anyhow!("invalid document {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_core::TaxCategory;

    #[test]
    fn test_parse_invoice() {
        let input = DocumentInput::from_json(
            r#"{
                "kind": "INVOICE",
                "items": [
                    {"details": "Widget", "quantity": 2, "rate": 500, "discount": 10, "amount": 1},
                    {"details": "Service", "quantity": "1", "rate": "1000"}
                ],
                "tax": {"category": "GST", "rate": 18},
                "adjustment": "-50",
                "adjustmentLabel": "Round Off",
                "amountPaid": 500
            }"#,
        )
        .unwrap();

        assert_eq!(input.kind, DocumentKind::Invoice);
        assert_eq!(input.items.len(), 2);
        assert_eq!(input.items.as_slice()[0].amount(), 900.0);
        let tax = input.charges.tax.unwrap();
        assert_eq!(tax.category, TaxCategory::Gst);
        assert_eq!(tax.rate, 18.0);
        assert_eq!(input.charges.adjustment, -50.0);
        assert_eq!(input.charges.adjustment_row_label(), "Round Off");
        assert_eq!(input.amount_paid, 500.0);
    }

    #[test]
    fn test_parse_minimal_quote() {
        let input = DocumentInput::from_json(r#"{"kind": "QUOTE"}"#).unwrap();
        assert_eq!(input.kind, DocumentKind::Quote);
        assert_eq!(input.items.len(), 1);
        assert!(input.charges.tax.is_none());
        assert_eq!(input.charges.adjustment, 0.0);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        assert!(DocumentInput::from_json(r#"{"kind": "RECEIPT"}"#).is_err());
    }
}
