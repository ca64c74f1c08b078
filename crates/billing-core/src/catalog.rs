//! # Tax Catalog
//!
//! The fixed list of category/rate pairs offered in the invoice tax selector.
//!
//! The engine never invents rates: the caller passes a catalog, either the
//! built-in Indian one or one loaded from JSON:
//!
//! ```json
//! [
//!   { "category": "GST", "rate": 18 },
//!   { "category": "TCS", "rate": 0.1, "label": "TCS (0.1%)" }
//! ]
//! ```
//!
//! A missing `label` is generated as `"<CATEGORY> (<rate>%)"`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::types::{TaxCategory, TaxSelection};
use crate::validation::validate_tax_rate;

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxOption {
    pub category: TaxCategory,
    pub rate: f64,
    #[serde(default)]
    pub label: String,
}

impl TaxOption {
    pub fn new(category: TaxCategory, rate: f64) -> Self {
        TaxOption {
            category,
            rate,
            label: option_label(category, rate),
        }
    }

    /// The selection this option stands for.
    pub fn selection(&self) -> TaxSelection {
        TaxSelection::new(self.category, self.rate)
    }
}

/// `"GST (18%)"`, `"TCS (0.1%)"`.
pub fn option_label(category: TaxCategory, rate: f64) -> String {
    format!("{} ({}%)", category.label(), rate)
}

/// Ordered list of tax options. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxCatalog {
    options: Vec<TaxOption>,
}

impl TaxCatalog {
    /// GST 5/12/18/28, TDS 1/2/5/10, TCS 0.1/1.
    ///
    /// ## Example
    /// ```rust
    /// use billing_core::catalog::TaxCatalog;
    /// use billing_core::TaxCategory;
    ///
    /// let catalog = TaxCatalog::indian();
    /// assert_eq!(catalog.options().len(), 10);
    /// assert_eq!(catalog.by_category(TaxCategory::Tcs).count(), 2);
    /// ```
    pub fn indian() -> Self {
        let table: [(TaxCategory, &[f64]); 3] = [
            (TaxCategory::Gst, &[5.0, 12.0, 18.0, 28.0]),
            (TaxCategory::Tds, &[1.0, 2.0, 5.0, 10.0]),
            (TaxCategory::Tcs, &[0.1, 1.0]),
        ];

        let options = table
            .iter()
            .flat_map(|(category, rates)| rates.iter().map(move |&rate| TaxOption::new(*category, rate)))
            .collect();

        TaxCatalog { options }
    }

    /// Builds a catalog from a list of options, validating every rate.
    pub fn from_options(options: Vec<TaxOption>) -> CoreResult<Self> {
        let options = options
            .into_iter()
            .map(|mut option| -> CoreResult<TaxOption> {
                validate_tax_rate(option.rate)?;
                if option.label.trim().is_empty() {
                    option.label = option_label(option.category, option.rate);
                }
                Ok(option)
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Ok(TaxCatalog { options })
    }

    /// Parses a JSON array of options.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let options: Vec<TaxOption> = serde_json::from_str(json)?;
        Self::from_options(options)
    }

    pub fn options(&self) -> &[TaxOption] {
        &self.options
    }

    pub fn by_category(&self, category: TaxCategory) -> impl Iterator<Item = &TaxOption> {
        self.options.iter().filter(move |o| o.category == category)
    }

    /// Looks up the option matching a category and rate.
    pub fn find(&self, category: TaxCategory, rate: f64) -> Option<&TaxOption> {
        self.options
            .iter()
            .find(|o| o.category == category && o.rate == rate)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_indian_catalog_labels() {
        let catalog = TaxCatalog::indian();
        let labels: Vec<&str> = catalog.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "GST (5%)",
                "GST (12%)",
                "GST (18%)",
                "GST (28%)",
                "TDS (1%)",
                "TDS (2%)",
                "TDS (5%)",
                "TDS (10%)",
                "TCS (0.1%)",
                "TCS (1%)",
            ]
        );
    }

    #[test]
    fn test_find() {
        let catalog = TaxCatalog::indian();
        let option = catalog.find(TaxCategory::Tds, 2.0).unwrap();
        assert_eq!(option.selection(), TaxSelection::new(TaxCategory::Tds, 2.0));
        assert!(catalog.find(TaxCategory::Gst, 3.0).is_none());
    }

    #[test]
    fn test_from_json_fills_labels() {
        let catalog = TaxCatalog::from_json(
            r#"[{"category":"GST","rate":18},{"category":"TCS","rate":0.1,"label":"TCS lite"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.options()[0].label, "GST (18%)");
        assert_eq!(catalog.options()[1].label, "TCS lite");
    }

    #[test]
    fn test_from_json_rejects_bad_rate() {
        let err = TaxCatalog::from_json(r#"[{"category":"GST","rate":180}]"#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = TaxCatalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_serializes_as_array() {
        let catalog = TaxCatalog::from_options(vec![TaxOption::new(TaxCategory::Tds, 1.0)]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"category":"TDS","rate":1.0,"label":"TDS (1%)"}]"#);
    }
}
