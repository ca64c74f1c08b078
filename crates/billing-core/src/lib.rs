//! # billing-core: Document Computation for the ERP Sales Screens
//!
//! Line amounts, subtotals, tax, grand totals, currency strings and amounts
//! in words for quotes, sales orders, invoices and delivery challans. Pure
//! functions only: no I/O, no shared state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         ERP Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end screens                            │   │
//! │  │   New Quote ─ New Sales Order ─ New Invoice ─ New Challan       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ every keystroke                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ billing-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ line_item │  │  totals   │  │   money   │  │   words   │  │   │
//! │  │   │ q×r×(1-d) │  │ sub−tax+a │  │ ₹12,34,.. │  │ Lakh/Crore│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HTTP • NO PDF GEOMETRY • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │           Export / print layer (billing-cli, PDF)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items, tax selection, document kinds, totals
//! - [`line_item`] - Row amount, subtotal, lenient numeric parsing
//! - [`totals`] - Tax and grand total
//! - [`money`] - Display rounding and locale formatting
//! - [`words`] - Amount in Indian-English words
//! - [`catalog`] - Selectable tax rates
//! - [`document`] - Draft row list (never empty)
//! - [`print`] - Totals block for exported documents
//! - [`validation`] - Advisory input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use billing_core::money::{format_currency, Locale};
//! use billing_core::totals::compute_document_totals;
//! use billing_core::words::amount_to_words;
//! use billing_core::{DocumentCharges, DocumentKind, LineItem, TaxCategory, TaxSelection};
//!
//! let items = vec![
//!     LineItem::new("Widget", 2.0, 500.0, 10.0),
//!     LineItem::new("Service", 1.0, 1000.0, 0.0),
//! ];
//! let charges = DocumentCharges {
//!     tax: Some(TaxSelection::new(TaxCategory::Tds, 18.0)),
//!     adjustment: -50.0,
//!     adjustment_label: None,
//! };
//!
//! let totals = compute_document_totals(DocumentKind::Invoice, &items, &charges);
//! assert_eq!(totals.total, 1508.0);
//! assert_eq!(format_currency(totals.total, Locale::EnIn, "INR"), "₹1,508.00");
//! assert_eq!(
//!     amount_to_words(totals.total).unwrap(),
//!     "Indian Rupee One Thousand Five Hundred and Eight Only"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod line_item;
pub mod money;
pub mod print;
pub mod totals;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{TaxCatalog, TaxOption};
pub use document::LineItems;
pub use error::{CoreError, CoreResult, ValidationError};
pub use line_item::{compute_line_amount, compute_sub_total};
pub use money::{format_currency, Locale, Money};
pub use print::PrintSummary;
pub use totals::{compute_document_totals, compute_tax, compute_total};
pub use types::*;
pub use words::amount_to_words;
