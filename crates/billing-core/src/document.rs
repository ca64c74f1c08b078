//! # Draft Lines
//!
//! The editable row list behind every "New Quote / Order / Invoice / Challan"
//! screen.
//!
//! ## Row Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen Action            Method                 Effect                 │
//! │  ─────────────            ──────                 ──────                 │
//! │                                                                         │
//! │  "Add another line" ────► push_default() ──────► row {qty 1, rate 0}    │
//! │                                                                         │
//! │  Type in a cell ────────► edit(i, field, raw) ─► row i recomputed       │
//! │                                                                         │
//! │  Trash icon ────────────► remove(i) ───────────► row i dropped          │
//! │                                 └── last row? ─► EmptyDocument          │
//! │                                                                         │
//! │  Totals box ────────────► totals(kind, charges)  (read only)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Always at least one row
//! - Every row's amount matches its inputs after each `edit`

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::totals::compute_document_totals;
use crate::types::{DocumentCharges, DocumentKind, DocumentTotals, LineField, LineItem};

/// Rows of one draft document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    /// A draft with one blank row.
    pub fn new() -> Self {
        LineItems {
            items: vec![LineItem::default()],
        }
    }

    /// Takes rows from an existing record (e.g. loaded from the API) and
    /// recomputes each amount. An empty list is replaced by one blank row.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        if items.is_empty() {
            return LineItems::new();
        }

        let items = items
            .into_iter()
            .map(|mut item| {
                item.recompute();
                item
            })
            .collect();

        LineItems { items }
    }

    /// Appends a blank row and returns its index.
    pub fn push_default(&mut self) -> usize {
        self.items.push(LineItem::default());
        self.items.len() - 1
    }

    /// Applies a cell edit to row `index`.
    pub fn edit(&mut self, index: usize, field: LineField, raw: &str) -> CoreResult<&LineItem> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::LineIndexOutOfBounds { index, len })?;
        item.apply_edit(field, raw);
        Ok(&*item)
    }

    /// Removes row `index`. The last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> CoreResult<LineItem> {
        let len = self.items.len();
        if index >= len {
            return Err(CoreError::LineIndexOutOfBounds { index, len });
        }
        if len == 1 {
            return Err(CoreError::EmptyDocument);
        }
        Ok(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true for a draft built through this type.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Totals for these rows.
    pub fn totals(&self, kind: DocumentKind, charges: &DocumentCharges) -> DocumentTotals {
        compute_document_totals(kind, &self.items, charges)
    }
}

impl Default for LineItems {
    fn default() -> Self {
        LineItems::new()
    }
}

impl<'de> Deserialize<'de> for LineItems {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<LineItem>::deserialize(deserializer).map(LineItems::from_items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
