//! # Cart Module
//!
//! The mutable ordered list of lines for the sale in progress.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Cart State Operations                       │
//! │                                                                 │
//! │  Operator Action           Cart Change                          │
//! │  ───────────────           ───────────                          │
//! │  Ring up item ───────────► add_item: insert line or qty += 1    │
//! │  +/- on a line ──────────► adjust_quantity: qty += delta,       │
//! │                            line removed when qty ≤ 0            │
//! │  Remove button ──────────► remove_item: line deleted            │
//! │  Cancel / finalize ──────► clear: back to empty                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per SKU (ringing the same item again increments it)
//! - Line quantity is always > 0 (a line hitting ≤ 0 is removed, never kept
//!   at zero)
//! - Mutations on a SKU that is not in the cart are silent no-ops

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CatalogItem;

// =============================================================================
// Cart Line
// =============================================================================

/// One aggregated entry in the cart for a given SKU.
///
/// ## Price Freezing
/// `unit_price_cents` (and the display name) are captured when the item is
/// first rung up and never re-read from the catalog. The cart stays
/// consistent even if the catalog were edited mid-sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// SKU of the catalog item this line aggregates.
    pub sku: String,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in centavos at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity rung up. Always > 0.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line from a catalog item with quantity 1.
    fn from_item(item: &CatalogItem) -> Self {
        CartLine {
            sku: item.sku.clone(),
            name: item.name.clone(),
            unit_price_cents: item.unit_price_cents,
            quantity: 1,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Extended price for the line (unit price × quantity), in centavos.
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Extended price for the line as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The sale cart: an ordered sequence of lines.
///
/// Insertion order is display order only; it carries no other meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in the cart, in the order they were first rung up.
    pub lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    pub opened_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    /// Adds a catalog item to the cart.
    ///
    /// ## Behavior
    /// - If a line for the item's SKU exists: its quantity increases by 1
    /// - Otherwise: a new line is appended with quantity 1 and the price
    ///   snapshotted from the catalog item
    pub fn add_item(&mut self, item: &CatalogItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.sku == item.sku) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_item(item));
    }

    /// Applies a delta to a line's quantity.
    ///
    /// ## Behavior
    /// - The line's quantity moves by `delta` (positive or negative)
    /// - A resulting quantity ≤ 0 removes the line entirely; no
    ///   zero-quantity line ever persists
    /// - Silent no-op if no line matches the SKU
    pub fn adjust_quantity(&mut self, sku: &str, delta: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.sku == sku) {
            line.quantity += delta;
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Removes a line unconditionally. Silent no-op if the SKU is absent.
    pub fn remove_item(&mut self, sku: &str) {
        self.lines.retain(|l| l.sku != sku);
    }

    /// Looks up the line for a SKU, if any.
    pub fn find(&self, sku: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.sku == sku)
    }

    /// Clears all lines and restarts the open timestamp.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.opened_at = Utc::now();
    }

    /// Number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal: the sum of per-line extended prices, in centavos.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
