//! # Catalog Module
//!
//! The fixed, read-only list of purchasable items, plus the operator search
//! over it.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Catalog Search Flow                         │
//! │                                                                 │
//! │  Operator types "1004" or "refrigerante"                        │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Catalog::filter(query)                                         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Case-insensitive substring match over "name barcode sku"       │
//! │  Empty query → full catalog, original order preserved           │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  Lazy iterator of matching &CatalogItem                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The filter is a pure function of (catalog, query): no side effects, and
//! the result is always a subsequence of the catalog in construction order.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::types::CatalogItem;
use crate::validation::{
    validate_item_name, validate_price_cents, validate_sku, validate_stock_quantity,
};

// =============================================================================
// Catalog
// =============================================================================

/// The session's item catalog.
///
/// ## Invariants
/// - SKUs are unique
/// - Every item passed field validation at construction
/// - Order is construction order and never changes (it is display order only)
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, validating every item and rejecting duplicate SKUs.
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        let mut seen = HashSet::new();

        for item in &items {
            validate_sku(&item.sku)?;
            validate_item_name(&item.name)?;
            validate_price_cents(item.unit_price_cents)?;
            validate_stock_quantity(item.stock_quantity)?;

            if !seen.insert(item.sku.clone()) {
                return Err(CoreError::DuplicateSku(item.sku.clone()));
            }
        }

        Ok(Catalog { items })
    }

    /// Looks up an item by SKU.
    pub fn get(&self, sku: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filters the catalog by a free-text query.
    ///
    /// ## Contract
    /// - Case-insensitive substring match against the item's name, barcode,
    ///   or SKU
    /// - An empty (or all-whitespace) query matches everything
    /// - Result preserves catalog order and is lazy: nothing is scanned
    ///   until the iterator is consumed
    ///
    /// ## Example
    /// ```rust
    /// use caixa_core::catalog::demo_catalog;
    ///
    /// let catalog = demo_catalog();
    /// let hits: Vec<_> = catalog.filter("refrigerante").collect();
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].sku, "1005");
    /// ```
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        let term = query.trim().to_lowercase();

        self.items.iter().filter(move |item| {
            if term.is_empty() {
                return true;
            }
            format!("{} {} {}", item.name, item.barcode, item.sku)
                .to_lowercase()
                .contains(&term)
        })
    }
}

// =============================================================================
// Demo Seed Data
// =============================================================================

/// The demo grocery catalog the register is seeded with.
///
/// Prices are in centavos. The data matches the mock assortment the shop
/// floor uses for training sessions.
pub fn demo_catalog() -> Catalog {
    let items = vec![
        item("1001", "Arroz 5kg Premium", "789100001", 2590, 34),
        item("1002", "Feijão Carioca 1kg", "789100002", 850, 52),
        item("1003", "Macarrão Espaguete 500g", "789100003", 520, 41),
        item("1004", "Óleo de Soja 900ml", "789100004", 690, 63),
        item("1005", "Refrigerante 2L Cola", "789100005", 990, 22),
        item("1006", "Biscoito Recheado 140g", "789100006", 350, 88),
        item("1007", "Café Torrado 500g", "789100007", 1640, 19),
        item("1008", "Sabão em Pó 1,6kg", "789100008", 2480, 27),
    ];

    // Seed data is static and pre-validated; a failure here is a programming
    // error in the literals above.
    Catalog::new(items).expect("demo catalog seed data is valid")
}

fn item(sku: &str, name: &str, barcode: &str, unit_price_cents: i64, stock: i64) -> CatalogItem {
    CatalogItem {
        sku: sku.to_string(),
        name: name.to_string(),
        barcode: barcode.to_string(),
        unit_price_cents,
        stock_quantity: stock,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
