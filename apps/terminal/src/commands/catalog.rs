//! # Catalog Commands
//!
//! Catalog search for the operator.
//!
//! ## Search Flow
//! ```text
//! Operator types "refrigerante" (or a sku, or barcode digits)
//!      │
//!      ▼
//! search_catalog(&catalog_state, query)
//!      │
//!      ▼
//! Catalog::filter - case-insensitive substring over name/barcode/sku,
//! empty query returns the whole assortment in catalog order
//!      │
//!      ▼
//! Vec<CatalogItemView> rendered as the pick list
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use caixa_core::CatalogItem;

use crate::state::CatalogState;

/// Catalog item DTO for the shell.
///
/// ## Why a DTO?
/// - Decouples the domain model from the rendered contract
/// - camelCase serde, matching what a JS frontend would consume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemView {
    pub sku: String,
    pub name: String,
    pub barcode: String,
    pub unit_price_cents: i64,
    pub stock_quantity: i64,
}

impl From<&CatalogItem> for CatalogItemView {
    fn from(item: &CatalogItem) -> Self {
        CatalogItemView {
            sku: item.sku.clone(),
            name: item.name.clone(),
            barcode: item.barcode.clone(),
            unit_price_cents: item.unit_price_cents,
            stock_quantity: item.stock_quantity,
        }
    }
}

/// Searches the catalog by free text.
///
/// Pure read: no state changes, no status signal. The result preserves
/// catalog order.
pub fn search_catalog(catalog: &CatalogState, query: &str) -> Vec<CatalogItemView> {
    let results: Vec<CatalogItemView> = catalog
        .catalog()
        .filter(query)
        .map(CatalogItemView::from)
        .collect();

    debug!(query = %query, hits = results.len(), "search_catalog command");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_core::demo_catalog;

    #[test]
    fn test_search_empty_query_returns_everything() {
        let state = CatalogState::new(demo_catalog());
        let all = search_catalog(&state, "");
        assert_eq!(all.len(), 8);
        assert_eq!(all[0].sku, "1001");
    }

    #[test]
    fn test_search_by_name_fragment() {
        let state = CatalogState::new(demo_catalog());
        let hits = search_catalog(&state, "café");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sku, "1007");
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let state = CatalogState::new(demo_catalog());
        let hits = search_catalog(&state, "1001");
        let json = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(json["unitPriceCents"], 2590);
        assert_eq!(json["stockQuantity"], 34);
    }
}
