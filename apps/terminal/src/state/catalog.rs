//! # Catalog State
//!
//! Read-only handle to the seeded item catalog.
//!
//! The catalog is fixed for the whole session: it is built once at startup
//! and only ever read afterwards, so sharing an `Arc` is enough - no lock.

use std::sync::Arc;

use caixa_core::Catalog;

/// Shared, immutable catalog handle.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    /// Wraps a seeded catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caixa_core::demo_catalog;

    #[test]
    fn test_clones_share_the_same_catalog() {
        let state = CatalogState::new(demo_catalog());
        let clone = state.clone();
        assert_eq!(state.catalog().len(), clone.catalog().len());
    }
}
