//! # Commands Module
//!
//! The operations the shell exposes to the operator. Each command is a plain
//! function taking exactly the state it needs and returning a serializable
//! view - the same layering a webview frontend would invoke over IPC.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog search
//! └── sale.rs     ◄─── Cart mutation, discount, payment, finalize
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Command Flow                               │
//! │                                                                 │
//! │  Operator types: add 1002                                       │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  add_to_cart(&catalog, &session, &notifier, "1002")             │
//! │         │                                                       │
//! │         ├── catalog lookup (NOT_FOUND on unknown sku)           │
//! │         ├── session mutation under the lock                     │
//! │         ├── status signal through the notifier                  │
//! │         ▼                                                       │
//! │  Result<CartView, ApiError> rendered by the shell               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod sale;

pub use catalog::{search_catalog, CatalogItemView};
pub use sale::{
    add_to_cart, adjust_quantity, cancel_sale, finalize_sale, get_cart, remove_from_cart,
    select_payment, set_discount, CartLineView, CartTotalsView, CartView, ReceiptView,
};
