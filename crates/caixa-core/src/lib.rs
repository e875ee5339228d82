//! # caixa-core: Pure Business Logic for Caixa POS
//!
//! This crate is the **heart** of the register. It contains the whole sale
//! cart engine as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Caixa POS Architecture                       │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                apps/terminal (shell layer)                │  │
//! │  │   stdin loop ──► commands ──► SessionState (Arc<Mutex>)   │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │             ★ caixa-core (THIS CRATE) ★                   │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────┐ ┌─────────┐ ┌────────┐  │  │
//! │  │  │ catalog │ │  money  │ │ cart │ │ session │ │ types  │  │  │
//! │  │  │ filter  │ │ centavos│ │ lines│ │ totals  │ │ status │  │  │
//! │  │  └─────────┘ └─────────┘ └──────┘ └─────────┘ └────────┘  │  │
//! │  │                                                           │  │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS       │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, SaleStatus, PaymentMethod, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The read-only item catalog and its search filter
//! - [`cart`] - The mutable cart and its line invariants
//! - [`session`] - The sale session tying cart, discount, and payment together
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every derivation (filter, totals) is deterministic
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are centavos (i64), never floats
//! 4. **Signals, not callbacks**: lifecycle mutators return the `SaleStatus`
//!    they emit; the owning shell applies it
//!
//! ## Example Usage
//!
//! ```rust
//! use caixa_core::catalog::demo_catalog;
//! use caixa_core::session::SaleSession;
//! use caixa_core::types::SaleStatus;
//!
//! let catalog = demo_catalog();
//! let mut session = SaleSession::new();
//!
//! let status = session.add_item(catalog.get("1001").unwrap());
//! assert_eq!(status, SaleStatus::InProgress);
//! assert_eq!(session.totals().subtotal_cents, 2590);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use caixa_core::Money` instead of
// `use caixa_core::money::Money`

pub use cart::{Cart, CartLine};
pub use catalog::{demo_catalog, Catalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::SaleSession;
pub use types::{CatalogItem, PaymentMethod, Receipt, SaleStatus, SaleTotals};
