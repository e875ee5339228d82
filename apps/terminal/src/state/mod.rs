//! # State Module
//!
//! Application state for the terminal shell.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, separate
//! focused state types:
//!
//! 1. **Better Separation of Concerns**: each type has one responsibility
//! 2. **Clearer Command Signatures**: commands declare exactly what they need
//! 3. **Easier Testing**: states can be constructed independently
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      State Architecture                         │
//! │                                                                 │
//! │  ┌───────────────┐  ┌────────────────┐  ┌────────────────────┐  │
//! │  │ CatalogState  │  │  SessionState  │  │  StatusNotifier    │  │
//! │  │               │  │                │  │                    │  │
//! │  │  Arc<Catalog> │  │  Arc<Mutex<    │  │  mpsc::Sender<     │  │
//! │  │  (read-only)  │  │   SaleSession  │  │   SaleStatus>      │  │
//! │  │               │  │  >>            │  │  fire-and-forget   │  │
//! │  └───────────────┘  └────────────────┘  └────────────────────┘  │
//! │                                                                 │
//! │  THREAD SAFETY:                                                 │
//! │  • CatalogState: immutable after seeding, shared freely         │
//! │  • SessionState: Arc<Mutex<T>> for exclusive mutation           │
//! │  • StatusNotifier: Sender is clonable; the parent owns the      │
//! │    Receiver and the authoritative SaleStatus                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod session;

pub use catalog::CatalogState;
pub use session::{SessionState, StatusNotifier};
