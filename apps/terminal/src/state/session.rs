//! # Session State
//!
//! Hosts the sale session for the command layer, and the status observer
//! channel back to the parent shell.
//!
//! ## Status Signal Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Status Signal Flow                           │
//! │                                                                 │
//! │  command ──► SessionState.with_session_mut ──► SaleSession      │
//! │                     │                                           │
//! │                     │ mutator returns SaleStatus signal         │
//! │                     ▼                                           │
//! │  StatusNotifier.notify(status) ──► mpsc ──► shell loop applies  │
//! │                                             it to its own copy  │
//! │                                                                 │
//! │  Fire-and-forget: no acknowledgment, no retry. Send order       │
//! │  matches mutation order because everything is synchronous.      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{mpsc, Arc, Mutex};

use tracing::{debug, warn};

use caixa_core::{SaleSession, SaleStatus};

// =============================================================================
// Session State
// =============================================================================

/// Shared handle to the sale session.
///
/// ## Why a Mutex on a single-threaded loop?
/// Every operation runs synchronously on the shell thread today, but the
/// state handle is clonable and commands only borrow it, so the lock keeps
/// the invariant explicit instead of relying on the loop staying
/// single-threaded.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<SaleSession>>,
}

impl SessionState {
    /// Creates a state wrapper around a fresh session.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(SaleSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = state.with_session(|s| s.totals());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SaleSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_session_mut(|s| s.remove_item(&sku));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SaleSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Status Notifier
// =============================================================================

/// Fire-and-forget status callback to the owning shell.
///
/// The shell keeps the `Receiver` and the authoritative `SaleStatus`; the
/// command layer only pushes signals through here. A closed channel is logged
/// and ignored - there is no acknowledgment or retry by contract.
#[derive(Debug, Clone)]
pub struct StatusNotifier {
    tx: mpsc::Sender<SaleStatus>,
}

impl StatusNotifier {
    /// Creates a notifier and the receiving end for the parent.
    pub fn channel() -> (Self, mpsc::Receiver<SaleStatus>) {
        let (tx, rx) = mpsc::channel();
        (StatusNotifier { tx }, rx)
    }

    /// Sends a status signal to the parent.
    pub fn notify(&self, status: SaleStatus) {
        debug!(?status, "status signal");
        if self.tx.send(status).is_err() {
            warn!(?status, "status receiver dropped, signal discarded");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
