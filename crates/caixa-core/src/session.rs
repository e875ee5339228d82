//! # Sale Session
//!
//! The engine behind the register screen: one `SaleSession` owns the cart,
//! the sale-level discount, and the selected payment method, and derives the
//! totals from them on every change.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Sale Session Lifecycle                      │
//! │                                                                 │
//! │  ring item ──► add_item ──────────► signals InProgress          │
//! │  +/- line  ──► adjust_quantity ──► (no signal)                  │
//! │  remove    ──► remove_item ──────► (no signal)                  │
//! │  cancel    ──► clear_sale ───────► signals Open                 │
//! │  finalize  ──► finalize_sale ────► Receipt + signals Finalized  │
//! │                │                                                │
//! │                └── guarded: error on an empty cart              │
//! │                                                                 │
//! │  totals() is recomputed from (cart, discount) after any change  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Ownership
//! `SaleStatus` belongs to the parent shell, not to the session. Mutators
//! that move the sale through its lifecycle RETURN the status signal they
//! emit; the shell applies it to its own copy (and may fan it out through an
//! observer channel). The session itself never stores a status.

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CatalogItem, PaymentMethod, Receipt, SaleStatus, SaleTotals};
use crate::validation::validate_discount;

// =============================================================================
// Sale Session
// =============================================================================

/// The state of the sale in progress at one register.
///
/// ## Invariants
/// - Discount is never negative (rejected at the setter)
/// - Clearing or finalizing resets discount to zero and the payment method
///   to the first available one, exactly the same way
#[derive(Debug, Clone)]
pub struct SaleSession {
    cart: Cart,
    discount: Money,
    payment_method: PaymentMethod,
}

impl SaleSession {
    /// Creates a session with an empty cart, no discount, and the default
    /// payment method selected.
    pub fn new() -> Self {
        SaleSession {
            cart: Cart::new(),
            discount: Money::zero(),
            payment_method: PaymentMethod::first(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Rings up a catalog item: appends a line or increments the existing
    /// one. Always signals `InProgress` - adding to a freshly finalized
    /// register starts the next sale.
    #[must_use = "apply the returned status signal to the parent's SaleStatus"]
    pub fn add_item(&mut self, item: &CatalogItem) -> SaleStatus {
        self.cart.add_item(item);
        SaleStatus::InProgress
    }

    /// Applies a delta to a line's quantity; the line is removed when it
    /// reaches zero or below. Silent no-op on an absent SKU.
    pub fn adjust_quantity(&mut self, sku: &str, delta: i64) {
        self.cart.adjust_quantity(sku, delta);
    }

    /// Removes a line unconditionally. Silent no-op on an absent SKU.
    pub fn remove_item(&mut self, sku: &str) {
        self.cart.remove_item(sku);
    }

    /// Sets the sale-level discount.
    ///
    /// Negative amounts are rejected; there is no upper bound. A discount
    /// exceeding the subtotal is legal and the grand total floors at zero.
    pub fn set_discount(&mut self, discount: Money) -> CoreResult<()> {
        validate_discount(discount)?;
        self.discount = discount;
        Ok(())
    }

    /// Selects the payment method for the sale.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Cancels the sale: empties the cart, resets discount and payment
    /// method, and signals `Open`.
    #[must_use = "apply the returned status signal to the parent's SaleStatus"]
    pub fn clear_sale(&mut self) -> SaleStatus {
        self.reset();
        SaleStatus::Open
    }

    /// Closes out the sale.
    ///
    /// ## Behavior
    /// - Errors with [`CoreError::EmptyCart`] when nothing has been rung up
    ///   (the shell keeps the action disabled in that state)
    /// - Otherwise: freezes the lines and totals into a [`Receipt`], resets
    ///   cart/discount/payment exactly as [`clear_sale`](Self::clear_sale),
    ///   and signals `Finalized`
    pub fn finalize_sale(&mut self) -> CoreResult<(Receipt, SaleStatus)> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            lines: self.cart.lines.clone(),
            totals: self.totals(),
            payment_method: self.payment_method,
            finalized_at: Utc::now(),
        };

        self.reset();
        Ok((receipt, SaleStatus::Finalized))
    }

    fn reset(&mut self) {
        self.cart.clear();
        self.discount = Money::zero();
        self.payment_method = PaymentMethod::first();
    }

    // -------------------------------------------------------------------------
    // Derived State & Accessors
    // -------------------------------------------------------------------------

    /// Current totals, recomputed from the cart and discount.
    pub fn totals(&self) -> SaleTotals {
        SaleTotals::compute(self.cart.subtotal(), self.discount)
    }

    /// Whether finalize is currently allowed (the shell's enabled/disabled
    /// state for the finalize button).
    pub fn can_finalize(&self) -> bool {
        !self.cart.is_empty()
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current sale-level discount.
    pub fn discount(&self) -> Money {
        self.discount
    }

    /// The currently selected payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

impl Default for SaleSession {
    fn default() -> Self {
        SaleSession::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn test_add_item_signals_in_progress() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();

        let status = session.add_item(catalog.get("1001").unwrap());
        assert_eq!(status, SaleStatus::InProgress);
        assert_eq!(session.cart().line_count(), 1);
    }

    /// Scenario: add 1001 (R$ 25.90) once and 1002 (R$ 8.50) twice.
    #[test]
    fn test_two_line_sale_totals() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();
        let arroz = catalog.get("1001").unwrap();
        let feijao = catalog.get("1002").unwrap();

        let _ = session.add_item(arroz);
        let _ = session.add_item(feijao);
        let _ = session.add_item(feijao);

        let cart = session.cart();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.find("1001").map(|l| l.quantity), Some(1));
        assert_eq!(cart.find("1002").map(|l| l.quantity), Some(2));

        // 25.90 + 17.00 = 42.90
        assert_eq!(session.totals().subtotal_cents, 4290);
        assert_eq!(session.totals().total_cents, 4290);
    }

    /// Scenario: with subtotal R$ 42.90 and discount R$ 50.00, total is zero.
    #[test]
    fn test_discount_exceeding_subtotal_floors_total_at_zero() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();

        let _ = session.add_item(catalog.get("1001").unwrap());
        let _ = session.add_item(catalog.get("1002").unwrap());
        let _ = session.add_item(catalog.get("1002").unwrap());
        session.set_discount(Money::from_cents(5000)).unwrap();

        let totals = session.totals();
        assert_eq!(totals.subtotal_cents, 4290);
        assert_eq!(totals.discount_cents, 5000);
        assert_eq!(totals.total_cents, 0);
    }

    #[test]
    fn test_discount_recomputes_totals_on_every_change() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();
        let _ = session.add_item(catalog.get("1005").unwrap()); // 9.90

        session.set_discount(Money::from_cents(100)).unwrap();
        assert_eq!(session.totals().total_cents, 890);

        session.set_discount(Money::from_cents(200)).unwrap();
        assert_eq!(session.totals().total_cents, 790);

        // Cart change after the discount also reflows the total
        let _ = session.add_item(catalog.get("1005").unwrap());
        assert_eq!(session.totals().total_cents, 1780);
    }

    #[test]
    fn test_negative_discount_rejected() {
        let mut session = SaleSession::new();
        assert!(session.set_discount(Money::from_cents(-100)).is_err());
        assert_eq!(session.discount(), Money::zero());
    }

    #[test]
    fn test_finalize_on_empty_cart_is_guarded() {
        let mut session = SaleSession::new();
        assert!(!session.can_finalize());
        assert!(matches!(session.finalize_sale(), Err(CoreError::EmptyCart)));
    }

    /// Scenario: finalize clears the cart, signals Finalized, and the next
    /// add_item re-enters InProgress with a fresh single-line cart.
    #[test]
    fn test_finalize_then_next_sale() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();
        let item = catalog.get("1003").unwrap();

        let _ = session.add_item(item);
        assert!(session.can_finalize());

        let (receipt, status) = session.finalize_sale().unwrap();
        assert_eq!(status, SaleStatus::Finalized);
        assert!(session.cart().is_empty());
        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.totals.total_cents, 520);

        let status = session.add_item(item);
        assert_eq!(status, SaleStatus::InProgress);
        assert_eq!(session.cart().line_count(), 1);
        assert_eq!(session.cart().find("1003").map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_finalize_resets_discount_and_payment_like_clear() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();

        let _ = session.add_item(catalog.get("1001").unwrap());
        session.set_discount(Money::from_cents(500)).unwrap();
        session.select_payment(PaymentMethod::Pix);

        let (receipt, _) = session.finalize_sale().unwrap();

        // The receipt keeps the sale's selections...
        assert_eq!(receipt.payment_method, PaymentMethod::Pix);
        assert_eq!(receipt.totals.discount_cents, 500);

        // ...while the session resets for the next customer
        assert_eq!(session.discount(), Money::zero());
        assert_eq!(session.payment_method(), PaymentMethod::first());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_clear_sale_resets_everything_and_signals_open() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();

        let _ = session.add_item(catalog.get("1001").unwrap());
        session.set_discount(Money::from_cents(300)).unwrap();
        session.select_payment(PaymentMethod::Debit);

        let status = session.clear_sale();
        assert_eq!(status, SaleStatus::Open);
        assert!(session.cart().is_empty());
        assert_eq!(session.discount(), Money::zero());
        assert_eq!(session.payment_method(), PaymentMethod::first());
    }

    #[test]
    fn test_adjust_to_zero_then_finalize_is_guarded_again() {
        let catalog = demo_catalog();
        let mut session = SaleSession::new();
        let _ = session.add_item(catalog.get("1006").unwrap());

        session.adjust_quantity("1006", -1);
        assert!(session.cart().is_empty());
        assert!(!session.can_finalize());
        assert!(session.finalize_sale().is_err());
    }
}
