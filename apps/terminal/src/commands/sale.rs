//! # Sale Commands
//!
//! Cart mutation, discount, payment selection, and sale close-out.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Sale Lifecycle                             │
//! │                                                                 │
//! │  ┌────────┐    add_to_cart     ┌────────────┐                   │
//! │  │  Open  │───────────────────►│ InProgress │                   │
//! │  └────────┘                    └─────┬──────┘                   │
//! │      ▲                               │                          │
//! │      │ cancel_sale        finalize_sale (guarded: cart          │
//! │      │                               │  must be non-empty)      │
//! │      │                         ┌─────▼──────┐                   │
//! │      └─────────────────────────│ Finalized  │                   │
//! │                                └─────┬──────┘                   │
//! │                                      │ add_to_cart              │
//! │                                      ▼ (next sale)              │
//! │                                 InProgress                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation returns the updated `CartView` so the shell can re-render
//! without a second read.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use caixa_core::{Money, PaymentMethod, Receipt, SaleSession};

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState, StatusNotifier};

// =============================================================================
// Views
// =============================================================================

/// One cart line as the shell renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub sku: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

/// Derived totals as the shell renders them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotalsView {
    pub subtotal_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
}

/// Full cart response: lines, totals, selections, and the finalize guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotalsView,
    pub payment_method: PaymentMethod,
    /// Whether the finalize action is enabled. False exactly when the cart
    /// is empty - the shell disables the action rather than letting it fail.
    pub can_finalize: bool,
}

impl CartView {
    fn from_session(session: &SaleSession) -> Self {
        let totals = session.totals();
        CartView {
            lines: session
                .cart()
                .lines
                .iter()
                .map(|line| CartLineView {
                    sku: line.sku.clone(),
                    name: line.name.clone(),
                    unit_price_cents: line.unit_price_cents,
                    quantity: line.quantity,
                    line_total_cents: line.line_total_cents(),
                })
                .collect(),
            totals: CartTotalsView {
                subtotal_cents: totals.subtotal_cents,
                discount_cents: totals.discount_cents,
                total_cents: totals.total_cents,
            },
            payment_method: session.payment_method(),
            can_finalize: session.can_finalize(),
        }
    }
}

/// Receipt as rendered after close-out. Snapshot of the finalized sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub id: String,
    pub lines: Vec<CartLineView>,
    pub totals: CartTotalsView,
    pub payment_method: PaymentMethod,
    pub finalized_at: String,
}

impl From<&Receipt> for ReceiptView {
    fn from(receipt: &Receipt) -> Self {
        ReceiptView {
            id: receipt.id.to_string(),
            lines: receipt
                .lines
                .iter()
                .map(|line| CartLineView {
                    sku: line.sku.clone(),
                    name: line.name.clone(),
                    unit_price_cents: line.unit_price_cents,
                    quantity: line.quantity,
                    line_total_cents: line.line_total_cents(),
                })
                .collect(),
            totals: CartTotalsView {
                subtotal_cents: receipt.totals.subtotal_cents,
                discount_cents: receipt.totals.discount_cents,
                total_cents: receipt.totals.total_cents,
            },
            payment_method: receipt.payment_method,
            finalized_at: receipt.finalized_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents and totals. Read-only.
pub fn get_cart(session: &SessionState) -> CartView {
    debug!("get_cart command");
    session.with_session(CartView::from_session)
}

/// Rings up a catalog item by SKU.
///
/// ## Behavior
/// - Unknown sku: NOT_FOUND error (nothing to snapshot a price from)
/// - Item already in cart: quantity increments
/// - Signals `InProgress` to the parent - every add means a sale is running
pub fn add_to_cart(
    catalog: &CatalogState,
    session: &SessionState,
    notifier: &StatusNotifier,
    sku: &str,
) -> Result<CartView, ApiError> {
    debug!(sku = %sku, "add_to_cart command");

    let item = catalog
        .catalog()
        .get(sku)
        .ok_or_else(|| ApiError::not_found(sku))?
        .clone();

    let (status, view) = session.with_session_mut(|s| {
        let status = s.add_item(&item);
        (status, CartView::from_session(s))
    });

    notifier.notify(status);
    Ok(view)
}

/// Applies a delta to a cart line's quantity.
///
/// A line reaching zero or below is removed; an absent sku is a silent
/// no-op. No status signal - adjusting quantities doesn't change the sale
/// lifecycle.
pub fn adjust_quantity(session: &SessionState, sku: &str, delta: i64) -> CartView {
    debug!(sku = %sku, delta = %delta, "adjust_quantity command");

    session.with_session_mut(|s| {
        s.adjust_quantity(sku, delta);
        CartView::from_session(s)
    })
}

/// Removes a cart line unconditionally. Absent sku is a silent no-op.
pub fn remove_from_cart(session: &SessionState, sku: &str) -> CartView {
    debug!(sku = %sku, "remove_from_cart command");

    session.with_session_mut(|s| {
        s.remove_item(sku);
        CartView::from_session(s)
    })
}

/// Sets the sale discount from operator-typed text.
///
/// The text is coerced to a monetary amount (`Money::parse_decimal`); only
/// the sign is validated. There is no upper bound - the total floors at
/// zero when the discount exceeds the subtotal.
pub fn set_discount(session: &SessionState, amount: &str) -> Result<CartView, ApiError> {
    debug!(amount = %amount, "set_discount command");

    let discount = Money::parse_decimal(amount)?;
    session.with_session_mut(|s| {
        s.set_discount(discount)?;
        Ok(CartView::from_session(s))
    })
}

/// Selects the payment method from operator-typed text.
pub fn select_payment(session: &SessionState, method: &str) -> Result<CartView, ApiError> {
    debug!(method = %method, "select_payment command");

    let method = PaymentMethod::parse(method)
        .ok_or_else(|| ApiError::validation(format!("Unknown payment method: {method}")))?;

    Ok(session.with_session_mut(|s| {
        s.select_payment(method);
        CartView::from_session(s)
    }))
}

/// Closes out the current sale.
///
/// ## Behavior
/// - Empty cart: CART_ERROR (the shell keeps the action disabled, so this
///   path only triggers when the guard is bypassed)
/// - Otherwise: returns the receipt snapshot, resets the session for the
///   next customer, and signals `Finalized`
pub fn finalize_sale(
    session: &SessionState,
    notifier: &StatusNotifier,
) -> Result<ReceiptView, ApiError> {
    debug!("finalize_sale command");

    let (receipt, status) = session.with_session_mut(|s| s.finalize_sale())?;
    notifier.notify(status);

    info!(
        receipt_id = %receipt.id,
        total_cents = receipt.totals.total_cents,
        method = ?receipt.payment_method,
        "sale finalized"
    );

    Ok(ReceiptView::from(&receipt))
}

/// Cancels the current sale: empties the cart, resets discount and payment,
/// and signals `Open`.
pub fn cancel_sale(session: &SessionState, notifier: &StatusNotifier) -> CartView {
    debug!("cancel_sale command");

    let (status, view) = session.with_session_mut(|s| {
        let status = s.clear_sale();
        (status, CartView::from_session(s))
    });

    notifier.notify(status);
    view
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CatalogState;
    use caixa_core::{demo_catalog, SaleStatus};

    fn setup() -> (CatalogState, SessionState, StatusNotifier, std::sync::mpsc::Receiver<SaleStatus>) {
        let (notifier, rx) = StatusNotifier::channel();
        (
            CatalogState::new(demo_catalog()),
            SessionState::new(),
            notifier,
            rx,
        )
    }

    #[test]
    fn test_add_to_cart_returns_updated_view_and_signals() {
        let (catalog, session, notifier, rx) = setup();

        let view = add_to_cart(&catalog, &session, &notifier, "1002").unwrap();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].quantity, 1);
        assert_eq!(view.totals.subtotal_cents, 850);
        assert!(view.can_finalize);

        assert_eq!(rx.try_recv(), Ok(SaleStatus::InProgress));
    }

    #[test]
    fn test_add_unknown_sku_is_not_found_and_no_signal() {
        let (catalog, session, notifier, rx) = setup();

        let err = add_to_cart(&catalog, &session, &notifier, "9999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(rx.try_recv().is_err());
        assert!(get_cart(&session).lines.is_empty());
    }

    #[test]
    fn test_adjust_and_remove_are_silent_on_absent_sku() {
        let (_catalog, session, _notifier, _rx) = setup();

        let view = adjust_quantity(&session, "9999", 1);
        assert!(view.lines.is_empty());

        let view = remove_from_cart(&session, "9999");
        assert!(view.lines.is_empty());
    }

    #[test]
    fn test_decrement_to_zero_removes_line_and_disables_finalize() {
        let (catalog, session, notifier, _rx) = setup();

        add_to_cart(&catalog, &session, &notifier, "1006").unwrap();
        let view = adjust_quantity(&session, "1006", -1);

        assert!(view.lines.is_empty());
        assert!(!view.can_finalize);
    }

    #[test]
    fn test_set_discount_coerces_text_and_floors_total() {
        let (catalog, session, notifier, _rx) = setup();

        // Ring up 42.90 worth: 1001 once, 1002 twice
        add_to_cart(&catalog, &session, &notifier, "1001").unwrap();
        add_to_cart(&catalog, &session, &notifier, "1002").unwrap();
        add_to_cart(&catalog, &session, &notifier, "1002").unwrap();

        let view = set_discount(&session, "50").unwrap();
        assert_eq!(view.totals.subtotal_cents, 4290);
        assert_eq!(view.totals.discount_cents, 5000);
        assert_eq!(view.totals.total_cents, 0);
    }

    #[test]
    fn test_set_discount_rejects_garbage_and_negatives() {
        let (_catalog, session, _notifier, _rx) = setup();

        assert_eq!(
            set_discount(&session, "abc").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            set_discount(&session, "-5").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_select_payment() {
        let (_catalog, session, _notifier, _rx) = setup();

        let view = select_payment(&session, "pix").unwrap();
        assert_eq!(view.payment_method, PaymentMethod::Pix);

        let err = select_payment(&session, "cheque").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_finalize_empty_cart_is_cart_error() {
        let (_catalog, session, notifier, rx) = setup();

        let err = finalize_sale(&session, &notifier).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_finalize_emits_receipt_and_resets() {
        let (catalog, session, notifier, rx) = setup();

        add_to_cart(&catalog, &session, &notifier, "1001").unwrap();
        select_payment(&session, "debito").unwrap();
        let receipt = finalize_sale(&session, &notifier).unwrap();

        assert_eq!(receipt.lines.len(), 1);
        assert_eq!(receipt.totals.total_cents, 2590);
        assert_eq!(receipt.payment_method, PaymentMethod::Debit);

        // Session reset: empty cart, default payment, finalize disabled
        let view = get_cart(&session);
        assert!(view.lines.is_empty());
        assert_eq!(view.payment_method, PaymentMethod::Cash);
        assert!(!view.can_finalize);

        let signals: Vec<_> = rx.try_iter().collect();
        assert_eq!(signals, vec![SaleStatus::InProgress, SaleStatus::Finalized]);
    }

    #[test]
    fn test_cancel_sale_resets_and_signals_open() {
        let (catalog, session, notifier, rx) = setup();

        add_to_cart(&catalog, &session, &notifier, "1005").unwrap();
        set_discount(&session, "1.00").unwrap();

        let view = cancel_sale(&session, &notifier);
        assert!(view.lines.is_empty());
        assert_eq!(view.totals.discount_cents, 0);
        assert_eq!(view.payment_method, PaymentMethod::Cash);

        let signals: Vec<_> = rx.try_iter().collect();
        assert_eq!(signals, vec![SaleStatus::InProgress, SaleStatus::Open]);
    }

    #[test]
    fn test_cart_view_serializes_camel_case() {
        let (catalog, session, notifier, _rx) = setup();
        add_to_cart(&catalog, &session, &notifier, "1001").unwrap();

        let json = serde_json::to_value(get_cart(&session)).unwrap();
        assert_eq!(json["totals"]["subtotalCents"], 2590);
        assert_eq!(json["canFinalize"], true);
        assert_eq!(json["paymentMethod"], "cash");
        assert_eq!(json["lines"][0]["lineTotalCents"], 2590);
    }
}
