//! # Domain Types
//!
//! Core domain types used throughout Caixa POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌───────────────┐   ┌───────────────┐   ┌──────────────────┐   │
//! │  │  CatalogItem  │   │  SaleTotals   │   │     Receipt      │   │
//! │  │  ───────────  │   │  ───────────  │   │  ──────────────  │   │
//! │  │  sku          │   │  subtotal     │   │  id (UUID)       │   │
//! │  │  name         │   │  discount     │   │  lines snapshot  │   │
//! │  │  barcode      │   │  total        │   │  totals          │   │
//! │  │  price_cents  │   └───────────────┘   │  payment_method  │   │
//! │  │  stock        │                       └──────────────────┘   │
//! │  └───────────────┘                                              │
//! │                                                                 │
//! │  ┌───────────────┐   ┌───────────────┐                          │
//! │  │  SaleStatus   │   │ PaymentMethod │                          │
//! │  │  ───────────  │   │  ───────────  │                          │
//! │  │  Open         │   │  Cash Credit  │                          │
//! │  │  InProgress   │   │  Debit Pix    │                          │
//! │  │  Finalized    │   │  Voucher      │                          │
//! │  └───────────────┘   └───────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Catalog Item
// =============================================================================

/// An item available for sale.
///
/// Immutable for the session: the catalog is seeded once at startup and the
/// cart only ever reads from it. The cart snapshots `unit_price_cents` at
/// add time, so later catalog edits (none exist today) would not reprice
/// lines already rung up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stock Keeping Unit - unique business identifier.
    pub sku: String,

    /// Display name shown to the operator and on the receipt.
    pub name: String,

    /// Barcode (EAN-13 style digits in the demo data).
    pub barcode: String,

    /// Unit price in centavos (smallest currency unit).
    pub unit_price_cents: i64,

    /// Current stock level, display-only for the cashier.
    pub stock_quantity: i64,
}

impl CatalogItem {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

// =============================================================================
// Sale Status
// =============================================================================

/// The status of the register's current sale, owned by the parent shell.
///
/// ## State Machine
/// ```text
/// Open ──(add_item)──► InProgress ──(finalize_sale)──► Finalized
///   ▲                      ▲                               │
///   │                      └───────────(add_item)──────────┘
///   └──────────(clear_sale, from any state)────────────────┘
/// ```
///
/// Finalized is not terminal: the next `add_item` begins a fresh sale and
/// re-enters InProgress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Register is free, no items rung up.
    Open,
    /// Items are being added to the cart.
    InProgress,
    /// The last sale has been paid and closed out.
    Finalized,
}

impl Default for SaleStatus {
    fn default() -> Self {
        SaleStatus::Open
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Payment methods offered at the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Credit card.
    Credit,
    /// Debit card.
    Debit,
    /// Pix instant transfer.
    Pix,
    /// Meal/food voucher.
    Voucher,
}

impl PaymentMethod {
    /// All methods in the order the register presents them.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cash,
        PaymentMethod::Credit,
        PaymentMethod::Debit,
        PaymentMethod::Pix,
        PaymentMethod::Voucher,
    ];

    /// The first available method; clearing a sale resets the selection here.
    #[inline]
    pub const fn first() -> Self {
        PaymentMethod::Cash
    }

    /// Display label for the operator.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Credit => "Crédito",
            PaymentMethod::Debit => "Débito",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Voucher => "Voucher",
        }
    }

    /// Parses an operator-typed method name (case-insensitive, accepts the
    /// English enum name or the Portuguese label without accents).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "cash" | "dinheiro" => Some(PaymentMethod::Cash),
            "credit" | "credito" | "crédito" => Some(PaymentMethod::Credit),
            "debit" | "debito" | "débito" => Some(PaymentMethod::Debit),
            "pix" => Some(PaymentMethod::Pix),
            "voucher" => Some(PaymentMethod::Voucher),
            _ => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::first()
    }
}

// =============================================================================
// Sale Totals
// =============================================================================

/// Derived totals for the sale in progress.
///
/// Never stored: recomputed from the cart and discount on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTotals {
    /// Sum of per-line extended prices, in centavos.
    pub subtotal_cents: i64,
    /// Discount applied to the whole sale, in centavos.
    pub discount_cents: i64,
    /// Grand total: subtotal minus discount, floored at zero.
    pub total_cents: i64,
}

impl SaleTotals {
    /// Computes totals from a subtotal and discount.
    ///
    /// The floor at zero is deliberate: a discount exceeding the subtotal
    /// yields a total of zero, never a negative amount owed to the customer.
    pub fn compute(subtotal: Money, discount: Money) -> Self {
        SaleTotals {
            subtotal_cents: subtotal.cents(),
            discount_cents: discount.cents(),
            total_cents: subtotal.sub_floor_zero(discount).cents(),
        }
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The record produced when a sale is finalized.
///
/// Uses the snapshot pattern: the lines and totals are frozen copies taken at
/// finalize time, so the receipt stays accurate after the cart resets for the
/// next customer. Nothing persists it; the caller renders it and moves on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Unique identifier (UUID v4).
    pub id: Uuid,

    /// Cart lines at the moment of finalization (frozen).
    pub lines: Vec<CartLine>,

    /// Totals at the moment of finalization (frozen).
    pub totals: SaleTotals,

    /// Payment method selected for the sale.
    pub payment_method: PaymentMethod,

    /// When the sale was closed out.
    pub finalized_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_status_default() {
        assert_eq!(SaleStatus::default(), SaleStatus::Open);
    }

    #[test]
    fn test_payment_method_first_matches_order() {
        assert_eq!(PaymentMethod::first(), PaymentMethod::ALL[0]);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!(PaymentMethod::parse("pix"), Some(PaymentMethod::Pix));
        assert_eq!(PaymentMethod::parse("Dinheiro"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::parse("credito"), Some(PaymentMethod::Credit));
        assert_eq!(PaymentMethod::parse("cheque"), None);
    }

    #[test]
    fn test_enums_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(SaleStatus::InProgress).unwrap(),
            "in_progress"
        );
        assert_eq!(serde_json::to_value(PaymentMethod::Pix).unwrap(), "pix");
    }

    #[test]
    fn test_totals_compute() {
        let totals = SaleTotals::compute(Money::from_cents(4290), Money::from_cents(290));
        assert_eq!(totals.subtotal_cents, 4290);
        assert_eq!(totals.discount_cents, 290);
        assert_eq!(totals.total_cents, 4000);
    }

    #[test]
    fn test_totals_floor_at_zero() {
        // Scenario from the register: subtotal R$ 42.90, discount R$ 50.00
        let totals = SaleTotals::compute(Money::from_cents(4290), Money::from_cents(5000));
        assert_eq!(totals.total_cents, 0);
    }
}
