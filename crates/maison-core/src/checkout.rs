//! # Checkout
//!
//! Assembles an [`Order`] from the current cart.
//!
//! ## Checkout Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout Summary                                                       │
//! │                                                                         │
//! │  Premium Cotton Tee (M)      x2              $59.98                    │
//! │  Slim Fit Jeans (30)         x1              $49.99  (sale price)      │
//! │  ──────────────────────────────────────────────────                    │
//! │  Subtotal                                    $109.97                   │
//! │  Shipping (flat)                             $5.99                     │
//! │  TOTAL                                       $115.96                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unit prices are frozen into the order items at this point (snapshot
//! pattern); later catalog price changes do not rewrite history. A cart line
//! whose product has vanished from the catalog is priced at zero rather than
//! failing checkout - the order views will show it as an unknown product.

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::{Order, OrderItem, OrderStatus, PaymentMethod, ShippingInfo};
use crate::validation::validate_order;
use crate::SHIPPING_FEE_CENTS;

/// Builds a pending order from the cart.
///
/// ## Behavior
/// - Each cart line becomes one order item with the catalog's effective
///   price (sale price when set) frozen in
/// - The flat shipping fee is applied once
/// - A fresh UUID id and `Pending` status are assigned
///
/// ## Errors
/// - [`CoreError::EmptyCart`] when the cart has no lines
pub fn build_order(
    cart: &Cart,
    catalog: &dyn Catalog,
    shipping: ShippingInfo,
    payment: PaymentMethod,
) -> CoreResult<Order> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let items: Vec<OrderItem> = cart
        .lines
        .iter()
        .map(|line| OrderItem {
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price_cents: catalog
                .find_by_id(line.product_id)
                .map(|p| p.effective_price().cents())
                .unwrap_or(0),
        })
        .collect();

    let items_total: i64 = items.iter().map(|i| i.line_total().cents()).sum();

    let order = Order {
        id: Uuid::new_v4().to_string(),
        placed_at: Utc::now(),
        total_cents: items_total + SHIPPING_FEE_CENTS,
        status: OrderStatus::Pending,
        items,
        shipping,
        payment,
    };

    validate_order(&order)?;
    Ok(order)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            name: "Jamie Doe".to_string(),
            phone: "555-0199".to_string(),
            address: "12 Rue de Rivoli".to_string(),
        }
    }

    #[test]
    fn test_build_order_from_cart() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(1, 2, Some("M".into()), None, None); // 2 x 2999
        cart.add_line(3, 1, None, None, None); // 1 x 8500

        let order =
            build_order(&cart, &catalog, shipping(), PaymentMethod::CashOnDelivery).unwrap();

        assert_eq!(order.items.len(), 2);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_cents, 2 * 2999 + 8500 + SHIPPING_FEE_CENTS);
        assert!(validate_order(&order).is_ok());
    }

    #[test]
    fn test_build_order_freezes_sale_price() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(2, 1, Some("30".into()), None, None);

        let order =
            build_order(&cart, &catalog, shipping(), PaymentMethod::BankTransfer).unwrap();

        assert_eq!(order.items[0].unit_price_cents, 4999);
    }

    #[test]
    fn test_build_order_rejects_empty_cart() {
        let catalog = StaticCatalog::demo();
        let cart = Cart::new();

        assert!(matches!(
            build_order(&cart, &catalog, shipping(), PaymentMethod::CashOnDelivery),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_unknown_product_priced_at_zero() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(999, 3, None, None, None);

        let order =
            build_order(&cart, &catalog, shipping(), PaymentMethod::CashOnDelivery).unwrap();

        assert_eq!(order.items[0].unit_price_cents, 0);
        assert_eq!(order.total_cents, SHIPPING_FEE_CENTS);
    }

    #[test]
    fn test_order_ids_are_unique() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(1, 1, None, None, None);

        let a = build_order(&cart, &catalog, shipping(), PaymentMethod::CashOnDelivery).unwrap();
        let b = build_order(&cart, &catalog, shipping(), PaymentMethod::CashOnDelivery).unwrap();
        assert_ne!(a.id, b.id);
    }
}
