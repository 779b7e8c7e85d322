//! # Read Views
//!
//! Catalog-joined read models handed to the UI shell.
//!
//! ## Why Views Exist
//! Cart lines and wishlist entries store bare product ids; names, prices,
//! and images live in the read-only catalog. The UI never performs that
//! join itself: it asks for a view and renders it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    View Assembly                                        │
//! │                                                                         │
//! │   Cart { product_id, qty, variant } ──┐                                 │
//! │                                       ├──► CartView                     │
//! │   Catalog { name, price, image } ─────┘      ├── lines: CartLineView[]  │
//! │                                              ├── items_total_cents      │
//! │   Wishlist { product_id } ────────────┐      └── shipping + grand total │
//! │                                       ├──► Vec<WishlistEntryView>       │
//! │   Catalog ────────────────────────────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Products
//! A cart or wishlist can reference an id the catalog no longer carries
//! (stale persisted state). Views never fail on that: the entry renders
//! with a placeholder name and a zero price.

use serde::Serialize;
use ts_rs::TS;

use maison_core::{
    Cart, CartLine, Catalog, ProductId, Wishlist, SHIPPING_FEE_CENTS, UNKNOWN_PRODUCT_NAME,
};

// =============================================================================
// Cart Views
// =============================================================================

/// One cart line joined with its catalog product.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product_id: ProductId,
    /// Catalog name, or a placeholder when the product is gone.
    pub name: String,
    pub image_url: String,
    /// Effective unit price in cents (sale price when set), zero when the
    /// product is missing from the catalog.
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub selected_size: Option<String>,
    pub selected_color: Option<String>,
    /// Unit price × quantity.
    pub line_total_cents: i64,
}

/// The whole cart ready to render, totals included.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_quantity: i64,
    /// Sum of line totals, before shipping.
    pub items_total_cents: i64,
    /// Flat shipping fee applied at checkout.
    pub shipping_cents: i64,
    /// Items total plus shipping.
    pub grand_total_cents: i64,
}

impl CartView {
    /// Joins the cart against the catalog.
    pub fn assemble(cart: &Cart, catalog: &dyn Catalog) -> Self {
        let lines: Vec<CartLineView> = cart
            .lines
            .iter()
            .map(|line| CartLineView::assemble(line, catalog))
            .collect();

        let items_total_cents: i64 = lines.iter().map(|l| l.line_total_cents).sum();

        CartView {
            total_quantity: cart.total_quantity(),
            items_total_cents,
            shipping_cents: SHIPPING_FEE_CENTS,
            grand_total_cents: items_total_cents + SHIPPING_FEE_CENTS,
            lines,
        }
    }
}

impl CartLineView {
    fn assemble(line: &CartLine, catalog: &dyn Catalog) -> Self {
        let product = catalog.find_by_id(line.product_id);

        let (name, image_url, unit_price_cents) = match product {
            Some(p) => (p.name.clone(), p.image_url.clone(), p.effective_price().cents()),
            None => (UNKNOWN_PRODUCT_NAME.to_string(), String::new(), 0),
        };

        CartLineView {
            product_id: line.product_id,
            name,
            image_url,
            unit_price_cents,
            quantity: line.quantity,
            selected_size: line.selected_size.clone(),
            selected_color: line.selected_color.clone(),
            line_total_cents: unit_price_cents * line.quantity,
        }
    }
}

// =============================================================================
// Wishlist View
// =============================================================================

/// One wishlist entry joined with its catalog product.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntryView {
    pub product_id: ProductId,
    pub name: String,
    pub image_url: String,
    pub price_cents: i64,
    /// False when the catalog no longer carries the product.
    pub available: bool,
}

impl WishlistEntryView {
    /// Joins every wishlist entry against the catalog, keeping wishlist
    /// order.
    pub fn assemble_all(wishlist: &Wishlist, catalog: &dyn Catalog) -> Vec<Self> {
        wishlist
            .iter()
            .map(|product_id| match catalog.find_by_id(product_id) {
                Some(p) => WishlistEntryView {
                    product_id,
                    name: p.name.clone(),
                    image_url: p.image_url.clone(),
                    price_cents: p.effective_price().cents(),
                    available: true,
                },
                None => WishlistEntryView {
                    product_id,
                    name: UNKNOWN_PRODUCT_NAME.to_string(),
                    image_url: String::new(),
                    price_cents: 0,
                    available: false,
                },
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use maison_core::StaticCatalog;

    #[test]
    fn test_cart_view_totals() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(1, 2, Some("M".into()), None, None); // 2999 each
        cart.add_line(3, 1, None, None, None); // 8500

        let view = CartView::assemble(&cart, &catalog);

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total_quantity, 3);
        assert_eq!(view.items_total_cents, 2 * 2999 + 8500);
        assert_eq!(view.shipping_cents, SHIPPING_FEE_CENTS);
        assert_eq!(
            view.grand_total_cents,
            view.items_total_cents + SHIPPING_FEE_CENTS
        );
    }

    #[test]
    fn test_cart_view_uses_sale_price() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(2, 1, None, None, None); // sale price 4999

        let view = CartView::assemble(&cart, &catalog);
        assert_eq!(view.lines[0].unit_price_cents, 4999);
    }

    #[test]
    fn test_missing_product_renders_placeholder() {
        let catalog = StaticCatalog::demo();
        let mut cart = Cart::new();
        cart.add_line(9999, 3, None, None, None);

        let view = CartView::assemble(&cart, &catalog);
        assert_eq!(view.lines[0].name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(view.lines[0].unit_price_cents, 0);
        assert_eq!(view.items_total_cents, 0);
    }

    #[test]
    fn test_wishlist_view_keeps_order_and_flags_missing() {
        let catalog = StaticCatalog::demo();
        let mut wishlist = Wishlist::new();
        wishlist.add(3);
        wishlist.add(9999);
        wishlist.add(1);

        let views = WishlistEntryView::assemble_all(&wishlist, &catalog);

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].product_id, 3);
        assert!(views[0].available);
        assert!(!views[1].available);
        assert_eq!(views[1].name, UNKNOWN_PRODUCT_NAME);
        assert_eq!(views[2].product_id, 1);
    }
}
