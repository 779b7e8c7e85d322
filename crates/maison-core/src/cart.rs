//! # Shopping Cart
//!
//! Variant-aware shopping cart for the Maison storefront.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                 Manager Operation        Cart Change         │
//! │  ─────────                 ─────────────────        ───────────         │
//! │                                                                         │
//! │  Click "Add to cart" ────► add_to_cart() ─────────► merge or push line │
//! │                                                                         │
//! │  Change quantity ────────► update_cart_quantity() ► set / remove       │
//! │                                                                         │
//! │  Click remove ───────────► remove_from_cart() ────► drop ALL variants  │
//! │                                                                         │
//! │  Place order ────────────► place_order() ─────────► lines.clear()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Variant Identity
//! Two lines are the "same" item only when the full tuple
//! `(product_id, selected_size, selected_color, selected_options)` matches
//! structurally. `selected_options` is an ordered map so equality is
//! well-defined and does not depend on insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ProductId;

// =============================================================================
// Cart Line
// =============================================================================

/// One distinct product + variant entry in the cart.
///
/// The line carries no price: prices live in the read-only catalog and are
/// looked up at render and checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Catalog product this line refers to.
    pub product_id: ProductId,

    /// Units of this variant in the cart.
    pub quantity: i64,

    /// Selected size variant, when the product has sizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,

    /// Selected color variant, when the product has colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,

    /// Named custom options (ordered so structural equality is stable).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_options: Option<BTreeMap<String, String>>,
}

impl CartLine {
    /// Checks whether this line is the given variant of the given product.
    ///
    /// Structural equality over the whole tuple: a line with
    /// `selected_size: None` and a line with `selected_size: Some("M")` are
    /// different items.
    pub fn matches_variant(
        &self,
        product_id: ProductId,
        selected_size: Option<&str>,
        selected_color: Option<&str>,
        selected_options: Option<&BTreeMap<String, String>>,
    ) -> bool {
        self.product_id == product_id
            && self.selected_size.as_deref() == selected_size
            && self.selected_color.as_deref() == selected_color
            && self.selected_options.as_ref() == selected_options
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per distinct (product, size, color, options) tuple;
///   adding the same tuple again sums quantities
/// - Lines keep insertion order (the UI renders them in the order added)
///
/// ## Stock
/// `add_line` does NOT check catalog stock. The storefront behaves this way
/// on purpose (the catalog is mock data); callers that want a stock gate
/// must apply one before calling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in the order first added.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product variant to the cart.
    ///
    /// ## Behavior
    /// - Exact variant tuple already present: quantity is incremented
    /// - Otherwise: a new line is appended
    pub fn add_line(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        selected_size: Option<String>,
        selected_color: Option<String>,
        selected_options: Option<BTreeMap<String, String>>,
    ) {
        if let Some(line) = self.lines.iter_mut().find(|l| {
            l.matches_variant(
                product_id,
                selected_size.as_deref(),
                selected_color.as_deref(),
                selected_options.as_ref(),
            )
        }) {
            line.quantity += quantity;
            return;
        }

        self.lines.push(CartLine {
            product_id,
            quantity,
            selected_size,
            selected_color,
            selected_options,
        });
    }

    /// Removes every line for the given product id.
    ///
    /// ## Note
    /// This drops ALL variant lines of the product, not just one variant.
    /// That is the observed storefront behavior; per-variant removal would
    /// take the full variant tuple instead of a bare product id.
    pub fn remove_product(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity on every line matching the product id.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: identical to [`Cart::remove_product`]
    /// - Otherwise: all lines for the product are set to `quantity`
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_product(product_id);
            return;
        }

        for line in self.lines.iter_mut().filter(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Checks whether any line references the given product.
    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn options(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_add_same_variant_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_line(1, 2, None, None, None);
        cart.add_line(1, 1, None, None, None);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[test]
    fn test_add_repeatedly_sums_all_quantities() {
        let mut cart = Cart::new();
        for qty in [1, 2, 3, 4] {
            cart.add_line(7, qty, Some("L".into()), Some("Navy".into()), None);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 10);
    }

    #[test]
    fn test_differing_size_yields_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_line(1, 1, Some("M".into()), None, None);
        cart.add_line(1, 1, Some("L".into()), None, None);
        cart.add_line(1, 1, None, None, None);

        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_differing_options_yield_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_line(2, 1, None, None, options(&[("engraving", "JD")]));
        cart.add_line(2, 1, None, None, options(&[("engraving", "MT")]));
        cart.add_line(2, 1, None, None, options(&[("engraving", "JD")]));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_option_equality_ignores_insertion_order() {
        let mut first = BTreeMap::new();
        first.insert("strap".to_string(), "leather".to_string());
        first.insert("buckle".to_string(), "gold".to_string());

        let mut second = BTreeMap::new();
        second.insert("buckle".to_string(), "gold".to_string());
        second.insert("strap".to_string(), "leather".to_string());

        let mut cart = Cart::new();
        cart.add_line(5, 1, None, None, Some(first));
        cart.add_line(5, 1, None, None, Some(second));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_remove_product_drops_all_variants() {
        let mut cart = Cart::new();
        cart.add_line(1, 1, Some("M".into()), None, None);
        cart.add_line(1, 2, Some("L".into()), None, None);
        cart.add_line(2, 1, None, None, None);

        cart.remove_product(1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].product_id, 2);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut via_update = Cart::new();
        via_update.add_line(1, 3, Some("M".into()), None, None);
        via_update.add_line(1, 1, Some("L".into()), None, None);

        let mut via_remove = via_update.clone();

        via_update.update_quantity(1, 0);
        via_remove.remove_product(1);

        assert_eq!(via_update, via_remove);
        assert!(via_update.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_all_matching_lines() {
        let mut cart = Cart::new();
        cart.add_line(1, 3, Some("M".into()), None, None);
        cart.add_line(1, 1, Some("L".into()), None, None);

        cart.update_quantity(1, 5);

        assert!(cart.lines.iter().all(|l| l.quantity == 5));
    }

    #[test]
    fn test_scenario_add_merge_remove() {
        let mut cart = Cart::new();

        cart.add_line(1, 2, None, None, None);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);

        cart.add_line(1, 1, None, None, None);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);

        cart.remove_product(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_line(1, 1, None, None, None);
        cart.add_line(2, 4, None, None, None);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
