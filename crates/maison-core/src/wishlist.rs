//! # Wishlist
//!
//! A set of product ids the shopper has marked for later, kept in the order
//! they were first added (the wishlist page renders oldest-first).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::ProductId;

/// Product wishlist with set semantics.
///
/// ## Invariants
/// - No duplicate product ids
/// - Insertion order is preserved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist { ids: Vec::new() }
    }

    /// Adds a product id. Idempotent: adding an id already present is a
    /// no-op.
    pub fn add(&mut self, product_id: ProductId) {
        if !self.ids.contains(&product_id) {
            self.ids.push(product_id);
        }
    }

    /// Removes a product id. Idempotent: removing an absent id is a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.ids.retain(|id| *id != product_id);
    }

    /// Checks membership (drives the heart icon on product cards).
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Number of wished-for products.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// The ids as a slice, insertion-ordered.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.add(5);
        assert_eq!(wishlist.ids(), &[5]);

        wishlist.add(5);
        assert_eq!(wishlist.ids(), &[5]);
    }

    #[test]
    fn test_scenario_add_twice_then_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(5);
        wishlist.add(5);
        assert_eq!(wishlist.len(), 1);

        wishlist.remove(5);
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(1);
        wishlist.remove(99);
        assert_eq!(wishlist.ids(), &[1]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut wishlist = Wishlist::new();
        wishlist.add(3);
        wishlist.add(1);
        wishlist.add(2);
        wishlist.add(1);

        assert_eq!(wishlist.ids(), &[3, 1, 2]);
        assert!(wishlist.contains(2));
        assert!(!wishlist.contains(4));
    }
}
