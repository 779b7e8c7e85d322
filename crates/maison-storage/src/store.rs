//! # Typed Storage Facade
//!
//! One typed slot per durable state slice, over any [`KeyValueStore`].
//!
//! ## Slot Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Slots                                        │
//! │                                                                         │
//! │  Key         Value                          Absent means                │
//! │  ───         ─────                          ────────────                │
//! │  "cart"      JSON Cart                      empty cart                  │
//! │  "wishlist"  JSON Wishlist                  empty wishlist              │
//! │  "user"      JSON User                      anonymous session           │
//! │  "orders"    JSON Vec<Order> (newest first) no orders yet               │
//! │                                                                         │
//! │  The user slot is the only one that is ever REMOVED: logout clears it  │
//! │  while cart/wishlist/orders stay behind for the next session.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use maison_core::{Cart, Order, User, Wishlist};

use crate::error::StorageResult;
use crate::kv::KeyValueStore;

// =============================================================================
// Slot Keys
// =============================================================================

/// Storage key for the cart slice.
pub const CART_KEY: &str = "cart";
/// Storage key for the wishlist slice.
pub const WISHLIST_KEY: &str = "wishlist";
/// Storage key for the current user slice.
pub const USER_KEY: &str = "user";
/// Storage key for the order history slice.
pub const ORDERS_KEY: &str = "orders";

// =============================================================================
// Storage
// =============================================================================

/// Typed persistence facade owned by the state manager.
pub struct Storage {
    backend: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Wraps a key-value backend.
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Storage { backend }
    }

    // -------------------------------------------------------------------------
    // Cart Slot
    // -------------------------------------------------------------------------

    /// Loads the cart slot; an absent entry is an empty cart.
    pub fn load_cart(&self) -> StorageResult<Cart> {
        self.get_or_default(CART_KEY)
    }

    /// Persists the cart slot.
    pub fn save_cart(&mut self, cart: &Cart) -> StorageResult<()> {
        self.put(CART_KEY, cart)
    }

    // -------------------------------------------------------------------------
    // Wishlist Slot
    // -------------------------------------------------------------------------

    /// Loads the wishlist slot; an absent entry is an empty wishlist.
    pub fn load_wishlist(&self) -> StorageResult<Wishlist> {
        self.get_or_default(WISHLIST_KEY)
    }

    /// Persists the wishlist slot.
    pub fn save_wishlist(&mut self, wishlist: &Wishlist) -> StorageResult<()> {
        self.put(WISHLIST_KEY, wishlist)
    }

    // -------------------------------------------------------------------------
    // User Slot
    // -------------------------------------------------------------------------

    /// Loads the user slot; an absent entry is an anonymous session.
    pub fn load_user(&self) -> StorageResult<Option<User>> {
        match self.backend.get(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Persists the user slot.
    pub fn save_user(&mut self, user: &User) -> StorageResult<()> {
        self.put(USER_KEY, user)
    }

    /// Removes the user slot (logout). The other slots are untouched.
    pub fn clear_user(&mut self) -> StorageResult<()> {
        debug!(key = USER_KEY, "clearing storage slot");
        self.backend.remove(USER_KEY)
    }

    // -------------------------------------------------------------------------
    // Orders Slot
    // -------------------------------------------------------------------------

    /// Loads the order history, most-recent-first as persisted.
    pub fn load_orders(&self) -> StorageResult<Vec<Order>> {
        self.get_or_default(ORDERS_KEY)
    }

    /// Persists the order history.
    pub fn save_orders(&mut self, orders: &[Order]) -> StorageResult<()> {
        self.put(ORDERS_KEY, &orders)
    }

    // -------------------------------------------------------------------------
    // JSON Helpers
    // -------------------------------------------------------------------------

    fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> StorageResult<T> {
        match self.backend.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(T::default()),
        }
    }

    fn put<T: Serialize>(&mut self, key: &str, value: &T) -> StorageResult<()> {
        let raw = serde_json::to_string(value)?;
        debug!(key, "persisting storage slot");
        self.backend.set(key, &raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
