//! # StoreState
//!
//! The state container every storefront view talks to.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StoreState Operations                                │
//! │                                                                         │
//! │  UI Event                  Operation               Persisted Slice      │
//! │  ────────                  ─────────               ───────────────      │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_to_cart() ────────► cart                 │
//! │  Quantity stepper ───────► update_cart_quantity()► cart                 │
//! │  "Remove" ───────────────► remove_from_cart() ───► cart                 │
//! │  Heart icon ─────────────► add/remove_wishlist ──► wishlist             │
//! │  Login form ─────────────► login() ──────────────► user                 │
//! │  "Sign out" ─────────────► logout() ─────────────► user (slot removed)  │
//! │  Register form ──────────► register() ───────────► user                 │
//! │  "Place order" ──────────► place_order() ────────► orders + cart        │
//! │  Admin status dropdown ──► set_order_status() ───► orders               │
//! │                                                                         │
//! │  Every mutation fully applies its delta, then persists the touched      │
//! │  slice(s) synchronously. login/register apply no change when they       │
//! │  return false.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use tracing::{debug, warn};

use maison_core::checkout::build_order;
use maison_core::{Cart, Catalog, Order, OrderStatus, PaymentMethod, ProductId, ShippingInfo, User, Wishlist};
use maison_storage::Storage;

use crate::auth::{Authenticator, Credentials};
use crate::error::StateResult;

/// The single authoritative holder of cart, wishlist, current user, and
/// order history.
///
/// Construct one with [`StoreState::open`] and pass it (by reference or via
/// [`crate::SharedStore`]) to every view; there is no ambient global
/// instance.
pub struct StoreState {
    cart: Cart,
    wishlist: Wishlist,
    user: Option<User>,
    orders: Vec<Order>,
    storage: Storage,
    auth: Box<dyn Authenticator>,
}

impl StoreState {
    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Opens the store, rehydrating all four slices from storage.
    ///
    /// ## Degraded Rehydration
    /// An absent slice loads as empty/anonymous. An unreadable slice (I/O
    /// failure, corrupt JSON) also degrades to empty, with a warning: a
    /// damaged profile must not stop the shop from opening.
    pub fn open(storage: Storage, auth: Box<dyn Authenticator>) -> Self {
        let cart = storage.load_cart().unwrap_or_else(|e| {
            warn!(error = %e, "cart slot unreadable, starting empty");
            Cart::new()
        });
        let wishlist = storage.load_wishlist().unwrap_or_else(|e| {
            warn!(error = %e, "wishlist slot unreadable, starting empty");
            Wishlist::new()
        });
        let user = storage.load_user().unwrap_or_else(|e| {
            warn!(error = %e, "user slot unreadable, starting anonymous");
            None
        });
        let orders = storage.load_orders().unwrap_or_else(|e| {
            warn!(error = %e, "orders slot unreadable, starting empty");
            Vec::new()
        });

        debug!(
            cart_lines = cart.line_count(),
            wishlist_len = wishlist.len(),
            signed_in = user.is_some(),
            orders = orders.len(),
            "store state rehydrated"
        );

        StoreState {
            cart,
            wishlist,
            user,
            orders,
            storage,
            auth,
        }
    }

    /// Rewrites every slice to storage. Teardown hook for shells that want
    /// a final flush on exit; individual mutations persist on their own.
    pub fn flush(&mut self) -> StateResult<()> {
        self.storage.save_cart(&self.cart)?;
        self.storage.save_wishlist(&self.wishlist)?;
        match &self.user {
            Some(user) => self.storage.save_user(user)?,
            None => self.storage.clear_user()?,
        }
        self.storage.save_orders(&self.orders)?;
        debug!("store state flushed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Read Surface
    // -------------------------------------------------------------------------

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Order history, most-recent-first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // -------------------------------------------------------------------------
    // Cart Operations
    // -------------------------------------------------------------------------

    /// Adds a product variant to the cart, merging with an existing line on
    /// an exact variant tuple match.
    ///
    /// No stock validation happens here; the catalog is informational.
    pub fn add_to_cart(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        selected_size: Option<String>,
        selected_color: Option<String>,
        selected_options: Option<BTreeMap<String, String>>,
    ) -> StateResult<()> {
        debug!(product_id, quantity, "add_to_cart");
        self.cart
            .add_line(product_id, quantity, selected_size, selected_color, selected_options);
        self.storage.save_cart(&self.cart)?;
        Ok(())
    }

    /// Removes every cart line for the product (all variants).
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> StateResult<()> {
        debug!(product_id, "remove_from_cart");
        self.cart.remove_product(product_id);
        self.storage.save_cart(&self.cart)?;
        Ok(())
    }

    /// Sets the quantity on every line for the product; `quantity <= 0`
    /// behaves exactly like [`StoreState::remove_from_cart`].
    pub fn update_cart_quantity(&mut self, product_id: ProductId, quantity: i64) -> StateResult<()> {
        debug!(product_id, quantity, "update_cart_quantity");
        self.cart.update_quantity(product_id, quantity);
        self.storage.save_cart(&self.cart)?;
        Ok(())
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> StateResult<()> {
        debug!("clear_cart");
        self.cart.clear();
        self.storage.save_cart(&self.cart)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Wishlist Operations
    // -------------------------------------------------------------------------

    /// Adds a product to the wishlist. Idempotent.
    pub fn add_to_wishlist(&mut self, product_id: ProductId) -> StateResult<()> {
        debug!(product_id, "add_to_wishlist");
        self.wishlist.add(product_id);
        self.storage.save_wishlist(&self.wishlist)?;
        Ok(())
    }

    /// Removes a product from the wishlist. Idempotent.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> StateResult<()> {
        debug!(product_id, "remove_from_wishlist");
        self.wishlist.remove(product_id);
        self.storage.save_wishlist(&self.wishlist)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Session Operations
    // -------------------------------------------------------------------------

    /// Attempts a login through the authenticator capability.
    ///
    /// ## Behavior
    /// - Accepted: the user slot is replaced and persisted, returns `true`
    /// - Rejected: nothing changes, returns `false`
    pub fn login(&mut self, email: &str, password: &str) -> StateResult<bool> {
        let credentials = Credentials::new(email, password);
        match self.auth.authenticate(&credentials) {
            Some(user) => {
                debug!(email = %user.email, is_admin = user.is_admin, "login succeeded");
                self.storage.save_user(&user)?;
                self.user = Some(user);
                Ok(true)
            }
            None => {
                debug!("login failed");
                Ok(false)
            }
        }
    }

    /// Signs the current user out.
    ///
    /// Clears ONLY the user slot and its storage entry; cart, wishlist, and
    /// order history stay intact for the next session.
    pub fn logout(&mut self) -> StateResult<()> {
        debug!("logout");
        self.user = None;
        self.storage.clear_user()?;
        Ok(())
    }

    /// Attempts a registration through the authenticator capability. On
    /// success the new user is signed in immediately.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> StateResult<bool> {
        match self.auth.register(name, email, password) {
            Some(user) => {
                debug!(email = %user.email, "registration succeeded");
                self.storage.save_user(&user)?;
                self.user = Some(user);
                Ok(true)
            }
            None => {
                debug!("registration failed");
                Ok(false)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Order Operations
    // -------------------------------------------------------------------------

    /// Records a placed order.
    ///
    /// ## Behavior
    /// - The order is prepended to history (most-recent-first)
    /// - The cart is cleared unconditionally, whether or not the order's
    ///   items match the current cart contents
    ///
    /// Both in-memory mutations apply before either slice is persisted, so
    /// a failed write never leaves the order recorded with the cart still
    /// full.
    pub fn place_order(&mut self, order: Order) -> StateResult<()> {
        debug!(order_id = %order.id, total_cents = order.total_cents, "place_order");
        self.orders.insert(0, order);
        self.cart.clear();
        self.storage.save_orders(&self.orders)?;
        self.storage.save_cart(&self.cart)?;
        Ok(())
    }

    /// Builds an order from the current cart and places it in one step.
    ///
    /// Convenience the checkout page uses: prices are frozen from the
    /// catalog, the flat shipping fee is applied, then
    /// [`StoreState::place_order`] runs. Returns the placed order for the
    /// confirmation screen.
    pub fn checkout(
        &mut self,
        catalog: &dyn Catalog,
        shipping: ShippingInfo,
        payment: PaymentMethod,
    ) -> StateResult<Order> {
        let order = build_order(&self.cart, catalog, shipping, payment)?;
        self.place_order(order.clone())?;
        Ok(order)
    }

    /// Overwrites the status of one order. Returns `false` when no order
    /// carries the id.
    ///
    /// A plain assignment: transitions are decided by the order-management
    /// views, no transition function is enforced here.
    pub fn set_order_status(&mut self, order_id: &str, status: OrderStatus) -> StateResult<bool> {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            debug!(order_id, "set_order_status: order not found");
            return Ok(false);
        };

        debug!(order_id, ?status, "set_order_status");
        order.status = status;
        self.storage.save_orders(&self.orders)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
