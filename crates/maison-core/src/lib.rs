//! # maison-core: Pure Domain Logic for the Maison Storefront
//!
//! This crate is the **heart** of the Maison shop. It contains all domain
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Maison Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront UI (out of tree)                    │   │
//! │  │    Product pages ──► Cart UI ──► Checkout UI ──► Orders UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    maison-state (manager)                       │   │
//! │  │    add_to_cart, add_to_wishlist, login, place_order, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ maison-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ wishlist  │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Cart    │  │ Wishlist  │  │  Order    │  │   │
//! │  │   │   Order   │  │ CartLine  │  │   (set)   │  │ building  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 maison-storage (persistence)                    │   │
//! │  │          cart.json  wishlist.json  user.json  orders.json      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Variant-aware shopping cart
//! - [`wishlist`] - Product wishlist with set semantics
//! - [`catalog`] - Read-only product catalog collaborator
//! - [`checkout`] - Order assembly from cart contents
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use maison_core::cart::Cart;
//!
//! let mut cart = Cart::new();
//! cart.add_line(1, 2, Some("M".into()), None, None);
//! cart.add_line(1, 1, Some("M".into()), None, None);
//!
//! // Same variant tuple merges into a single line
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.total_quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use maison_core::Cart` instead of
// `use maison_core::cart::Cart`

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, StaticCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee in cents, applied once per order at checkout.
///
/// ## Why a constant?
/// The shop charges a single flat rate regardless of cart contents. Can be
/// made configurable per-region once a real fulfilment backend exists.
pub const SHIPPING_FEE_CENTS: i64 = 599;

/// Display name substituted when a cart or order line references a product
/// id the catalog no longer knows about. Views render this instead of
/// failing the whole page.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown product";
