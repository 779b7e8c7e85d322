//! # maison-state: The StoreState Manager
//!
//! Single authoritative holder of the shop's mutable state.
//!
//! ## Module Organization
//! ```text
//! maison_state/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── StoreState container + every mutation operation
//! ├── auth.rs         ◄─── Authenticator capability + mock implementation
//! ├── views.rs        ◄─── Catalog-joined read models for the UI
//! ├── shared.rs       ◄─── Arc<Mutex<StoreState>> wrapper for threaded shells
//! └── error.rs        ◄─── StateError (what the UI shell handles)
//! ```
//!
//! ## State Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    StoreState Lifecycle                                 │
//! │                                                                         │
//! │  StoreState::open(storage, authenticator)                              │
//! │       │         rehydrates cart/wishlist/user/orders from storage      │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │  Running session                                              │     │
//! │  │                                                               │     │
//! │  │  UI event ──► mutation op ──► state delta ──► persist slice   │     │
//! │  │              (add_to_cart,                   (synchronous)    │     │
//! │  │               login, ...)                                     │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  flush()  - teardown hook, rewrites every slice                        │
//! │                                                                         │
//! │  logout() clears ONLY the user slot; cart/wishlist/orders survive      │
//! │  into the next session.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use maison_state::{MockAuthenticator, StoreState};
//! use maison_storage::{MemoryStore, Storage};
//!
//! let storage = Storage::new(Box::new(MemoryStore::new()));
//! let mut store = StoreState::open(storage, Box::new(MockAuthenticator));
//!
//! store.add_to_cart(1, 2, None, None, None).unwrap();
//! assert_eq!(store.cart().total_quantity(), 2);
//!
//! assert!(store.login("shopper@example.com", "secret").unwrap());
//! assert!(!store.user().unwrap().is_admin);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod error;
pub mod shared;
pub mod store;
pub mod views;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{Authenticator, Credentials, MockAuthenticator};
pub use error::{StateError, StateResult};
pub use shared::SharedStore;
pub use store::StoreState;
pub use views::{CartLineView, CartView, WishlistEntryView};
