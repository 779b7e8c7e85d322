//! # maison-storage: Local Persistence for the Maison Shop
//!
//! This crate provides the durable local key-value store the state manager
//! writes after every mutation and reads once at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Maison Data Flow                                 │
//! │                                                                         │
//! │  StoreState mutation (add_to_cart, place_order, ...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  maison-storage (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Storage     │    │ KeyValueStore │    │   Backends   │  │   │
//! │  │   │  (store.rs)   │    │   (kv.rs)     │    │   (kv.rs)    │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ typed slots:  │───►│ get/set/      │◄───│ JsonFileStore│  │   │
//! │  │   │ cart wishlist │    │ remove        │    │ MemoryStore  │  │   │
//! │  │   │ user orders   │    │ (strings)     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Data Directory                               │   │
//! │  │   <data_dir>/cart.json  wishlist.json  user.json  orders.json   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The `KeyValueStore` trait and its backends
//! - [`store`] - Typed `Storage` facade, one slot per state slice
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use maison_core::Cart;
//! use maison_storage::{MemoryStore, Storage};
//!
//! let mut storage = Storage::new(Box::new(MemoryStore::new()));
//!
//! let mut cart = Cart::new();
//! cart.add_line(1, 2, None, None, None);
//! storage.save_cart(&cart).unwrap();
//!
//! assert_eq!(storage.load_cart().unwrap(), cart);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::Storage;
