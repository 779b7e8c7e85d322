//! # Shared Store Handle
//!
//! `Arc<Mutex<StoreState>>` wrapper for shells that touch the store from
//! more than one thread (a desktop runtime managing state, a background
//! flush on exit).
//!
//! ## Thread Safety
//! Uses `Arc<Mutex<StoreState>>` because:
//! - `Arc`: shared ownership across threads
//! - `Mutex`: one mutation at a time; every operation persists before the
//!   lock is released, so readers never observe a half-written slice
//!
//! ## Why Not RwLock?
//! Store operations are quick and most of them mutate. A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::store::StoreState;

/// Cloneable handle to a shared [`StoreState`].
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<Mutex<StoreState>>,
}

impl SharedStore {
    /// Wraps a store for shared access.
    pub fn new(store: StoreState) -> Self {
        SharedStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let quantity = shared.with_store(|s| s.cart().total_quantity());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StoreState) -> R,
    {
        let store = self.inner.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_store_mut(|s| s.add_to_cart(1, 2, None, None, None))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StoreState) -> R,
    {
        let mut store = self.inner.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthenticator;
    use maison_storage::{MemoryStore, Storage};

    fn shared_store() -> SharedStore {
        let storage = Storage::new(Box::new(MemoryStore::new()));
        SharedStore::new(StoreState::open(storage, Box::new(MockAuthenticator)))
    }

    #[test]
    fn test_shared_store_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<SharedStore>();
    }

    #[test]
    fn test_clones_see_the_same_state() {
        let shared = shared_store();
        let other = shared.clone();

        shared
            .with_store_mut(|s| s.add_to_cart(1, 2, None, None, None))
            .unwrap();

        assert_eq!(other.with_store(|s| s.cart().total_quantity()), 2);
    }

    #[test]
    fn test_mutation_across_threads() {
        let shared = shared_store();
        let worker = shared.clone();

        let handle = std::thread::spawn(move || {
            worker
                .with_store_mut(|s| s.add_to_wishlist(7))
                .unwrap();
        });
        handle.join().unwrap();

        assert!(shared.with_store(|s| s.wishlist().contains(7)));
    }
}
