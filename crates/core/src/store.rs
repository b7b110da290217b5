//! The cart store: the authoritative cart plus the slot it persists to.
//!
//! Every mutation writes the whole cart back to the slot before returning,
//! so callers can render straight afterwards. Slot failures never reach the
//! caller: a failed write leaves the in-memory cart as mutated and is logged;
//! a failed or malformed read restores an empty cart.

use core::num::NonZeroU32;

use thiserror::Error;
use tracing::{debug, warn};

use crate::cart::{Cart, CartLine, CartTotals};
use crate::catalog::Catalog;
use crate::slot::CartSlot;
use crate::types::ProductId;

/// Errors from cart operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The product id is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// A cart bound to its durable slot.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    /// Restore the cart from `slot`.
    ///
    /// An empty, unreadable or malformed slot yields an empty cart.
    pub fn restore(slot: S) -> Self {
        let cart = match slot.read() {
            Ok(Some(payload)) => Cart::from_slot_str(&payload).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding malformed cart slot");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Cart slot unreadable, starting empty");
                Cart::new()
            }
        };

        Self { cart, slot }
    }

    /// Add one unit of the catalog product `id`.
    ///
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if `id` is not in `catalog`. The
    /// cart and slot are left untouched in that case.
    pub fn add(&mut self, catalog: &Catalog, id: &ProductId) -> Result<NonZeroU32, CartError> {
        let product = catalog
            .find(id)
            .ok_or_else(|| CartError::UnknownProduct(id.clone()))?;

        let quantity = self.cart.add(product);
        debug!(product_id = %id, quantity = quantity.get(), "Added to cart");

        self.persist();
        Ok(quantity)
    }

    /// Remove the line for `id`. Removing an absent id changes nothing.
    ///
    /// The slot is rewritten either way.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        let removed = self.cart.remove(id);
        debug!(product_id = %id, removed = removed.is_some(), "Removed from cart");

        self.persist();
        removed
    }

    /// Recomputed totals of the current cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The backing slot.
    #[must_use]
    pub const fn slot(&self) -> &S {
        &self.slot
    }

    /// Consume the store, returning its slot.
    #[must_use]
    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Write the whole cart to the slot, swallowing failures.
    pub fn persist(&mut self) {
        let payload = match self.cart.to_slot_string() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to encode cart");
                return;
            }
        };

        if let Err(e) = self.slot.write(payload) {
            warn!(error = %e, "Failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_restore_from_empty_slot() {
        let store = CartStore::restore(MemorySlot::default());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_restore_from_corrupt_slot() {
        let store = CartStore::restore(MemorySlot::with_value("{not json"));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_restore_from_unavailable_slot() {
        let store = CartStore::restore(MemorySlot::default().unavailable());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_persists_before_returning() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());

        store.add(&catalog, &id("laptop1")).expect("add");

        let persisted = store.slot().value().expect("slot written");
        let cart = Cart::from_slot_str(persisted).expect("decode");
        assert_eq!(&cart, store.cart());
    }

    #[test]
    fn test_add_twice_yields_quantity_two() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());

        store.add(&catalog, &id("speaker1")).expect("add");
        let quantity = store.add(&catalog, &id("speaker1")).expect("add");

        assert_eq!(quantity.get(), 2);
        assert_eq!(store.cart().lines().len(), 1);
    }

    #[test]
    fn test_add_unknown_product_is_rejected() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());

        let err = store.add(&catalog, &id("toaster1")).expect_err("unknown");
        assert_eq!(err, CartError::UnknownProduct(id("toaster1")));
        assert!(store.cart().is_empty());
        assert_eq!(store.slot().value(), None);
    }

    #[test]
    fn test_remove_absent_leaves_cart_unchanged() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());
        store.add(&catalog, &id("phone2")).expect("add");
        let before = store.cart().clone();

        assert!(store.remove(&id("phone3")).is_none());
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_remove_persists() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());
        store.add(&catalog, &id("phone2")).expect("add");

        store.remove(&id("phone2"));
        assert_eq!(store.slot().value(), Some("[]"));
    }

    #[test]
    fn test_totals() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());
        store.add(&catalog, &id("laptop1")).expect("add");
        store.add(&catalog, &id("laptop1")).expect("add");
        store.add(&catalog, &id("phone1")).expect("add");

        let totals = store.totals();
        assert_eq!(totals.price.amount(), 124_500);
        assert_eq!(totals.count, 3);
    }

    #[test]
    fn test_round_trip_through_slot() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::default());
        store.add(&catalog, &id("wearable1")).expect("add");
        store.add(&catalog, &id("laptop3")).expect("add");
        store.add(&catalog, &id("wearable1")).expect("add");
        let before = store.cart().clone();

        let restored = CartStore::restore(store.into_slot());
        assert_eq!(restored.cart(), &before);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_cart() {
        let catalog = Catalog::generate();
        let mut store = CartStore::restore(MemorySlot::with_value("[]").with_limit(2));

        store.add(&catalog, &id("laptop1")).expect("add");

        assert_eq!(store.cart().lines().len(), 1);
        assert_eq!(store.slot().value(), Some("[]"));
    }

    #[test]
    fn test_works_through_mutable_reference() {
        let catalog = Catalog::generate();
        let mut slot = MemorySlot::default();

        {
            let mut store = CartStore::restore(&mut slot);
            store.add(&catalog, &id("speaker6")).expect("add");
        }

        assert!(slot.value().is_some_and(|v| v.contains("speaker6")));
    }
}
