//! Cart lines, quantity merging and totals.
//!
//! A [`Cart`] holds at most one [`CartLine`] per product id, in the order the
//! products were first added. Quantities are [`NonZeroU32`], so a line with
//! quantity zero cannot exist: removing a product deletes its line.
//!
//! # Slot format
//!
//! The cart is persisted as a JSON array of flat objects:
//!
//! ```json
//! [{"id":"laptop1","category":"laptop","name":"Laptop 1","price":51500,"image":"images/laptop1.jpg","quantity":2}]
//! ```

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// Errors decoding a persisted cart.
#[derive(thiserror::Error, Debug)]
pub enum CartDecodeError {
    /// The payload is not a JSON array of cart lines.
    #[error("malformed cart payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One product's aggregated quantity within the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// A new line holding one unit of `product`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The line's product id.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Unit price times quantity.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum over lines of price times quantity.
    pub price: Price,
    /// Sum over lines of quantity.
    pub count: u64,
}

/// The ordered collection of cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`, returning the line's new quantity.
    ///
    /// Increments the existing line for the product's id, or appends a new
    /// line with quantity 1.
    pub fn add(&mut self, product: &Product) -> NonZeroU32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == &product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        NonZeroU32::MIN
    }

    /// Remove the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLine> {
        self.position(id).map(|index| self.lines.remove(index))
    }

    /// The line for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recompute the cart totals.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            price: self.lines.iter().map(CartLine::subtotal).sum(),
            count: self
                .lines
                .iter()
                .map(|line| u64::from(line.quantity.get()))
                .sum(),
        }
    }

    /// Encode the cart for the durable slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_slot_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a cart from the durable slot.
    ///
    /// Lines sharing an id are merged into the first one, quantities summed,
    /// so a hand-edited payload cannot break the one-line-per-product rule.
    ///
    /// # Errors
    ///
    /// Returns [`CartDecodeError::Malformed`] if the payload is not a list of
    /// cart lines (including any line with quantity 0).
    pub fn from_slot_str(payload: &str) -> Result<Self, CartDecodeError> {
        let decoded: Vec<CartLine> = serde_json::from_str(payload)?;

        let mut cart = Self::new();
        for line in decoded {
            match cart.lines.iter_mut().find(|l| l.id() == line.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity.get());
                }
                None => cart.lines.push(line),
            }
        }

        Ok(cart)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }
}
