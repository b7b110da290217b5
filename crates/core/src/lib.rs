//! Emporium Core - catalog, query and cart logic.
//!
//! This crate holds everything the storefront does that is not HTTP or HTML:
//!
//! - [`catalog`] - deterministic generation of the product catalog
//! - [`query`] - category filtering and name search over products
//! - [`cart`] - cart lines, quantity merging, totals and the slot codec
//! - [`slot`] - the durable key-value slot the cart is persisted to
//! - [`store`] - the cart store tying a cart to its slot
//!
//! # Architecture
//!
//! The core crate does no I/O of its own. Persistence goes through the
//! [`CartSlot`] trait, which the storefront implements on top of the browser
//! session and tests implement in memory with [`MemorySlot`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod query;
pub mod slot;
pub mod store;
pub mod types;

pub use cart::{Cart, CartDecodeError, CartLine, CartTotals};
pub use catalog::{CATEGORY_TABLE, Catalog, CategorySpec};
pub use query::Query;
pub use slot::{CART_SLOT_KEY, CartSlot, MemorySlot, SlotError};
pub use store::{CartError, CartStore};
pub use types::*;
