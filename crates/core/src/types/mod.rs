//! Core types for Emporium.
//!
//! Type-safe wrappers for the catalog's domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use category::{Category, UnknownCategory};
pub use id::ProductId;
pub use price::Price;
pub use product::Product;
