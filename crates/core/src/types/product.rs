//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A purchasable product.
///
/// Products are created in bulk when the catalog is generated and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Category key plus ordinal, unique within the catalog.
    pub id: ProductId,
    pub category: Category,
    /// Display name, e.g. `"Laptop 3"`.
    pub name: String,
    pub price: Price,
    /// Relative path of the product image.
    pub image: String,
}
