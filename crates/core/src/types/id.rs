//! Product identifiers.
//!
//! A product id is the category key followed by the product's ordinal within
//! that category (e.g. `laptop1`, `speaker6`). Ids are opaque strings once
//! created: the cart and the persisted slot only ever compare them for
//! equality.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Category;

/// Identifier of a catalog product.
///
/// ```
/// use emporium_core::{Category, ProductId};
///
/// let id = ProductId::for_ordinal(Category::Laptop, 1);
/// assert_eq!(id.as_str(), "laptop1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an existing id string.
    ///
    /// No validation happens here; ids coming from requests are checked by
    /// looking them up in the catalog.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the id of the `ordinal`-th product of `category`.
    #[must_use]
    pub fn for_ordinal(category: Category, ordinal: u32) -> Self {
        Self(format!("{}{ordinal}", category.key()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_ordinal_joins_key_and_number() {
        assert_eq!(
            ProductId::for_ordinal(Category::Wearable, 6).as_str(),
            "wearable6"
        );
        assert_eq!(ProductId::for_ordinal(Category::Phone, 3).to_string(), "phone3");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProductId::new("speaker2");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"speaker2\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
