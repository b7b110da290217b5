//! Product categories.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a category key is not one of the known categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// One of the fixed product categories.
///
/// Serialized by its lowercase key (`"laptop"`, `"phone"`, ...), which is also
/// the prefix of every product id in the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Laptop,
    Phone,
    Wearable,
    Speaker,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Self; 4] = [Self::Laptop, Self::Phone, Self::Wearable, Self::Speaker];

    /// The category's key as used in ids, URLs and the persisted cart.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Laptop => "laptop",
            Self::Phone => "phone",
            Self::Wearable => "wearable",
            Self::Speaker => "speaker",
        }
    }

    /// Parse a category key. Matching is exact (case-sensitive).
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] if `key` names no category.
    pub fn parse(key: &str) -> Result<Self, UnknownCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| UnknownCategory(key.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
