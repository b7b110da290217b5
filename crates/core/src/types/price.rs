//! Whole-unit prices.
//!
//! Prices in the catalog are positive integers with no minor currency unit
//! (`51500`, not `515.00`). A single currency is assumed throughout; the
//! symbol is a presentation concern of the storefront.

use core::fmt;
use core::iter::Sum;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A price in whole currency units.
///
/// `Display` groups thousands with commas:
///
/// ```
/// use emporium_core::Price;
///
/// assert_eq!(Price::new(124_500).to_string(), "124,500");
/// assert_eq!(Price::new(950).to_string(), "950");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero price, used as the total of an empty cart.
    pub const ZERO: Self = Self(0);

    /// Create a price from whole units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` items at this unit price.
    #[must_use]
    pub const fn times(self, quantity: NonZeroU32) -> Self {
        Self(self.0.saturating_mul(quantity.get() as u64))
    }

    /// Sum of two prices, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        f.pad(&grouped)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::new(0).to_string(), "0");
        assert_eq!(Price::new(999).to_string(), "999");
        assert_eq!(Price::new(1_000).to_string(), "1,000");
        assert_eq!(Price::new(51_500).to_string(), "51,500");
        assert_eq!(Price::new(1_234_567).to_string(), "1,234,567");
    }

    #[test]
    fn test_times_and_sum() {
        let two = NonZeroU32::new(2).expect("non-zero");
        let total: Price = [Price::new(51_500).times(two), Price::new(21_500)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(124_500));
    }

    #[test]
    fn test_times_saturates() {
        let many = NonZeroU32::new(u32::MAX).expect("non-zero");
        assert_eq!(Price::new(u64::MAX).times(many), Price::new(u64::MAX));
    }
}
