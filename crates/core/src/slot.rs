//! The durable key-value slot the cart lives in.
//!
//! A slot holds one text value under a fixed key ([`CART_SLOT_KEY`]). The
//! storefront backs it with the browser's session; [`MemorySlot`] keeps it
//! in memory and can simulate an unavailable or full store.

use thiserror::Error;

/// Name of the entry holding the serialized cart.
pub const CART_SLOT_KEY: &str = "cart";

/// Errors raised by slot storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlotError {
    /// The backing store cannot be reached.
    #[error("slot storage unavailable: {0}")]
    Unavailable(String),

    /// The value does not fit in the backing store.
    #[error("slot storage full: {len} bytes exceeds limit of {limit}")]
    QuotaExceeded {
        /// Size of the rejected value.
        len: usize,
        /// Maximum size the store accepts.
        limit: usize,
    },
}

/// A single-entry text store.
pub trait CartSlot {
    /// Read the stored value. `Ok(None)` means nothing was ever written.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if the backing store cannot be read.
    fn read(&self) -> Result<Option<String>, SlotError>;

    /// Overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError`] if the value cannot be stored.
    fn write(&mut self, value: String) -> Result<(), SlotError>;
}

/// An in-memory slot.
///
/// ```
/// use emporium_core::{CartSlot, MemorySlot};
///
/// let mut slot = MemorySlot::default();
/// slot.write("[]".to_string()).unwrap();
/// assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Option<String>,
    limit: Option<usize>,
    unavailable: bool,
}

impl MemorySlot {
    /// A slot pre-filled with `value`.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Reject writes longer than `limit` bytes.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Fail every read and write.
    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// The stored value, bypassing failure simulation.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl CartSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        if self.unavailable {
            return Err(SlotError::Unavailable("memory slot disabled".to_string()));
        }
        Ok(self.value.clone())
    }

    fn write(&mut self, value: String) -> Result<(), SlotError> {
        if self.unavailable {
            return Err(SlotError::Unavailable("memory slot disabled".to_string()));
        }

        if let Some(limit) = self.limit
            && value.len() > limit
        {
            return Err(SlotError::QuotaExceeded {
                len: value.len(),
                limit,
            });
        }

        self.value = Some(value);
        Ok(())
    }
}

impl<S: CartSlot + ?Sized> CartSlot for &mut S {
    fn read(&self) -> Result<Option<String>, SlotError> {
        (**self).read()
    }

    fn write(&mut self, value: String) -> Result<(), SlotError> {
        (**self).write(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_none() {
        assert_eq!(MemorySlot::default().read(), Ok(None));
    }

    #[test]
    fn test_write_overwrites() {
        let mut slot = MemorySlot::with_value("old");
        slot.write("new".to_string()).expect("write");
        assert_eq!(slot.read(), Ok(Some("new".to_string())));
    }

    #[test]
    fn test_limit_rejects_large_values_and_keeps_old() {
        let mut slot = MemorySlot::with_value("[]").with_limit(4);

        let err = slot.write("[1,2,3]".to_string()).expect_err("too large");
        assert_eq!(err, SlotError::QuotaExceeded { len: 7, limit: 4 });
        assert_eq!(slot.value(), Some("[]"));
    }

    #[test]
    fn test_unavailable_slot_fails() {
        let mut slot = MemorySlot::with_value("[]").unavailable();
        assert!(matches!(slot.read(), Err(SlotError::Unavailable(_))));
        assert!(slot.write("[]".to_string()).is_err());
    }
}
