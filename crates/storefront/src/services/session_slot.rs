//! Cart slot backed by the browser session.
//!
//! Session access is async while the cart store is not, so the slot is
//! staged: [`SessionSlot::load`] reads the stored text up front, the store
//! reads and writes the staged copy, and [`SessionSlot::commit`] writes it
//! back to the session before the response is rendered.

use emporium_core::{CartSlot, SlotError};
use tower_sessions::Session;

use crate::models::session_keys;

/// A staged copy of the session's cart entry.
#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    value: Option<String>,
    load_error: Option<String>,
    dirty: bool,
}

impl SessionSlot {
    /// Read the cart entry from the session.
    ///
    /// A failed read is remembered and reported through [`CartSlot::read`],
    /// so the store restores an empty cart.
    pub async fn load(session: &Session) -> Self {
        match session.get::<String>(session_keys::CART).await {
            Ok(value) => Self {
                value,
                ..Self::default()
            },
            Err(e) => Self {
                load_error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    /// Whether the store wrote to the slot since it was loaded.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the staged value back to the session if it changed.
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn commit(self, session: &Session) {
        if !self.dirty {
            return;
        }

        let Some(value) = self.value else {
            return;
        };

        if let Err(e) = session.insert(session_keys::CART, value).await {
            tracing::warn!(error = %e, "Failed to write cart to session");
        }
    }
}

impl CartSlot for SessionSlot {
    fn read(&self) -> Result<Option<String>, SlotError> {
        if let Some(e) = &self.load_error {
            return Err(SlotError::Unavailable(e.clone()));
        }
        Ok(self.value.clone())
    }

    fn write(&mut self, value: String) -> Result<(), SlotError> {
        self.value = Some(value);
        self.dirty = true;
        Ok(())
    }
}
