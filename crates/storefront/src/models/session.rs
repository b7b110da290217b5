//! Session-related types.
//!
//! The session is the browser's durable key-value store: it holds the
//! serialized cart and the cart panel flag, and nothing else.

/// Session keys.
pub mod keys {
    /// Key for the serialized cart (the durable cart slot).
    pub const CART: &str = emporium_core::CART_SLOT_KEY;

    /// Key for whether the cart panel is open.
    pub const CART_PANEL_OPEN: &str = "cart_panel_open";
}
