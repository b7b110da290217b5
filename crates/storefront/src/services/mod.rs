//! Storefront services.
//!
//! - [`dispatch`] - typed UI events applied to the catalog and cart
//! - [`session_slot`] - the cart slot backed by the browser session

pub mod dispatch;
pub mod session_slot;

pub use dispatch::{Dispatcher, Effect, Notification, PanelState, UiEvent};
pub use session_slot::SessionSlot;
