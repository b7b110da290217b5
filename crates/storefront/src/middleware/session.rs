//! Session middleware configuration.
//!
//! The session is the per-browser key-value store the cart is persisted to.
//! Sessions are found again through the session cookie; the binary stores
//! them in `SQLite` (see [`crate::db`]).

use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "emporium_session";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Create the session layer over `store`.
///
/// The cookie expires after `config.session_days` days of inactivity and is
/// marked secure when the storefront is served over HTTPS.
#[must_use]
pub fn create_session_layer<S: SessionStore + Clone>(
    store: S,
    config: &StorefrontConfig,
) -> SessionManagerLayer<S> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(
                config.session_days.saturating_mul(SECONDS_PER_DAY),
            ),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
