//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Storefront page (categories, grid, cart panel)
//! GET  /health                    - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products?q=               - Grid filtered by name search
//! GET  /products/category/:key    - Grid filtered by category (triggers scroll-to-products)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                      - Cart line list
//! GET  /cart/count                - Cart count badge
//! POST /cart/add                  - Add to cart (line list + totals, triggers cart-updated, show-toast)
//! POST /cart/remove               - Remove line (line list + totals, triggers cart-updated)
//! POST /cart/panel                - Toggle cart panel relative to the page (open=<bool>, triggers cart-panel)
//! POST /cart/panel/close          - Close cart panel after an outside click
//! ```

pub mod cart;
pub mod effects;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use emporium_core::Category;
use tower_sessions::Session;

use crate::error::Result;
use crate::models::session_keys;
use crate::services::{Dispatcher, Effect, PanelState, SessionSlot, UiEvent};
use crate::state::AppState;

pub use effects::EffectResponse;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::search))
        .route("/category/{key}", get(products::category))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/panel", post(cart::toggle_panel))
        .route("/panel/close", post(cart::close_panel))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront page
        .route("/", get(home::home))
        // Product grid fragments
        .nest("/products", product_routes())
        // Cart fragments
        .nest("/cart", cart_routes())
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Read the cart panel flag from the session.
async fn load_panel(session: &Session) -> PanelState {
    let open = session
        .get::<bool>(session_keys::CART_PANEL_OPEN)
        .await
        .ok()
        .flatten()
        .unwrap_or(false);
    PanelState::from_open(open)
}

/// Write the cart panel flag to the session.
async fn save_panel(session: &Session, panel: PanelState) {
    if let Err(e) = session
        .insert(session_keys::CART_PANEL_OPEN, panel.is_open())
        .await
    {
        tracing::warn!(error = %e, "Failed to save cart panel state");
    }
}

/// Build a dispatcher over this browser's cart slot and panel flag.
async fn load_dispatcher(state: &AppState, session: &Session) -> Dispatcher<SessionSlot> {
    let slot = SessionSlot::load(session).await;
    let panel = load_panel(session).await;
    Dispatcher::new(state.catalog_handle(), slot, panel)
}

/// Apply `event` for this browser and render the resulting effects.
///
/// The cart slot is written back to the session before anything is rendered.
/// A rejected event leaves the session untouched.
async fn run_event(state: &AppState, session: &Session, event: UiEvent) -> Result<EffectResponse> {
    let mut dispatcher = load_dispatcher(state, session).await;
    let effects = dispatcher.dispatch(event)?;

    let (slot, panel) = dispatcher.into_parts();
    slot.commit(session).await;
    if effects.iter().any(|effect| matches!(effect, Effect::Panel(_))) {
        save_panel(session, panel).await;
    }

    EffectResponse::render(effects)
}

/// Parse a category key from a URL segment.
fn parse_category(key: &str) -> Result<Category> {
    Ok(Category::parse(key)?)
}
