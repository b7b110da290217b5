//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every handler restores it from
//! there and mutating handlers write it back before responding.

use axum::{Form, extract::State};
use emporium_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::effects::{CartCountTemplate, CartItemsTemplate};
use super::{EffectResponse, load_dispatcher, run_event};
use crate::error::{Result, add_breadcrumb};
use crate::services::{PanelState, UiEvent};
use crate::state::AppState;

/// Add/remove form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub id: String,
}

/// Panel form data: whether the requesting page shows the panel open.
#[derive(Debug, Default, Deserialize)]
pub struct PanelForm {
    #[serde(default)]
    pub open: bool,
}

/// Cart line list fragment (HTMX).
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> CartItemsTemplate {
    let dispatcher = load_dispatcher(&state, &session).await;
    CartItemsTemplate {
        cart: dispatcher.cart_summary(),
    }
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> CartCountTemplate {
    let dispatcher = load_dispatcher(&state, &session).await;
    CartCountTemplate {
        count: dispatcher.cart().totals().count,
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated line list with out-of-band total and count, and
/// triggers `cart-updated` and `show-toast`. Unknown ids are a 404 and leave
/// the cart unchanged.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartItemForm>,
) -> Result<EffectResponse> {
    let response = run_event(
        &state,
        &session,
        UiEvent::AddToCart(ProductId::new(form.id.as_str())),
    )
    .await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", form.id.as_str())]));
    Ok(response)
}

/// Remove a product's line from the cart (HTMX).
///
/// Removing a product that is not in the cart is not an error.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartItemForm>,
) -> Result<EffectResponse> {
    let response = run_event(
        &state,
        &session,
        UiEvent::RemoveFromCart(ProductId::new(form.id.as_str())),
    )
    .await?;

    add_breadcrumb("cart", "Removed from cart", Some(&[("product_id", form.id.as_str())]));
    Ok(response)
}

/// Toggle the cart panel (HTMX, triggers `cart-panel`).
///
/// The new state is the opposite of what the requesting page shows, so tabs
/// sharing a session do not fight over one flag.
#[instrument(skip(state, session))]
pub async fn toggle_panel(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PanelForm>,
) -> Result<EffectResponse> {
    let showing = PanelState::from_open(form.open);
    run_event(&state, &session, UiEvent::TogglePanel { showing }).await
}

/// Close the cart panel after a click outside it (HTMX).
///
/// Does nothing when the requesting page shows the panel closed.
#[instrument(skip(state, session))]
pub async fn close_panel(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PanelForm>,
) -> Result<EffectResponse> {
    let showing = PanelState::from_open(form.open);
    run_event(&state, &session, UiEvent::ClickOutsidePanel { showing }).await
}
