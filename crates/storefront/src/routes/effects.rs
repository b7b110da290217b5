//! Turning dispatcher effects into HTMX responses.
//!
//! Rendered fragments are concatenated into the response body; everything
//! the browser has to do besides swapping HTML (toasts, scrolling, the panel
//! flag, refreshing the count badge) travels as events in one `HX-Trigger`
//! header.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{AppendHeaders, Html, IntoResponse, Response};
use serde_json::{Map, Value, json};

use crate::error::AppError;
use crate::filters;
use crate::services::Effect;
use crate::views::{CartSummaryView, GridView};

/// Response header carrying client-side events.
pub const HX_TRIGGER: &str = "HX-Trigger";

/// Event names fired through [`HX_TRIGGER`].
pub mod events {
    pub const CART_UPDATED: &str = "cart-updated";
    pub const SHOW_TOAST: &str = "show-toast";
    pub const SCROLL_TO_PRODUCTS: &str = "scroll-to-products";
    pub const CART_PANEL: &str = "cart-panel";
}

/// Product grid fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub grid: GridView,
}

/// Cart line list fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartSummaryView,
}

/// Out-of-band update of the cart total.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_totals_oob.html")]
pub struct CartTotalsOobTemplate {
    pub cart: CartSummaryView,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// A rendered list of effects.
#[derive(Debug, Default)]
pub struct EffectResponse {
    body: String,
    triggers: Map<String, Value>,
}

impl EffectResponse {
    /// Render `effects` in order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Template`] if a fragment fails to render.
    pub fn render(effects: Vec<Effect>) -> Result<Self, AppError> {
        let mut response = Self::default();

        for effect in effects {
            match effect {
                Effect::RenderGrid(grid) => {
                    response
                        .body
                        .push_str(&ProductGridTemplate { grid }.render()?);
                }
                Effect::RenderCart(cart) => {
                    response.body.push_str(
                        &CartItemsTemplate { cart: cart.clone() }.render()?,
                    );
                    response
                        .body
                        .push_str(&CartTotalsOobTemplate { cart }.render()?);
                    response.trigger(events::CART_UPDATED, Value::Null);
                }
                Effect::Notify(notification) => {
                    response.trigger(
                        events::SHOW_TOAST,
                        json!({
                            "message": notification.message,
                            "showAfterMs": millis(notification.show_after),
                            "removeAfterMs": millis(notification.remove_after),
                        }),
                    );
                }
                Effect::ScrollToGrid => {
                    response.trigger(events::SCROLL_TO_PRODUCTS, json!({ "target": "products" }));
                }
                Effect::Panel(panel) => {
                    response.trigger(events::CART_PANEL, json!({ "open": panel.is_open() }));
                }
            }
        }

        Ok(response)
    }

    /// The concatenated HTML fragments.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The client events to fire, keyed by name.
    #[must_use]
    pub const fn triggers(&self) -> &Map<String, Value> {
        &self.triggers
    }

    fn trigger(&mut self, name: &str, detail: Value) {
        self.triggers.insert(name.to_string(), detail);
    }
}

impl IntoResponse for EffectResponse {
    fn into_response(self) -> Response {
        let html = Html(self.body);

        if self.triggers.is_empty() {
            return html.into_response();
        }

        let header = Value::Object(self.triggers).to_string();
        (AppendHeaders([(HX_TRIGGER, header)]), html).into_response()
    }
}

fn millis(duration: std::time::Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
