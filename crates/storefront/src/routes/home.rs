//! Storefront page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use emporium_core::Query;
use tower_sessions::Session;
use tracing::instrument;

use super::load_dispatcher;
use crate::filters;
use crate::state::AppState;
use crate::views::{CartSummaryView, CategoryView, GridView};

/// Storefront page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryView>,
    pub grid: GridView,
    pub cart: CartSummaryView,
    pub panel_open: bool,
}

/// Display the storefront: category selectors, the full grid and the cart
/// panel restored from this browser's session.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> HomeTemplate {
    let dispatcher = load_dispatcher(&state, &session).await;

    HomeTemplate {
        categories: state
            .catalog()
            .categories()
            .iter()
            .map(CategoryView::from)
            .collect(),
        grid: dispatcher.grid(&Query::All),
        cart: dispatcher.cart_summary(),
        panel_open: dispatcher.panel().is_open(),
    }
}
