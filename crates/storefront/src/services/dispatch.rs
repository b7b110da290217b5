//! UI event dispatch.
//!
//! Each browser interaction arrives as a typed [`UiEvent`]. The
//! [`Dispatcher`] applies it to the query layer or the cart store and returns
//! the [`Effect`]s the response has to carry, in order. Cart mutations are
//! persisted by the store before the effects are built, so every rendered
//! cart reflects what is already in the slot.

use std::sync::Arc;
use std::time::Duration;

use emporium_core::{CartError, CartSlot, CartStore, Catalog, Category, ProductId, Query};

use crate::views::{CartSummaryView, GridView};

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A keystroke in the search field; `query` is the field's full value.
    Search { query: String },
    /// A click on a category selector.
    SelectCategory(Category),
    /// A click on a product's "Add to Cart" control.
    AddToCart(ProductId),
    /// A click on a cart line's remove control.
    RemoveFromCart(ProductId),
    /// A click on the cart panel toggle; `showing` is the panel as the page
    /// displays it.
    TogglePanel { showing: PanelState },
    /// A click anywhere outside the cart panel and its toggle.
    ClickOutsidePanel { showing: PanelState },
}

/// Whether the cart panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

impl PanelState {
    #[must_use]
    pub const fn from_open(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// A transient toast message.
///
/// The browser shows it after `show_after` and removes it after
/// `remove_after`. Toasts are independent: several may be on screen at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub show_after: Duration,
    pub remove_after: Duration,
}

impl Notification {
    pub const SHOW_AFTER: Duration = Duration::from_millis(50);
    pub const REMOVE_AFTER: Duration = Duration::from_millis(2000);

    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            show_after: Self::SHOW_AFTER,
            remove_after: Self::REMOVE_AFTER,
        }
    }

    /// The confirmation shown after a product is added.
    #[must_use]
    pub fn added_to_cart() -> Self {
        Self::new("Added to Cart")
    }
}

/// Something the response must do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the product grid.
    RenderGrid(GridView),
    /// Replace the cart summary, total and count.
    RenderCart(CartSummaryView),
    /// Show a toast.
    Notify(Notification),
    /// Scroll the product section into view.
    ScrollToGrid,
    /// Open or close the cart panel.
    Panel(PanelState),
}

/// Applies UI events to the catalog, cart store and panel state.
#[derive(Debug)]
pub struct Dispatcher<S> {
    catalog: Arc<Catalog>,
    cart: CartStore<S>,
    panel: PanelState,
}

impl<S: CartSlot> Dispatcher<S> {
    /// Build a dispatcher, restoring the cart from `slot`.
    pub fn new(catalog: Arc<Catalog>, slot: S, panel: PanelState) -> Self {
        Self {
            catalog,
            cart: CartStore::restore(slot),
            panel,
        }
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] when adding an id that is not in
    /// the catalog; nothing is changed or persisted in that case.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Vec<Effect>, CartError> {
        tracing::debug!(?event, "Dispatching UI event");

        let effects = match event {
            UiEvent::Search { query } => {
                vec![Effect::RenderGrid(self.grid(&Query::Search(query)))]
            }
            UiEvent::SelectCategory(category) => vec![
                Effect::RenderGrid(self.grid(&Query::Category(category))),
                Effect::ScrollToGrid,
            ],
            UiEvent::AddToCart(id) => {
                self.cart.add(&self.catalog, &id)?;
                vec![
                    Effect::RenderCart(self.cart_summary()),
                    Effect::Notify(Notification::added_to_cart()),
                ]
            }
            UiEvent::RemoveFromCart(id) => {
                self.cart.remove(&id);
                vec![Effect::RenderCart(self.cart_summary())]
            }
            UiEvent::TogglePanel { showing } => {
                self.panel = showing.toggled();
                vec![Effect::Panel(self.panel)]
            }
            UiEvent::ClickOutsidePanel { showing } => {
                if showing.is_open() {
                    self.panel = PanelState::Closed;
                    vec![Effect::Panel(self.panel)]
                } else {
                    Vec::new()
                }
            }
        };

        Ok(effects)
    }

    /// The grid for a query over the catalog.
    #[must_use]
    pub fn grid(&self, query: &Query) -> GridView {
        GridView::from_products(self.catalog.select(query))
    }

    /// Snapshot of the cart summary.
    #[must_use]
    pub fn cart_summary(&self) -> CartSummaryView {
        CartSummaryView::from_store(&self.cart)
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    /// Consume the dispatcher, returning the slot and panel state to save.
    #[must_use]
    pub fn into_parts(self) -> (S, PanelState) {
        (self.cart.into_slot(), self.panel)
    }
}

#[cfg(test)]
mod tests {
    use emporium_core::{Cart, MemorySlot, Price};

    use super::*;

    fn dispatcher() -> Dispatcher<MemorySlot> {
        Dispatcher::new(
            Arc::new(Catalog::generate()),
            MemorySlot::default(),
            PanelState::Closed,
        )
    }

    fn grid_ids(effect: &Effect) -> Vec<String> {
        match effect {
            Effect::RenderGrid(grid) => grid.cards.iter().map(|c| c.id.clone()).collect(),
            other => panic!("expected grid, got {other:?}"),
        }
    }

    #[test]
    fn test_search_renders_matching_grid() {
        let mut d = dispatcher();
        let effects = d
            .dispatch(UiEvent::Search {
                query: "LAPTOP 2".to_string(),
            })
            .expect("dispatch");

        assert_eq!(effects.len(), 1);
        assert_eq!(grid_ids(&effects[0]), ["laptop2"]);
    }

    #[test]
    fn test_empty_search_renders_everything() {
        let mut d = dispatcher();
        let effects = d
            .dispatch(UiEvent::Search {
                query: String::new(),
            })
            .expect("dispatch");
        assert_eq!(grid_ids(&effects[0]).len(), 24);
    }

    #[test]
    fn test_search_without_match_renders_empty_grid() {
        let mut d = dispatcher();
        let effects = d
            .dispatch(UiEvent::Search {
                query: "toaster".to_string(),
            })
            .expect("dispatch");
        assert_eq!(effects, vec![Effect::RenderGrid(GridView::default())]);
    }

    #[test]
    fn test_select_category_renders_then_scrolls() {
        let mut d = dispatcher();
        let effects = d
            .dispatch(UiEvent::SelectCategory(Category::Wearable))
            .expect("dispatch");

        assert_eq!(effects.len(), 2);
        assert_eq!(grid_ids(&effects[0]).len(), 6);
        assert_eq!(effects[1], Effect::ScrollToGrid);
    }

    #[test]
    fn test_add_renders_cart_then_notifies() {
        let mut d = dispatcher();
        d.dispatch(UiEvent::AddToCart(ProductId::new("laptop1")))
            .expect("dispatch");
        let effects = d
            .dispatch(UiEvent::AddToCart(ProductId::new("laptop1")))
            .expect("dispatch");

        let Effect::RenderCart(summary) = &effects[0] else {
            panic!("expected cart render, got {:?}", effects[0]);
        };
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].quantity, 2);
        assert_eq!(summary.total, Price::new(103_000));
        assert_eq!(
            effects[1],
            Effect::Notify(Notification::added_to_cart())
        );
    }

    #[test]
    fn test_add_persists_before_effects() {
        let mut d = dispatcher();
        d.dispatch(UiEvent::AddToCart(ProductId::new("phone4")))
            .expect("dispatch");

        let stored = d.cart().slot().value().expect("slot written");
        let cart = Cart::from_slot_str(stored).expect("decode");
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_add_unknown_product_fails_without_effects() {
        let mut d = dispatcher();
        let err = d
            .dispatch(UiEvent::AddToCart(ProductId::new("toaster1")))
            .expect_err("unknown product");

        assert_eq!(err, CartError::UnknownProduct(ProductId::new("toaster1")));
        assert!(d.cart().cart().is_empty());
        assert!(d.cart().slot().value().is_none());
    }

    #[test]
    fn test_remove_renders_cart() {
        let mut d = dispatcher();
        d.dispatch(UiEvent::AddToCart(ProductId::new("speaker2")))
            .expect("dispatch");
        let effects = d
            .dispatch(UiEvent::RemoveFromCart(ProductId::new("speaker2")))
            .expect("dispatch");

        assert_eq!(effects, vec![Effect::RenderCart(CartSummaryView::default())]);
    }

    #[test]
    fn test_remove_absent_still_renders() {
        let mut d = dispatcher();
        let effects = d
            .dispatch(UiEvent::RemoveFromCart(ProductId::new("speaker2")))
            .expect("dispatch");
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_toggle_and_click_outside() {
        let mut d = dispatcher();

        assert!(
            d.dispatch(UiEvent::ClickOutsidePanel {
                showing: PanelState::Closed
            })
            .expect("dispatch")
            .is_empty()
        );

        assert_eq!(
            d.dispatch(UiEvent::TogglePanel {
                showing: PanelState::Closed
            })
            .expect("dispatch"),
            vec![Effect::Panel(PanelState::Open)]
        );
        assert_eq!(
            d.dispatch(UiEvent::ClickOutsidePanel {
                showing: PanelState::Open
            })
            .expect("dispatch"),
            vec![Effect::Panel(PanelState::Closed)]
        );
        assert_eq!(d.panel(), PanelState::Closed);
    }

    #[test]
    fn test_panel_follows_the_page_not_the_stored_flag() {
        // Stored flag says open; this page still shows the panel closed.
        let mut d = Dispatcher::new(
            Arc::new(Catalog::generate()),
            MemorySlot::default(),
            PanelState::Open,
        );

        assert_eq!(
            d.dispatch(UiEvent::TogglePanel {
                showing: PanelState::Closed
            })
            .expect("dispatch"),
            vec![Effect::Panel(PanelState::Open)]
        );

        // Stored flag says closed; this page shows the panel open.
        let mut d = dispatcher();
        assert_eq!(
            d.dispatch(UiEvent::ClickOutsidePanel {
                showing: PanelState::Open
            })
            .expect("dispatch"),
            vec![Effect::Panel(PanelState::Closed)]
        );
    }

    #[test]
    fn test_into_parts_returns_written_slot() {
        let mut d = dispatcher();
        d.dispatch(UiEvent::AddToCart(ProductId::new("laptop6")))
            .expect("dispatch");
        d.dispatch(UiEvent::TogglePanel {
            showing: PanelState::Closed,
        })
        .expect("dispatch");

        let (slot, panel) = d.into_parts();
        assert!(slot.value().is_some_and(|v| v.contains("laptop6")));
        assert!(panel.is_open());
    }
}
