//! View-models handed to templates.
//!
//! Templates never see core types directly; each projection below is built
//! from a product list or a cart snapshot and carries only what the markup
//! shows. Askama escapes every interpolated field.

use emporium_core::{CartLine, CartStore, CartSlot, CategorySpec, Price, Product};

/// A product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// The product grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridView {
    pub cards: Vec<ProductCardView>,
}

impl GridView {
    /// Project a list of products into cards, keeping their order.
    #[must_use]
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            cards: products.into_iter().map(ProductCardView::from).collect(),
        }
    }

    /// Whether the "No products found" placeholder should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// A category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub key: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

impl From<&CategorySpec> for CategoryView {
    fn from(row: &CategorySpec) -> Self {
        Self {
            key: row.category.key(),
            name: row.display_name,
            image: row.images.first().copied().unwrap_or_default(),
        }
    }
}

/// One line of the cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub subtotal: Price,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.product.name.clone(),
            quantity: line.quantity.get(),
            subtotal: line.subtotal(),
        }
    }
}

/// The cart summary: lines plus recomputed totals.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartSummaryView {
    pub lines: Vec<CartLineView>,
    pub total: Price,
    pub count: u64,
}

impl CartSummaryView {
    /// Snapshot the store's cart and totals.
    #[must_use]
    pub fn from_store<S: CartSlot>(store: &CartStore<S>) -> Self {
        let totals = store.totals();
        Self {
            lines: store.cart().lines().iter().map(CartLineView::from).collect(),
            total: totals.price,
            count: totals.count,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
