//! Catalog generation.
//!
//! The catalog is built from a small, hard-coded category table. Each
//! category contributes [`PRODUCTS_PER_CATEGORY`] products numbered from 1,
//! priced at `base + ordinal * PRICE_STEP`, with images cycled from the
//! category's image list by `ordinal % images.len()`.
//!
//! Generation is deterministic and has no inputs besides the table, so two
//! calls always produce equal catalogs.

use crate::query::{self, Query};
use crate::types::{Category, Price, Product, ProductId};

/// Number of products generated per category.
pub const PRODUCTS_PER_CATEGORY: u32 = 6;

/// Price increment between consecutive products of a category.
pub const PRICE_STEP: u64 = 1500;

/// One row of the category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    pub category: Category,
    /// Name prefix of the category's products (`"Watch"` for wearables).
    pub display_name: &'static str,
    pub base_price: u64,
    /// Image paths, cycled over the category's products.
    pub images: &'static [&'static str],
}

/// The table the storefront catalog is generated from.
pub const CATEGORY_TABLE: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Laptop,
        display_name: "Laptop",
        base_price: 50_000,
        images: &["images/laptop.jpg", "images/laptop1.jpg"],
    },
    CategorySpec {
        category: Category::Phone,
        display_name: "Phone",
        base_price: 20_000,
        images: &["images/phones.jpg"],
    },
    CategorySpec {
        category: Category::Wearable,
        display_name: "Watch",
        base_price: 6_000,
        images: &["images/watches.jpg"],
    },
    CategorySpec {
        category: Category::Speaker,
        display_name: "Speaker",
        base_price: 4_000,
        images: &["images/speakers.jpg"],
    },
];

impl CategorySpec {
    /// Build the `ordinal`-th product of this category.
    #[must_use]
    pub fn product(&self, ordinal: u32) -> Product {
        let image = (ordinal as usize)
            .checked_rem(self.images.len())
            .and_then(|i| self.images.get(i))
            .copied()
            .unwrap_or_default();

        Product {
            id: ProductId::for_ordinal(self.category, ordinal),
            category: self.category,
            name: format!("{} {ordinal}", self.display_name),
            price: Price::new(
                self.base_price
                    .saturating_add(u64::from(ordinal).saturating_mul(PRICE_STEP)),
            ),
            image: image.to_owned(),
        }
    }
}

/// The full, ordered list of purchasable products.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<CategorySpec>,
}

impl Catalog {
    /// Generate the storefront catalog from [`CATEGORY_TABLE`].
    #[must_use]
    pub fn generate() -> Self {
        Self::from_table(CATEGORY_TABLE)
    }

    /// Generate a catalog from an arbitrary category table.
    ///
    /// Products appear grouped by category in table order, ordinals ascending.
    #[must_use]
    pub fn from_table(table: &[CategorySpec]) -> Self {
        let products = table
            .iter()
            .flat_map(|row| (1..=PRODUCTS_PER_CATEGORY).map(|ordinal| row.product(ordinal)))
            .collect::<Vec<_>>();

        tracing::debug!(
            products = products.len(),
            categories = table.len(),
            "Catalog generated"
        );

        Self {
            products,
            categories: table.to_vec(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The category rows the catalog was generated from, in table order.
    #[must_use]
    pub fn categories(&self) -> &[CategorySpec] {
        &self.categories
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Products of one category, catalog order preserved.
    #[must_use]
    pub fn filter_by_category(&self, category: Category) -> Vec<&Product> {
        query::by_category(&self.products, category)
    }

    /// Products whose name contains `needle`, ignoring case.
    #[must_use]
    pub fn search(&self, needle: &str) -> Vec<&Product> {
        query::search(&self.products, needle)
    }

    /// Apply a [`Query`] to the catalog.
    #[must_use]
    pub fn select(&self, query: &Query) -> Vec<&Product> {
        query.apply(&self.products)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(Catalog::generate(), Catalog::generate());
    }

    #[test]
    fn test_generate_has_six_products_per_category() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.len(), 24);

        for category in Category::ALL {
            assert_eq!(catalog.filter_by_category(category).len(), 6);
        }
    }

    #[test]
    fn test_prices_follow_base_plus_step() {
        let catalog = Catalog::generate();

        for row in CATEGORY_TABLE {
            for (ordinal, product) in (1_u64..).zip(catalog.filter_by_category(row.category)) {
                assert_eq!(
                    product.price,
                    Price::new(row.base_price + ordinal * PRICE_STEP),
                    "{}",
                    product.id
                );
            }
        }
    }

    #[test]
    fn test_ids_names_and_images() {
        let catalog = Catalog::generate();

        let laptop1 = catalog.find(&ProductId::new("laptop1")).expect("laptop1");
        assert_eq!(laptop1.name, "Laptop 1");
        assert_eq!(laptop1.price, Price::new(51_500));
        // 1 % 2 == 1 picks the second laptop image
        assert_eq!(laptop1.image, "images/laptop1.jpg");

        let laptop2 = catalog.find(&ProductId::new("laptop2")).expect("laptop2");
        assert_eq!(laptop2.image, "images/laptop.jpg");

        let watch = catalog.find(&ProductId::new("wearable4")).expect("wearable4");
        assert_eq!(watch.name, "Watch 4");
        assert_eq!(watch.image, "images/watches.jpg");
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::generate();
        let ids: HashSet<_> = catalog.products().iter().map(|p| &p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_find_unknown_id() {
        assert!(Catalog::generate().find(&ProductId::new("tablet1")).is_none());
    }

    #[test]
    fn test_empty_image_list_yields_empty_path() {
        let table = [CategorySpec {
            category: Category::Phone,
            display_name: "Phone",
            base_price: 100,
            images: &[],
        }];
        let catalog = Catalog::from_table(&table);
        assert!(catalog.products().iter().all(|p| p.image.is_empty()));
    }
}
