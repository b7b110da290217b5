//! Derived views of the catalog.
//!
//! Both operations are linear scans that keep the input order and never
//! mutate anything.

use crate::types::{Category, Product};

/// Keep products whose category equals `category`.
#[must_use]
pub fn by_category(products: &[Product], category: Category) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .collect()
}

/// Keep products whose lowercased name contains the lowercased `needle`.
///
/// An empty needle matches every product.
#[must_use]
pub fn search<'a>(products: &'a [Product], needle: &str) -> Vec<&'a Product> {
    let needle = needle.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// A query over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Query {
    /// Every product.
    #[default]
    All,
    /// Products of one category.
    Category(Category),
    /// Case-insensitive substring match on the product name.
    Search(String),
}

impl Query {
    /// Run the query against `products`.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        match self {
            Self::All => products.iter().collect(),
            Self::Category(category) => by_category(products, *category),
            Self::Search(needle) => search(products, needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_by_category_keeps_only_that_category_in_order() {
        let catalog = Catalog::generate();
        let phones = by_category(catalog.products(), Category::Phone);

        let names: Vec<_> = phones.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Phone 1", "Phone 2", "Phone 3", "Phone 4", "Phone 5", "Phone 6"]
        );
    }

    #[test]
    fn test_categories_partition_the_catalog() {
        let catalog = Catalog::generate();

        let rebuilt: Vec<&Product> = Category::ALL
            .into_iter()
            .flat_map(|category| by_category(catalog.products(), category))
            .collect();

        let original: Vec<&Product> = catalog.products().iter().collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let catalog = Catalog::generate();
        assert_eq!(search(catalog.products(), "").len(), catalog.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::generate();

        let upper = search(catalog.products(), "LAP");
        assert_eq!(upper.len(), 6);
        assert!(upper.iter().any(|p| p.name == "Laptop 1"));

        assert_eq!(search(catalog.products(), "wAtCh 3").len(), 1);
    }

    #[test]
    fn test_search_matches_name_not_category_key() {
        let catalog = Catalog::generate();
        // wearables are named "Watch N"
        assert!(search(catalog.products(), "wearable").is_empty());
    }

    #[test]
    fn test_search_without_match() {
        let catalog = Catalog::generate();
        assert!(search(catalog.products(), "toaster").is_empty());
    }

    #[test]
    fn test_query_apply() {
        let catalog = Catalog::generate();

        assert_eq!(Query::All.apply(catalog.products()).len(), 24);
        assert_eq!(
            Query::Category(Category::Speaker)
                .apply(catalog.products())
                .len(),
            6
        );
        assert_eq!(
            Query::Search("phone 2".to_string())
                .apply(catalog.products())
                .len(),
            1
        );
    }
}
