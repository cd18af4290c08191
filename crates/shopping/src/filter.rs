//! Derived listing: search filtering and nearby-store price comparison.

use webenv_core::{Price, distance_km};

use crate::catalog::{Catalog, Product, Store};

/// Whether a product name contains the search term, ignoring case.
///
/// An empty term matches every product.
#[must_use]
pub fn matches(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(&term.to_lowercase())
}

/// Products whose name contains `term`, in catalog order.
#[must_use]
pub fn filter_products<'a, I>(products: I, term: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = term.to_lowercase();
    products
        .into_iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// Another store's price for a product, with its distance from the selected store.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPrice<'a> {
    pub store: &'a Store,
    pub price: Price,
    pub distance_km: f64,
}

/// Prices at every other store carrying the product, in price-list order.
///
/// Entries for stores missing from the catalog are skipped.
#[must_use]
pub fn nearby_prices<'a>(
    catalog: &'a Catalog,
    product: &Product,
    current: &Store,
) -> Vec<NearbyPrice<'a>> {
    product
        .prices
        .iter()
        .filter(|entry| entry.store_id != current.id)
        .filter_map(|entry| {
            let store = catalog.store(entry.store_id)?;
            Some(NearbyPrice {
                store,
                price: entry.price(),
                distance_km: distance_km(current.coordinates(), store.coordinates()),
            })
        })
        .collect()
}

/// A product as listed for the selected store.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    pub product: &'a Product,
    pub current_price: Option<Price>,
    pub nearby: Vec<NearbyPrice<'a>>,
}

/// Visible products for a store and search term, with price comparisons.
#[must_use]
pub fn listings<'a>(catalog: &'a Catalog, store: &'a Store, term: &str) -> Vec<Listing<'a>> {
    filter_products(catalog.products(), term)
        .into_iter()
        .map(|product| Listing {
            product,
            current_price: product.price_at(store.id),
            nearby: nearby_prices(catalog, product, store),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use webenv_core::StoreId;

    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = Catalog::builtin().unwrap();
        let found = filter_products(catalog.products(), "CHICK");
        assert_eq!(names(&found), ["Chicken", "Chicken Breast"]);
    }

    #[test]
    fn test_result_is_exact_subset_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        for term in ["", "a", "butter", "Pack", "o", "zzz", "SUSHI platter"] {
            let found = filter_products(catalog.products(), term);
            let expected: Vec<&Product> = catalog
                .products()
                .iter()
                .filter(|p| matches(p, term))
                .collect();
            assert_eq!(found, expected, "term {term:?}");
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        for term in ["", "er", "Cheese", "nothing"] {
            let once = filter_products(catalog.products(), term);
            let twice = filter_products(once.iter().copied(), term);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        assert!(filter_products(catalog.products(), "unicorn").is_empty());
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(filter_products(catalog.products(), "").len(), 24);
    }

    #[test]
    fn test_nearby_prices_exclude_current_store() {
        let catalog = Catalog::builtin().unwrap();
        let target = catalog.store(StoreId::new(1)).unwrap();
        let bacon = catalog.products().first().unwrap();

        let nearby = nearby_prices(&catalog, bacon, target);
        let ids: Vec<i32> = nearby.iter().map(|n| n.store.id.as_i32()).collect();
        assert_eq!(ids, [2, 3, 4]);

        let whole_foods = nearby.first().unwrap();
        assert_eq!(whole_foods.price.to_string(), "$6.19");
        assert!((whole_foods.distance_km - 1.82).abs() < 1e-9);
    }

    #[test]
    fn test_listings_carry_current_price() {
        let catalog = Catalog::builtin().unwrap();
        let whole_foods = catalog.store(StoreId::new(2)).unwrap();
        let listings = listings(&catalog, whole_foods, "bacon");
        assert_eq!(listings.len(), 1);
        let bacon = listings.first().unwrap();
        assert_eq!(bacon.current_price.unwrap().to_string(), "$6.19");
        assert_eq!(bacon.nearby.len(), 3);
    }
}
