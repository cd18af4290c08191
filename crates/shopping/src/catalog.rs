//! Store and product reference catalog.
//!
//! The catalog is loaded once at startup and never mutated afterwards. The
//! built-in data set is embedded in the binary; `SHOP_CATALOG_PATH` can point
//! at a replacement file with the same JSON shape.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use webenv_core::{Coordinates, Price, ProductId, StoreId};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no stores")]
    NoStores,
    #[error("duplicate store id {0}")]
    DuplicateStore(StoreId),
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
    #[error("product {product} has a price for unknown store {store}")]
    UnknownStore { product: ProductId, store: StoreId },
}

/// A physical store location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    /// Neighbourhood label shown next to the name.
    pub location: String,
    pub lat: f64,
    pub lon: f64,
}

impl Store {
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lon)
    }

    /// Label used in the store selector, e.g. "Target - Uptown".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.location)
    }
}

/// A product's price at one store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorePrice {
    pub store_id: StoreId,
    pub price: Decimal,
}

impl StorePrice {
    #[must_use]
    pub const fn price(&self) -> Price {
        Price::usd(self.price)
    }
}

/// A product offered by one or more stores.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub prices: Vec<StorePrice>,
    /// Average rating between 0 and 5.
    pub rating: f64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl Product {
    /// Price of this product at the given store, if the store carries it.
    #[must_use]
    pub fn price_at(&self, store: StoreId) -> Option<Price> {
        self.prices
            .iter()
            .find(|entry| entry.store_id == store)
            .map(StorePrice::price)
    }

    /// First size option, used whenever a purchase starts or a size is invalid.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// First color option.
    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Resolve a requested size against the size list.
    ///
    /// Returns the requested size when valid, the first size otherwise, and
    /// `None` for products without sizes.
    #[must_use]
    pub fn resolve_size(&self, requested: Option<&str>) -> Option<String> {
        requested
            .filter(|size| self.has_size(size))
            .or_else(|| self.default_size())
            .map(str::to_string)
    }

    /// Resolve a requested color the same way as [`Product::resolve_size`].
    #[must_use]
    pub fn resolve_color(&self, requested: Option<&str>) -> Option<String> {
        requested
            .filter(|color| self.has_color(color))
            .or_else(|| self.default_color())
            .map(str::to_string)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    stores: Vec<Store>,
    products: Vec<Product>,
}

/// The immutable store and product catalog.
///
/// Always holds at least one store; the first store is the default selection.
#[derive(Debug, Clone)]
pub struct Catalog {
    stores: Vec<Store>,
    products: Vec<Product>,
    default_store: StoreId,
}

impl Catalog {
    /// Build a catalog, validating ids and price references.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if there are no stores, ids repeat, or a price
    /// refers to a store that does not exist.
    pub fn new(stores: Vec<Store>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let default_store = stores.first().ok_or(CatalogError::NoStores)?.id;

        let mut store_ids = HashSet::new();
        for store in &stores {
            if !store_ids.insert(store.id) {
                return Err(CatalogError::DuplicateStore(store.id));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
            if let Some(entry) = product
                .prices
                .iter()
                .find(|entry| !store_ids.contains(&entry.store_id))
            {
                return Err(CatalogError::UnknownStore {
                    product: product.id,
                    store: entry.store_id,
                });
            }
        }

        Ok(Self {
            stores,
            products,
            default_store,
        })
    }

    /// The catalog shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded data is invalid.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on malformed JSON or invalid contents.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.stores, file.products)
    }

    /// Load a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or is invalid.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Id of the first store in the catalog.
    #[must_use]
    pub const fn default_store_id(&self) -> StoreId {
        self.default_store
    }

    #[must_use]
    pub fn store(&self, id: StoreId) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == id)
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn has_store(&self, id: StoreId) -> bool {
        self.store(id).is_some()
    }
}
