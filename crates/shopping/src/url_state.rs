//! Projection of [`ViewState`] into the URL query string and back.
//!
//! Parameters, in serialization order:
//!
//! ```text
//! storeId  store id, omitted for the default store
//! search   search text, omitted when empty
//! product  product id of the open purchase modal
//! size     modal size, only for products that have sizes
//! color    modal color, omitted for the product's first color
//! qty      modal quantity, omitted when 1
//! cart     literal "open" when the cart modal is open
//! ```
//!
//! Parsing never fails: unknown stores, products, sizes, colors and
//! quantities fall back to their defaults.

use url::form_urlencoded;
use webenv_core::{ProductId, Quantity, StoreId};

use crate::catalog::Catalog;
use crate::view_state::{Modal, PurchaseSelection, ViewState};

/// Query parameter names.
pub mod params {
    pub const STORE_ID: &str = "storeId";
    pub const SEARCH: &str = "search";
    pub const PRODUCT: &str = "product";
    pub const SIZE: &str = "size";
    pub const COLOR: &str = "color";
    pub const QTY: &str = "qty";
    pub const CART: &str = "cart";

    /// Value of [`CART`] when the cart modal is open.
    pub const CART_OPEN: &str = "open";
}

/// Raw parameter values; the first occurrence of each name wins.
#[derive(Debug, Default)]
struct RawParams {
    store_id: Option<String>,
    search: Option<String>,
    product: Option<String>,
    size: Option<String>,
    color: Option<String>,
    qty: Option<String>,
    cart: Option<String>,
}

impl RawParams {
    fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut raw = Self::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                params::STORE_ID => &mut raw.store_id,
                params::SEARCH => &mut raw.search,
                params::PRODUCT => &mut raw.product,
                params::SIZE => &mut raw.size,
                params::COLOR => &mut raw.color,
                params::QTY => &mut raw.qty,
                params::CART => &mut raw.cart,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        raw
    }
}

/// Serialize the state into a query string without the leading `?`.
#[must_use]
pub fn to_query(state: &ViewState, catalog: &Catalog) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    if state.store != catalog.default_store_id() {
        query.append_pair(params::STORE_ID, &state.store.to_string());
    }
    if !state.search.is_empty() {
        query.append_pair(params::SEARCH, &state.search);
    }

    match &state.modal {
        Modal::Purchase(selection) => {
            query.append_pair(params::PRODUCT, &selection.product.to_string());

            let product = catalog.product(selection.product);
            let has_sizes = product.is_some_and(|product| !product.sizes.is_empty());
            if let (true, Some(size)) = (has_sizes, &selection.size) {
                query.append_pair(params::SIZE, size);
            }
            let default_color = product.and_then(|product| product.default_color());
            if let Some(color) = selection.color.as_deref().filter(|c| Some(*c) != default_color) {
                query.append_pair(params::COLOR, color);
            }
            if selection.quantity > Quantity::ONE {
                query.append_pair(params::QTY, &selection.quantity.to_string());
            }
        }
        Modal::Cart => {
            query.append_pair(params::CART, params::CART_OPEN);
        }
        Modal::Closed => {}
    }

    query.finish()
}

/// Rebuild the state from a query string (with or without the leading `?`).
#[must_use]
pub fn from_query(query: &str, catalog: &Catalog) -> ViewState {
    let raw = RawParams::parse(query);

    let store = raw
        .store_id
        .as_deref()
        .and_then(|id| id.parse::<StoreId>().ok())
        .filter(|id| catalog.has_store(*id))
        .unwrap_or_else(|| catalog.default_store_id());

    let purchase = raw
        .product
        .as_deref()
        .and_then(|id| id.parse::<ProductId>().ok())
        .and_then(|id| catalog.product(id))
        .map(|product| PurchaseSelection {
            product: product.id,
            size: product.resolve_size(raw.size.as_deref()),
            color: product.resolve_color(raw.color.as_deref()),
            quantity: raw.qty.as_deref().map(Quantity::coerce).unwrap_or_default(),
        });

    let modal = match purchase {
        Some(selection) => Modal::Purchase(selection),
        None if raw.cart.as_deref() == Some(params::CART_OPEN) => Modal::Cart,
        None => Modal::Closed,
    };

    ViewState {
        store,
        search: raw.search.unwrap_or_default(),
        modal,
    }
}

/// Full URL for `path` carrying the serialized state.
#[must_use]
pub fn to_url(path: &str, state: &ViewState, catalog: &Catalog) -> String {
    join(path, &to_query(state, catalog))
}

fn join(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// One-way mirror of the view state into a navigation history.
///
/// [`UrlSync::sync`] pushes a new entry only when the serialized state differs
/// from the current URL, so repeated syncs of an unchanged state never add
/// redundant history entries.
#[derive(Debug, Clone)]
pub struct UrlSync {
    path: String,
    history: Vec<String>,
}

impl UrlSync {
    /// Start from the URL the page was loaded with.
    #[must_use]
    pub fn new(path: impl Into<String>, initial_query: &str) -> Self {
        let path = path.into();
        let current = join(&path, initial_query.strip_prefix('?').unwrap_or(initial_query));
        Self {
            path,
            history: vec![current],
        }
    }

    /// Mirror `state`; returns the new URL when an entry was pushed.
    pub fn sync(&mut self, state: &ViewState, catalog: &Catalog) -> Option<&str> {
        let url = to_url(&self.path, state, catalog);
        if self.history.last() == Some(&url) {
            return None;
        }
        self.history.push(url);
        self.history.last().map(String::as_str)
    }

    /// The URL currently shown.
    #[must_use]
    pub fn current(&self) -> &str {
        self.history.last().map_or(self.path.as_str(), String::as_str)
    }

    /// Every URL visited, oldest first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_default_state_serializes_empty() {
        let catalog = catalog();
        assert_eq!(to_query(&ViewState::new(&catalog), &catalog), "");
        assert_eq!(to_url("/", &ViewState::new(&catalog), &catalog), "/");
    }

    #[test]
    fn test_parameter_order_and_encoding() {
        let catalog = catalog();
        let mut state = ViewState::new(&catalog);
        state.select_store(&catalog, StoreId::new(2));
        state.set_search("peanut butter & jam");
        let sofa = catalog.product(ProductId::new(1)).unwrap();
        state.open_purchase(sofa);
        state.select_size(sofa, "Large");
        state.set_quantity("3");

        assert_eq!(
            to_query(&state, &catalog),
            "storeId=2&search=peanut+butter+%26+jam&product=1&size=Large&qty=3"
        );
    }

    #[test]
    fn test_cart_param() {
        let catalog = catalog();
        let mut state = ViewState::new(&catalog);
        state.open_cart();
        assert_eq!(to_query(&state, &catalog), "cart=open");
    }

    #[test]
    fn test_quantity_one_is_omitted() {
        let catalog = catalog();
        let mut state = ViewState::new(&catalog);
        state.open_purchase(catalog.product(ProductId::new(3)).unwrap());
        assert_eq!(to_query(&state, &catalog), "product=3&size=Standard");
    }

    #[test]
    fn test_unknown_store_falls_back_to_first() {
        let catalog = catalog();
        let state = from_query("storeId=9999", &catalog);
        assert_eq!(state.store, StoreId::new(1));

        let state = from_query("storeId=abc&search=milk", &catalog);
        assert_eq!(state.store, StoreId::new(1));
        assert_eq!(state.search, "milk");
    }

    #[test]
    fn test_unknown_product_opens_nothing() {
        let catalog = catalog();
        let state = from_query("product=404&size=Large&qty=2", &catalog);
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    fn test_invalid_size_and_quantity_fall_back() {
        let catalog = catalog();
        let state = from_query("?product=1&size=Enormous&qty=-3", &catalog);
        let selection = state.purchase().unwrap();
        assert_eq!(selection.size.as_deref(), Some("Small"));
        assert_eq!(selection.quantity, Quantity::ONE);

        let state = from_query("product=1&qty=zero", &catalog);
        assert_eq!(state.purchase().unwrap().quantity, Quantity::ONE);
    }

    #[test]
    fn test_color_param() {
        let catalog = catalog();
        let mut state = ViewState::new(&catalog);
        let sofa = catalog.product(ProductId::new(1)).unwrap();
        state.open_purchase(sofa);
        assert_eq!(to_query(&state, &catalog), "product=1&size=Small");

        state.select_color(sofa, "Blue");
        state.set_quantity("2");
        assert_eq!(to_query(&state, &catalog), "product=1&size=Small&color=Blue&qty=2");

        let parsed = from_query("product=1&color=Teal", &catalog);
        assert_eq!(parsed.purchase().unwrap().color.as_deref(), Some("Pink"));

        let no_colors = from_query("product=9&color=Blue", &catalog);
        assert_eq!(no_colors.purchase().unwrap().color, None);
        assert_eq!(to_query(&no_colors, &catalog), "product=9&size=Personal");
    }

    #[test]
    fn test_purchase_wins_over_cart() {
        let catalog = catalog();
        let state = from_query("product=2&cart=open", &catalog);
        assert!(state.is_purchase_open());
        assert!(!state.is_cart_open());
    }

    #[test]
    fn test_cart_requires_literal_open() {
        let catalog = catalog();
        assert!(from_query("cart=open", &catalog).is_cart_open());
        assert!(!from_query("cart=1", &catalog).is_cart_open());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let catalog = catalog();
        let state = from_query("search=first&search=second&storeId=3&storeId=4", &catalog);
        assert_eq!(state.search, "first");
        assert_eq!(state.store, StoreId::new(3));
    }

    #[test]
    fn test_round_trip_over_reachable_states() {
        let catalog = catalog();
        let mut checked = 0;

        for store in catalog.stores() {
            for search in ["", "a b", "Café & co", "100%"] {
                let mut base = ViewState::new(&catalog);
                base.select_store(&catalog, store.id);
                base.set_search(search);

                let mut cart_open = base.clone();
                cart_open.open_cart();
                for state in [base.clone(), cart_open] {
                    assert_eq!(from_query(&to_query(&state, &catalog), &catalog), state);
                    checked += 1;
                }

                for product in catalog.products() {
                    let sizes: Vec<Option<&str>> = if product.sizes.is_empty() {
                        vec![None]
                    } else {
                        product.sizes.iter().map(|s| Some(s.as_str())).collect()
                    };
                    let colors: Vec<Option<&str>> = if product.colors.is_empty() {
                        vec![None]
                    } else {
                        product.colors.iter().map(|c| Some(c.as_str())).collect()
                    };
                    for size in sizes {
                        for &color in &colors {
                            for qty in ["1", "12"] {
                                let mut state = base.clone();
                                state.open_purchase(product);
                                if let Some(size) = size {
                                    state.select_size(product, size);
                                }
                                if let Some(color) = color {
                                    state.select_color(product, color);
                                }
                                state.set_quantity(qty);

                                let query = to_query(&state, &catalog);
                                assert_eq!(from_query(&query, &catalog), state, "query {query}");
                                checked += 1;
                            }
                        }
                    }
                }
            }
        }

        assert!(checked > 1000);
    }

    #[test]
    fn test_sync_pushes_only_on_change() {
        let catalog = catalog();
        let mut sync = UrlSync::new("/", "");
        let mut state = ViewState::new(&catalog);

        assert_eq!(sync.sync(&state, &catalog), None);
        state.set_search("tea");
        assert_eq!(sync.sync(&state, &catalog), Some("/?search=tea"));
        assert_eq!(sync.sync(&state, &catalog), None);
        state.open_cart();
        assert_eq!(sync.sync(&state, &catalog), Some("/?search=tea&cart=open"));

        assert_eq!(sync.history(), ["/", "/?search=tea", "/?search=tea&cart=open"]);
        assert_eq!(sync.current(), "/?search=tea&cart=open");
    }

    #[test]
    fn test_sync_canonicalizes_initial_url() {
        let catalog = catalog();
        let mut sync = UrlSync::new("/", "?storeId=9999&product=1&size=Huge&color=Pink");
        let state = from_query("storeId=9999&product=1&size=Huge&color=Pink", &catalog);

        assert_eq!(sync.sync(&state, &catalog), Some("/?product=1&size=Small"));

        let mut canonical = UrlSync::new("/", "product=1&size=Small");
        let state = from_query("product=1&size=Small", &catalog);
        assert_eq!(canonical.sync(&state, &catalog), None);
    }
}
