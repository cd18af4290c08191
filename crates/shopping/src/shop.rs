//! Shopping session: view state and cart driven together.
//!
//! Most interactions only touch the [`ViewState`]; adding to the cart and
//! checking out also touch the [`Cart`]. Each handler applies one
//! interaction, and [`ShopSession::url`] gives the URL the browser should
//! show afterwards.

use webenv_core::{CurrencyCode, Price, ProductId, StoreId};

use crate::cart::{Cart, CartItem, CheckoutSummary};
use crate::catalog::{Catalog, Product, Store};
use crate::filter::{self, Listing};
use crate::url_state;
use crate::view_state::ViewState;

/// View state and cart of one visitor.
#[derive(Debug, Clone)]
pub struct ShopSession<'c> {
    catalog: &'c Catalog,
    view: ViewState,
    cart: Cart,
}

impl<'c> ShopSession<'c> {
    #[must_use]
    pub const fn new(catalog: &'c Catalog, view: ViewState, cart: Cart) -> Self {
        Self {
            catalog,
            view,
            cart,
        }
    }

    /// Restore a session from the page's query string and the stored cart.
    #[must_use]
    pub fn from_query(catalog: &'c Catalog, query: &str, cart: Cart) -> Self {
        Self::new(catalog, url_state::from_query(query, catalog), cart)
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// URL projecting the current view state.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        url_state::to_url(path, &self.view, self.catalog)
    }

    /// Query string projecting the current view state.
    #[must_use]
    pub fn query(&self) -> String {
        url_state::to_query(&self.view, self.catalog)
    }

    /// The selected store.
    ///
    /// The view state only ever holds catalog store ids; the default store is
    /// returned if that ever stops holding.
    #[must_use]
    pub fn store(&self) -> Option<&'c Store> {
        self.catalog
            .store(self.view.store)
            .or_else(|| self.catalog.store(self.catalog.default_store_id()))
    }

    /// Product of the open purchase modal.
    #[must_use]
    pub fn selected_product(&self) -> Option<&'c Product> {
        self.view
            .selected_product()
            .and_then(|id| self.catalog.product(id))
    }

    /// Products visible for the current store and search.
    #[must_use]
    pub fn listings(&self) -> Vec<Listing<'c>> {
        self.store().map_or_else(Vec::new, |store| {
            filter::listings(self.catalog, store, &self.view.search)
        })
    }

    pub fn select_store(&mut self, store: StoreId) -> bool {
        self.view.select_store(self.catalog, store)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.view.set_search(term);
    }

    /// Open the purchase modal. Unknown products leave the state unchanged.
    pub fn open_purchase(&mut self, product: ProductId) -> bool {
        match self.catalog.product(product) {
            Some(product) => {
                self.view.open_purchase(product);
                true
            }
            None => false,
        }
    }

    pub fn close_purchase(&mut self) {
        self.view.close_purchase();
    }

    /// Update modal size, color and quantity from form input.
    pub fn set_purchase_options(
        &mut self,
        size: Option<&str>,
        color: Option<&str>,
        quantity: Option<&str>,
    ) {
        if let Some(product) = self.selected_product() {
            if let Some(size) = size {
                self.view.select_size(product, size);
            }
            if let Some(color) = color {
                self.view.select_color(product, color);
            }
        }
        if let Some(quantity) = quantity {
            self.view.set_quantity(quantity);
        }
    }

    /// Add the purchase-modal selection to the cart and close the modal.
    ///
    /// The unit price is the selected store's price, or zero when that store
    /// does not carry the product.
    pub fn add_to_cart(&mut self) -> Option<&CartItem> {
        let product = self.selected_product()?;
        let selection = self.view.purchase()?.clone();

        let unit_price = self
            .store()
            .and_then(|store| product.price_at(store.id))
            .unwrap_or_else(|| Price::zero(CurrencyCode::USD));

        self.cart.add(CartItem {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            unit_price,
            color: selection.color,
            size: selection.size,
            quantity: selection.quantity,
        });
        self.view.close_purchase();

        tracing::debug!(product_id = %product.id, lines = self.cart.len(), "added to cart");
        self.cart.items().last()
    }

    pub fn remove_cart_item(&mut self, index: usize) -> Option<CartItem> {
        self.cart.remove(index)
    }

    pub fn open_cart(&mut self) {
        self.view.open_cart();
    }

    pub fn close_cart(&mut self) {
        self.view.close_cart();
    }

    /// Empty the cart and close the cart modal.
    pub fn checkout(&mut self) -> CheckoutSummary {
        let summary = self.cart.checkout();
        self.view.close_cart();
        tracing::info!(lines = summary.lines, "checkout completed");
        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use webenv_core::Quantity;

    use super::*;
    use crate::view_state::Modal;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_add_to_cart_records_selection() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "storeId=2", Cart::new());

        assert!(shop.open_purchase(ProductId::new(1)));
        shop.set_purchase_options(Some("Large"), Some("Blue"), Some("3"));
        let item = shop.add_to_cart().unwrap().clone();

        assert_eq!(item.name, "Sofa");
        assert_eq!(item.size.as_deref(), Some("Large"));
        assert_eq!(item.color.as_deref(), Some("Blue"));
        assert_eq!(item.quantity.get(), 3);
        assert_eq!(
            Some(item.unit_price),
            catalog.product(ProductId::new(1)).unwrap().price_at(StoreId::new(2))
        );
        assert_eq!(shop.view().modal, Modal::Closed);
        assert_eq!(shop.url("/"), "/?storeId=2");
    }

    #[test]
    fn test_add_then_remove_returns_to_empty_cart() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "product=7&size=Large&qty=3", Cart::new());

        let item = shop.add_to_cart().unwrap().clone();
        assert_eq!(item.size.as_deref(), Some("Large"));
        assert_eq!(item.quantity, Quantity::new(3).unwrap());
        assert_eq!(item.color.as_deref(), Some("Black"));

        shop.remove_cart_item(0);
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_add_without_open_modal_is_noop() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "", Cart::new());
        assert!(shop.add_to_cart().is_none());
        assert!(shop.cart().is_empty());
    }

    #[test]
    fn test_unknown_product_does_not_open_modal() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "", Cart::new());
        assert!(!shop.open_purchase(ProductId::new(404)));
        assert_eq!(shop.view().modal, Modal::Closed);
    }

    #[test]
    fn test_checkout_clears_cart_and_closes_modal() {
        let catalog = catalog();
        for n in 0..4 {
            let mut shop = ShopSession::from_query(&catalog, "", Cart::new());
            for _ in 0..n {
                shop.open_purchase(ProductId::new(18));
                shop.add_to_cart();
            }
            shop.open_cart();

            let summary = shop.checkout();
            assert_eq!(summary.lines, n);
            assert!(shop.cart().is_empty());
            assert!(!shop.view().is_cart_open());
            assert_eq!(shop.url("/"), "/");
        }
    }

    #[test]
    fn test_listings_follow_search_and_store() {
        let catalog = catalog();
        let shop = ShopSession::from_query(&catalog, "storeId=4&search=oil", Cart::new());
        let listings = shop.listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings.first().unwrap().product.name, "Olive Oil");
        assert!(listings.first().unwrap().nearby.iter().all(|n| n.store.id != StoreId::new(4)));
    }

    #[test]
    fn test_options_ignore_invalid_size() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "product=4", Cart::new());
        shop.set_purchase_options(Some("30-inch"), Some("Teal"), Some("0"));
        assert_eq!(shop.query(), "product=4&size=13-inch");
    }

    #[test]
    fn test_chosen_color_is_kept_until_added() {
        let catalog = catalog();
        let mut shop = ShopSession::from_query(&catalog, "product=1", Cart::new());
        shop.set_purchase_options(Some("Small"), Some("Blue"), Some("1"));
        assert_eq!(shop.query(), "product=1&size=Small&color=Blue");

        let mut shop = ShopSession::from_query(&catalog, &shop.query(), Cart::new());
        shop.set_purchase_options(Some("Large"), None, Some("2"));
        assert_eq!(shop.query(), "product=1&size=Large&color=Blue&qty=2");

        let item = shop.add_to_cart().unwrap().clone();
        assert_eq!(item.color.as_deref(), Some("Blue"));
    }
}
