//! UI-controlled view state and its interaction handlers.
//!
//! The state is a plain value: every handler takes `&mut self`, applies one
//! change and leaves the state valid. The purchase modal and the cart modal
//! are variants of the same enum, so at most one of them is ever open.

use webenv_core::{ProductId, Quantity, StoreId};

use crate::catalog::{Catalog, Product};

/// Size, color and quantity chosen in an open purchase modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseSelection {
    pub product: ProductId,
    /// `None` only for products without sizes.
    pub size: Option<String>,
    /// `None` only for products without colors.
    pub color: Option<String>,
    pub quantity: Quantity,
}

impl PurchaseSelection {
    /// Fresh selection for a product: first size, first color, quantity 1.
    #[must_use]
    pub fn for_product(product: &Product) -> Self {
        Self {
            product: product.id,
            size: product.default_size().map(str::to_string),
            color: product.default_color().map(str::to_string),
            quantity: Quantity::ONE,
        }
    }
}

/// Which modal, if any, is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Purchase(PurchaseSelection),
    Cart,
}

/// The complete set of UI-controlled values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub store: StoreId,
    pub search: String,
    pub modal: Modal,
}

impl ViewState {
    /// Initial state: default store, no search, no modal.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            store: catalog.default_store_id(),
            search: String::new(),
            modal: Modal::Closed,
        }
    }

    /// Switch to another store. Unknown ids leave the selection unchanged.
    pub fn select_store(&mut self, catalog: &Catalog, store: StoreId) -> bool {
        if catalog.has_store(store) {
            self.store = store;
            true
        } else {
            false
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Open the purchase modal with a fresh selection; closes the cart modal.
    pub fn open_purchase(&mut self, product: &Product) {
        self.modal = Modal::Purchase(PurchaseSelection::for_product(product));
    }

    pub fn close_purchase(&mut self) {
        if self.is_purchase_open() {
            self.modal = Modal::Closed;
        }
    }

    /// Open the cart modal; closes the purchase modal and clears its product.
    pub fn open_cart(&mut self) {
        self.modal = Modal::Cart;
    }

    pub fn close_cart(&mut self) {
        if self.is_cart_open() {
            self.modal = Modal::Closed;
        }
    }

    /// Change the modal size. Sizes the product does not offer are ignored.
    pub fn select_size(&mut self, product: &Product, size: &str) -> bool {
        match &mut self.modal {
            Modal::Purchase(selection) if selection.product == product.id && product.has_size(size) => {
                selection.size = Some(size.to_string());
                true
            }
            _ => false,
        }
    }

    /// Change the modal color. Colors the product does not offer are ignored.
    pub fn select_color(&mut self, product: &Product, color: &str) -> bool {
        match &mut self.modal {
            Modal::Purchase(selection) if selection.product == product.id && product.has_color(color) => {
                selection.color = Some(color.to_string());
                true
            }
            _ => false,
        }
    }

    /// Change the modal quantity from raw input; invalid input becomes 1.
    pub fn set_quantity(&mut self, input: &str) {
        if let Modal::Purchase(selection) = &mut self.modal {
            selection.quantity = Quantity::coerce(input);
        }
    }

    #[must_use]
    pub const fn is_purchase_open(&self) -> bool {
        matches!(self.modal, Modal::Purchase(_))
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        matches!(self.modal, Modal::Cart)
    }

    #[must_use]
    pub const fn purchase(&self) -> Option<&PurchaseSelection> {
        match &self.modal {
            Modal::Purchase(selection) => Some(selection),
            _ => None,
        }
    }

    /// Product shown in the purchase modal.
    #[must_use]
    pub fn selected_product(&self) -> Option<ProductId> {
        self.purchase().map(|selection| selection.product)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn setup() -> (Catalog, ViewState) {
        let catalog = Catalog::builtin().unwrap();
        let state = ViewState::new(&catalog);
        (catalog, state)
    }

    #[test]
    fn test_initial_state() {
        let (catalog, state) = setup();
        assert_eq!(state.store, catalog.default_store_id());
        assert!(state.search.is_empty());
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    fn test_select_unknown_store_is_ignored() {
        let (catalog, mut state) = setup();
        assert!(state.select_store(&catalog, StoreId::new(3)));
        assert!(!state.select_store(&catalog, StoreId::new(9999)));
        assert_eq!(state.store, StoreId::new(3));
    }

    #[test]
    fn test_open_purchase_resets_selection() {
        let (catalog, mut state) = setup();
        let sofa = catalog.product(ProductId::new(1)).unwrap();
        state.open_purchase(sofa);
        state.select_size(sofa, "Large");
        state.set_quantity("4");

        let laptop = catalog.product(ProductId::new(4)).unwrap();
        state.open_purchase(laptop);
        let selection = state.purchase().unwrap();
        assert_eq!(selection.product, laptop.id);
        assert_eq!(selection.size.as_deref(), Some("13-inch"));
        assert_eq!(selection.quantity, Quantity::ONE);
    }

    #[test]
    fn test_modals_are_exclusive() {
        let (catalog, mut state) = setup();
        let sofa = catalog.product(ProductId::new(1)).unwrap();

        state.open_purchase(sofa);
        state.open_cart();
        assert!(state.is_cart_open());
        assert!(!state.is_purchase_open());
        assert_eq!(state.selected_product(), None);

        state.open_purchase(sofa);
        assert!(state.is_purchase_open());
        assert!(!state.is_cart_open());
    }

    #[test]
    fn test_close_only_affects_matching_modal() {
        let (catalog, mut state) = setup();
        state.open_cart();
        state.close_purchase();
        assert!(state.is_cart_open());
        state.close_cart();
        assert_eq!(state.modal, Modal::Closed);

        state.open_purchase(catalog.product(ProductId::new(2)).unwrap());
        state.close_cart();
        assert!(state.is_purchase_open());
        state.close_purchase();
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    fn test_invalid_size_is_ignored() {
        let (catalog, mut state) = setup();
        let sofa = catalog.product(ProductId::new(1)).unwrap();
        state.open_purchase(sofa);
        assert!(!state.select_size(sofa, "Gigantic"));
        assert_eq!(state.purchase().unwrap().size.as_deref(), Some("Small"));
    }

    #[test]
    fn test_color_survives_size_and_quantity_changes() {
        let (catalog, mut state) = setup();
        let sofa = catalog.product(ProductId::new(1)).unwrap();
        state.open_purchase(sofa);
        assert_eq!(state.purchase().unwrap().color.as_deref(), Some("Pink"));

        assert!(state.select_color(sofa, "Blue"));
        state.select_size(sofa, "Large");
        state.set_quantity("2");
        assert!(!state.select_color(sofa, "Teal"));

        let selection = state.purchase().unwrap();
        assert_eq!(selection.color.as_deref(), Some("Blue"));
        assert_eq!(selection.size.as_deref(), Some("Large"));

        state.open_purchase(sofa);
        assert_eq!(state.purchase().unwrap().color.as_deref(), Some("Pink"));
    }

    #[test]
    fn test_quantity_coerces_invalid_input() {
        let (catalog, mut state) = setup();
        state.open_purchase(catalog.product(ProductId::new(9)).unwrap());
        state.set_quantity("3");
        assert_eq!(state.purchase().unwrap().quantity.get(), 3);
        state.set_quantity("-1");
        assert_eq!(state.purchase().unwrap().quantity.get(), 1);
        state.set_quantity("many");
        assert_eq!(state.purchase().unwrap().quantity.get(), 1);
    }

    #[test]
    fn test_quantity_without_purchase_modal_is_noop() {
        let (_, mut state) = setup();
        state.set_quantity("5");
        assert_eq!(state.modal, Modal::Closed);
    }
}
