//! Session shopping cart.
//!
//! The cart only lives in the visitor's session. Checkout clears it; there is
//! no order persistence and no payment step.

use serde::{Deserialize, Serialize};
use webenv_core::{CurrencyCode, Price, ProductId, Quantity};

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Price,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: Quantity,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Result of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Number of cart lines that were checked out.
    pub lines: usize,
}

/// Ordered list of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the line at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Empty the cart.
    pub fn checkout(&mut self) -> CheckoutSummary {
        let lines = self.items.len();
        self.items.clear();
        CheckoutSummary { lines }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (not units), as shown on the cart badge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals. Lines in a currency other than the first line's are skipped.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or(CurrencyCode::default(), |item| item.unit_price.currency_code);

        self.items
            .iter()
            .map(CartItem::line_total)
            .fold(Price::zero(currency), |total, line| {
                total.checked_add(line).unwrap_or(total)
            })
    }
}
