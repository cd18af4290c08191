//! HTTP route handlers for the shop.
//!
//! The query string of `GET /` is the whole view state. Every action form
//! posts the current query string in a hidden `state` field; the handler
//! applies one interaction and redirects to the URL of the new state.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product listing, modals from query string
//! GET  /health                 - Health check
//!
//! # View state
//! POST /store                  - Select store
//! POST /search                 - Set search text
//! POST /purchase/open          - Open purchase modal for a product
//! POST /purchase/close         - Close purchase modal
//! POST /purchase/options       - Change modal size / quantity
//!
//! # Cart
//! POST /cart/add               - Add modal selection to cart
//! POST /cart/open              - Open cart modal
//! POST /cart/close             - Close cart modal
//! POST /cart/remove            - Remove cart line by index
//! POST /cart/checkout          - Checkout
//! ```

pub mod cart;
pub mod shop;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::cart::Cart;
use crate::error::Result;
use crate::middleware::session::keys;
use crate::shop::ShopSession;
use crate::state::AppState;

/// Path of the listing page.
pub const INDEX_PATH: &str = "/";

/// Form carrying nothing but the current view state.
#[derive(Debug, Deserialize)]
pub struct StateForm {
    #[serde(default)]
    pub state: String,
}

/// Load the visitor's cart from the session.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Apply one interaction to the state encoded in `query` and redirect to
/// the resulting URL. The cart is written back only when it changed.
pub(crate) async fn apply<F>(
    state: &AppState,
    session: &Session,
    query: &str,
    action: F,
) -> Result<axum::response::Redirect>
where
    F: FnOnce(&mut ShopSession<'_>),
{
    let before = load_cart(session).await?;
    let mut shop = ShopSession::from_query(state.catalog(), query, before.clone());

    action(&mut shop);

    let url = shop.url(INDEX_PATH);
    let cart = shop.into_cart();
    if cart != before {
        session.insert(keys::CART, &cart).await?;
    }

    Ok(axum::response::Redirect::to(&url))
}

/// Create the purchase modal routes router.
pub fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(shop::open_purchase))
        .route("/close", post(shop::close_purchase))
        .route("/options", post(shop::purchase_options))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/remove", post(cart::remove))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(INDEX_PATH, get(shop::index))
        .route("/store", post(shop::select_store))
        .route("/search", post(shop::search))
        .nest("/purchase", purchase_routes())
        .nest("/cart", cart_routes())
}
