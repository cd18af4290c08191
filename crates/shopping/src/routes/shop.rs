//! Listing page and view-state handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{RawQuery, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use webenv_core::{ProductId, StoreId};

use super::{INDEX_PATH, StateForm, apply, load_cart};
use crate::error::Result;
use crate::filter::Listing;
use crate::middleware::session::keys;
use crate::rating::StarRating;
use crate::shop::ShopSession;
use crate::state::AppState;
use crate::url_state::UrlSync;

/// Shown instead of a price when the selected store does not carry a product.
const UNAVAILABLE: &str = "N/A";

// =============================================================================
// View Models
// =============================================================================

/// Entry of the store selector.
#[derive(Clone)]
pub struct StoreOption {
    pub id: StoreId,
    pub label: String,
    pub selected: bool,
}

/// Another store's price next to a product.
#[derive(Clone)]
pub struct NearbyView {
    pub label: String,
    pub price: String,
    pub distance: String,
}

/// Product card in the listing.
#[derive(Clone)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub stars: String,
    pub rating: String,
    pub price: String,
    pub nearby: Vec<NearbyView>,
}

impl From<&Listing<'_>> for ProductCard {
    fn from(listing: &Listing<'_>) -> Self {
        let product = listing.product;
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            stars: StarRating::from_rating(product.rating).glyphs(),
            rating: format!("{:.1}", product.rating),
            price: listing
                .current_price
                .map_or_else(|| UNAVAILABLE.to_string(), |price| price.to_string()),
            nearby: listing
                .nearby
                .iter()
                .map(|nearby| NearbyView {
                    label: nearby.store.label(),
                    price: nearby.price.to_string(),
                    distance: format!("{:.2} km", nearby.distance_km),
                })
                .collect(),
        }
    }
}

/// Option of a select element.
#[derive(Clone)]
pub struct Choice {
    pub value: String,
    pub selected: bool,
}

/// Open purchase modal.
#[derive(Clone)]
pub struct PurchaseView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub sizes: Vec<Choice>,
    pub colors: Vec<Choice>,
    pub quantity: u32,
}

impl PurchaseView {
    fn from_session(shop: &ShopSession<'_>) -> Option<Self> {
        let product = shop.selected_product()?;
        let selection = shop.view().purchase()?;
        let price = shop
            .store()
            .and_then(|store| product.price_at(store.id))
            .map_or_else(|| UNAVAILABLE.to_string(), |price| price.to_string());

        Some(Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            price,
            sizes: product
                .sizes
                .iter()
                .map(|size| Choice {
                    value: size.clone(),
                    selected: selection.size.as_deref() == Some(size.as_str()),
                })
                .collect(),
            colors: product
                .colors
                .iter()
                .map(|color| Choice {
                    value: color.clone(),
                    selected: selection.color.as_deref() == Some(color.as_str()),
                })
                .collect(),
            quantity: selection.quantity.get(),
        })
    }
}

/// Cart line in the cart modal.
#[derive(Clone)]
pub struct CartLineView {
    pub index: usize,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub line_total: String,
}

/// Open cart modal.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
}

impl CartView {
    fn from_session(shop: &ShopSession<'_>) -> Self {
        let cart = shop.cart();
        Self {
            lines: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartLineView {
                    index,
                    name: item.name.clone(),
                    image: item.image.clone(),
                    unit_price: item.unit_price.to_string(),
                    quantity: item.quantity.get(),
                    color: item.color.clone(),
                    size: item.size.clone(),
                    line_total: item.line_total().to_string(),
                })
                .collect(),
            subtotal: cart.subtotal().to_string(),
        }
    }
}

/// Listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub home_url: String,
    /// Current query string, posted back by every action form.
    pub state: String,
    pub stores: Vec<StoreOption>,
    pub search: String,
    pub products: Vec<ProductCard>,
    pub cart_count: usize,
    pub purchase: Option<PurchaseView>,
    pub cart: Option<CartView>,
    pub flash: Option<String>,
}

impl IndexTemplate {
    fn new(state: &AppState, shop: &ShopSession<'_>, flash: Option<String>) -> Self {
        let selected = shop.store().map(|store| store.id);

        Self {
            home_url: state.config().home_url.clone(),
            state: shop.query(),
            stores: state
                .catalog()
                .stores()
                .iter()
                .map(|store| StoreOption {
                    id: store.id,
                    label: store.label(),
                    selected: Some(store.id) == selected,
                })
                .collect(),
            search: shop.view().search.clone(),
            products: shop.listings().iter().map(ProductCard::from).collect(),
            cart_count: shop.cart().len(),
            purchase: PurchaseView::from_session(shop),
            cart: shop
                .view()
                .is_cart_open()
                .then(|| CartView::from_session(shop)),
            flash,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the listing for the state in the query string.
///
/// A query string that is not in canonical form (unknown ids, invalid
/// sizes, parameter noise) is answered with a redirect to its canonical URL.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let query = query.unwrap_or_default();
    let cart = load_cart(&session).await?;
    let shop = ShopSession::from_query(state.catalog(), &query, cart);

    let mut sync = UrlSync::new(INDEX_PATH, &query);
    if let Some(canonical) = sync.sync(shop.view(), state.catalog()) {
        tracing::debug!(%canonical, "redirecting to canonical URL");
        return Ok(Redirect::to(canonical).into_response());
    }

    let flash = session.remove::<String>(keys::FLASH).await?;
    Ok(IndexTemplate::new(&state, &shop, flash).into_response())
}

/// Store selector form data.
#[derive(Debug, Deserialize)]
pub struct StoreForm {
    #[serde(default)]
    pub state: String,
    pub store_id: String,
}

/// Select a store. Unknown ids keep the current store.
#[instrument(skip(state, session))]
pub async fn select_store(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StoreForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        if let Ok(store) = form.store_id.parse::<StoreId>() {
            shop.select_store(store);
        }
    })
    .await
}

/// Search form data.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub search: String,
}

/// Set the search text.
#[instrument(skip(state, session))]
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        shop.set_search(form.search);
    })
    .await
}

/// Purchase modal open form data.
#[derive(Debug, Deserialize)]
pub struct OpenPurchaseForm {
    #[serde(default)]
    pub state: String,
    pub product: String,
}

/// Open the purchase modal. Unknown products leave the state unchanged.
#[instrument(skip(state, session))]
pub async fn open_purchase(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<OpenPurchaseForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        if let Ok(product) = form.product.parse::<ProductId>() {
            shop.open_purchase(product);
        }
    })
    .await
}

#[instrument(skip(state, session))]
pub async fn close_purchase(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StateForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| shop.close_purchase()).await
}

/// Purchase modal options form data.
#[derive(Debug, Deserialize)]
pub struct PurchaseOptionsForm {
    #[serde(default)]
    pub state: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub qty: Option<String>,
}

/// Change the modal size, color and quantity.
#[instrument(skip(state, session))]
pub async fn purchase_options(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PurchaseOptionsForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        shop.set_purchase_options(
            form.size.as_deref(),
            form.color.as_deref(),
            form.qty.as_deref(),
        );
    })
    .await
}
