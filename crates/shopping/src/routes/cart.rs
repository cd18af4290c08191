//! Cart route handlers.
//!
//! The cart is kept in the session; the cart modal's visibility is part of
//! the view state like every other modal.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{StateForm, apply};
use crate::error::Result;
use crate::middleware::session::keys;
use crate::state::AppState;

/// Notice shown on the page rendered after a checkout.
pub const CHECKOUT_NOTICE: &str = "Checkout successful!";

/// Add to cart form data.
///
/// Shares the purchase modal's form, so the current size, color and
/// quantity inputs are applied before the line is added.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    #[serde(default)]
    pub state: String,
    pub size: Option<String>,
    pub qty: Option<String>,
    pub color: Option<String>,
}

/// Add the purchase modal selection to the cart and close the modal.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        shop.set_purchase_options(
            form.size.as_deref(),
            form.color.as_deref(),
            form.qty.as_deref(),
        );
        shop.add_to_cart();
    })
    .await
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    #[serde(default)]
    pub state: String,
    pub index: usize,
}

/// Remove a cart line. Out-of-range indices are ignored.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| {
        shop.remove_cart_item(form.index);
    })
    .await
}

#[instrument(skip(state, session))]
pub async fn open(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StateForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| shop.open_cart()).await
}

#[instrument(skip(state, session))]
pub async fn close(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StateForm>,
) -> Result<Redirect> {
    apply(&state, &session, &form.state, |shop| shop.close_cart()).await
}

/// Empty the cart and close the cart modal.
///
/// A one-shot notice is left only when something was checked out.
#[instrument(skip(state, session))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<StateForm>,
) -> Result<Redirect> {
    let mut lines = 0;
    let redirect = apply(&state, &session, &form.state, |shop| {
        lines = shop.checkout().lines;
    })
    .await?;

    if lines > 0 {
        session.insert(keys::FLASH, CHECKOUT_NOTICE).await?;
    }
    Ok(redirect)
}
