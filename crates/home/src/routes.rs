//! Landing page and wiki frame.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, extract::State, routing::get};
use tracing::instrument;

use crate::config::HomeConfig;

/// Path of the wiki frame page.
pub const WIKI_PATH: &str = "/wiki";

/// Destination tile on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub alt: &'static str,
    pub image: &'static str,
    pub href: String,
}

/// Tiles in display order: recipe, shopping, map, wiki.
#[must_use]
pub fn tiles(config: &HomeConfig) -> Vec<Tile> {
    vec![
        Tile {
            title: "Recipe",
            alt: "Recipe Website",
            image: "https://images.unsplash.com/photo-1542010589005-d1eacc3918f2?q=80&w=2984&auto=format&fit=crop",
            href: config.recipe_url.clone(),
        },
        Tile {
            title: "Shopping",
            alt: "Shopping Website",
            image: "https://images.unsplash.com/photo-1472851294608-062f824d29cc?q=80&w=2304&auto=format&fit=crop",
            href: config.shopping_url.clone(),
        },
        Tile {
            title: "Open Street Map",
            alt: "Street Map",
            image: "https://plus.unsplash.com/premium_photo-1682310071124-33632135b2ee?q=80&w=1512&auto=format&fit=crop",
            href: config.map_url.clone(),
        },
        Tile {
            title: "Wikipedia",
            alt: "Wikipedia",
            image: "https://images.unsplash.com/photo-1657256031790-e898b7b3f3eb?q=80&w=1548&auto=format&fit=crop",
            href: WIKI_PATH.to_string(),
        },
    ]
}

#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub tiles: Vec<Tile>,
}

#[derive(Template, WebTemplate)]
#[template(path = "wiki.html")]
pub struct WikiTemplate {
    pub wiki_url: String,
}

#[instrument(skip(config))]
pub async fn index(State(config): State<Arc<HomeConfig>>) -> IndexTemplate {
    IndexTemplate {
        tiles: tiles(&config),
    }
}

#[instrument(skip(config))]
pub async fn wiki(State(config): State<Arc<HomeConfig>>) -> WikiTemplate {
    WikiTemplate {
        wiki_url: config.wiki_url.clone(),
    }
}

/// Create all routes for the landing page.
pub fn routes() -> Router<Arc<HomeConfig>> {
    Router::new()
        .route("/", get(index))
        .route(WIKI_PATH, get(wiki))
}
