//! Integration tests for the recipe server.

use std::path::PathBuf;

use axum::http::StatusCode;
use webenv_integration_tests::TestClient;
use webenv_recipe::catalog::RecipeCatalog;
use webenv_recipe::config::RecipeConfig;
use webenv_recipe::recipe::Recipe;
use webenv_recipe::state::AppState;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../recipe/static")
}

fn config() -> RecipeConfig {
    RecipeConfig {
        static_dir: static_dir(),
        ..RecipeConfig::default()
    }
}

fn sample_recipes() -> Vec<Recipe> {
    let json = std::fs::read_to_string(static_dir().join("recipes.json"))
        .expect("Failed to read sample recipes");
    serde_json::from_str(&json).expect("Sample recipes must parse")
}

fn client_with(catalog: RecipeCatalog) -> TestClient {
    TestClient::new(webenv_recipe::app(AppState::new(config(), catalog)))
}

fn client() -> TestClient {
    client_with(RecipeCatalog::ready(sample_recipes()))
}

// ============================================================================
// Landing Content
// ============================================================================

#[tokio::test]
async fn test_homepage_without_filters() {
    let mut client = client();
    let page = client.get("/").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Discover and cook your next favorite meal"));
    assert!(page.body.contains("Popular Recipes"));
    assert!(page.body.contains("Breakfast"));
    assert!(page.body.contains("Meal Prep 101"));
    assert!(page.body.contains("Simple Apple and Potato Mash"));
    assert!(!page.body.contains("Select a recipe to see details."));
}

#[tokio::test]
async fn test_loading_page_keeps_query() {
    let mut client = client_with(RecipeCatalog::new());
    let page = client.get("/?recipe=42&step=3").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Loading recipes..."));
    assert!(!page.body.contains("Popular Recipes"));
}

#[tokio::test]
async fn test_empty_catalog_shows_no_results() {
    let mut client = client_with(RecipeCatalog::ready(Vec::new()));
    let page = client.get("/").await;

    assert!(page.body.contains("No recipes found matching your criteria."));
    assert!(!page.body.contains("Popular Recipes"));
}

#[tokio::test]
async fn test_background_load_from_static_dir() {
    let state = AppState::new(config(), RecipeCatalog::new());
    state
        .start_loading()
        .await
        .expect("Loader task panicked");

    let mut client = TestClient::new(webenv_recipe::app(state));
    let page = client.get("/").await;
    assert!(page.body.contains("Veggie Medley Plate"));
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_search_shows_results_and_prompt() {
    let mut client = client();
    let page = client.get("/?q=veggie").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(!page.body.contains("Popular Recipes"));
    assert!(page.body.contains("Veggie Medley Plate"));
    assert!(!page.body.contains("Apple and Egg Breakfast Bowl"));
    assert!(page.body.contains("Select a recipe to see details."));
}

#[tokio::test]
async fn test_no_match() {
    let mut client = client();
    let page = client.get("/?q=lasagna").await;
    assert!(page.body.contains("No recipes found matching your criteria."));
}

#[tokio::test]
async fn test_facets_compose() {
    let mut client = client();
    let page = client
        .get("/?difficulty=simple&ingredients=Apple%2CTomato")
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Sautéed Apple and Tomato Salad"));
    assert!(!page.body.contains("Apple and Egg Breakfast Bowl"));
}

#[tokio::test]
async fn test_form_submission_is_canonicalized() {
    let mut client = client();

    let resp = client.get("/?q=&diet=&difficulty=").await;
    assert!(resp.status.is_redirection());
    assert_eq!(resp.location.as_deref(), Some("/"));

    let resp = client
        .get("/?q=apple&ingredients=Egg&ingredients=Bread&equipment=wok")
        .await;
    assert_eq!(
        resp.location.as_deref(),
        Some("/?q=apple&ingredients=Egg%2CBread")
    );
    let page = client.follow(&resp).await;
    assert!(page.body.contains("Apple and Egg Breakfast Bowl"));
}

// ============================================================================
// Recipe Detail
// ============================================================================

#[tokio::test]
async fn test_step_navigation() {
    let mut client = client();
    let page = client.get("/?q=veggie&recipe=2").await;

    assert!(page.body.contains("Step 1 of 3"));
    assert!(page.body.contains("Microwave the potato for five minutes until soft."));
    assert!(page.body.contains(r#"<span class="disabled">Previous</span>"#));
    assert!(page.body.contains("href=\"/?q=veggie&amp;recipe=2&amp;step=1\""));

    let last = client.get("/?q=veggie&recipe=2&step=2").await;
    assert!(last.body.contains("Step 3 of 3"));
    assert!(last.body.contains(r#"<span class="disabled">Next</span>"#));
}

#[tokio::test]
async fn test_out_of_range_step_is_clamped() {
    let mut client = client();
    let resp = client.get("/?recipe=2&step=9").await;
    assert_eq!(resp.location.as_deref(), Some("/?recipe=2&step=2"));

    let resp = client.get("/?recipe=99&step=1").await;
    assert_eq!(resp.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn test_selected_recipe_shown_beside_homepage_filters() {
    let mut client = client();
    let page = client.get("/?diet=vegetarian&recipe=4").await;

    assert!(page.body.contains("Step 1 of 3"));
    assert!(page.body.contains("Slice the apple and the tomato."));
}

// ============================================================================
// Static Files
// ============================================================================

#[tokio::test]
async fn test_recipe_data_is_served() {
    let mut client = client();
    let resp = client.get("/recipes.json").await;

    assert_eq!(resp.status, StatusCode::OK);
    let recipes: Vec<Recipe> = serde_json::from_str(&resp.body).expect("Invalid recipes.json");
    assert_eq!(recipes.len(), 4);
}

#[tokio::test]
async fn test_missing_static_file() {
    let mut client = client();
    let resp = client.get("/imgs/nope/missing.jpg").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
