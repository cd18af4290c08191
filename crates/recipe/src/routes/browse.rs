//! Browser page handler and view models.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;
use webenv_core::RecipeId;

use super::INDEX_PATH;
use crate::browser::{BrowseState, RecipeBrowser};
use crate::content::{ARTICLES, Article, CATEGORIES};
use crate::error::Result;
use crate::filter::{DIETS, DIFFICULTIES, EQUIPMENT, INGREDIENTS};
use crate::recipe::Recipe;
use crate::state::AppState;

// =============================================================================
// View Models
// =============================================================================

/// Entry of a filter select or checkbox group.
#[derive(Clone)]
pub struct FilterOption {
    pub value: &'static str,
    pub selected: bool,
}

fn options(values: &[&'static str], selected: impl Fn(&str) -> bool) -> Vec<FilterOption> {
    values
        .iter()
        .map(|&value| FilterOption {
            value,
            selected: selected(value),
        })
        .collect()
}

/// Recipe entry in the results list or the popular carousel.
#[derive(Clone)]
pub struct RecipeCard {
    pub id: RecipeId,
    pub name: String,
    pub image: String,
    pub diet_type: String,
    pub difficulty: String,
    /// Link selecting this recipe.
    pub url: String,
    pub selected: bool,
}

impl RecipeCard {
    fn new(recipe: &Recipe, state: &BrowseState) -> Self {
        let mut target = state.clone();
        target.select_recipe(recipe.id);

        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image_url(),
            diet_type: recipe.diet_type.clone(),
            difficulty: recipe.difficulty.clone(),
            url: target.to_url(INDEX_PATH),
            selected: state.recipe == Some(recipe.id),
        }
    }
}

/// Category tile on the landing content.
#[derive(Clone)]
pub struct CategoryView {
    pub name: &'static str,
    pub image: String,
}

/// Selected recipe with its current step.
#[derive(Clone)]
pub struct DetailView {
    pub name: String,
    pub image: String,
    pub diet_type: String,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub equipment: Vec<String>,
    pub step_label: Option<String>,
    pub step_text: Option<String>,
    /// Absent on the first step.
    pub previous_url: Option<String>,
    /// Absent on the last step.
    pub next_url: Option<String>,
}

impl DetailView {
    fn from_browser(browser: &RecipeBrowser) -> Option<Self> {
        let recipe = browser.selected_recipe()?;
        let cursor = browser.step_cursor()?;
        let state = browser.state();

        let step_url = |step: usize| {
            let mut target = state.clone();
            target.step = step;
            target.to_url(INDEX_PATH)
        };

        Some(Self {
            name: recipe.name.clone(),
            image: recipe.image_url(),
            diet_type: recipe.diet_type.clone(),
            difficulty: recipe.difficulty.clone(),
            ingredients: recipe.ingredients.clone(),
            equipment: recipe.equipment.clone(),
            step_label: (!cursor.is_empty()).then(|| cursor.label()),
            step_text: browser.current_step().map(ToString::to_string),
            previous_url: (!cursor.is_first()).then(|| step_url(cursor.previous().index())),
            next_url: (!cursor.is_last()).then(|| step_url(cursor.next().index())),
        })
    }
}

/// Browser page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub home_url: String,
    pub loading: bool,
    pub search: String,
    pub debounce_ms: u128,
    pub diets: Vec<FilterOption>,
    pub difficulties: Vec<FilterOption>,
    pub ingredients: Vec<FilterOption>,
    pub equipment: Vec<FilterOption>,
    /// Selected recipe and step, carried through filter submissions.
    pub recipe: Option<RecipeId>,
    pub step: usize,
    pub show_homepage: bool,
    pub popular: Vec<RecipeCard>,
    pub categories: Vec<CategoryView>,
    pub articles: &'static [Article],
    pub results: Vec<RecipeCard>,
    pub detail: Option<DetailView>,
}

impl IndexTemplate {
    fn new(state: &AppState, browser: &RecipeBrowser) -> Self {
        let view = browser.state();
        let show_homepage = browser.show_homepage();

        let (popular, categories) = if show_homepage {
            (
                browser
                    .recipes()
                    .iter()
                    .map(|recipe| RecipeCard::new(recipe, &view))
                    .collect(),
                CATEGORIES
                    .iter()
                    .map(|category| CategoryView {
                        name: category.name,
                        image: category.image_url(),
                    })
                    .collect(),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        Self {
            home_url: state.config().home_url.clone(),
            loading: browser.is_loading(),
            search: browser.input().to_string(),
            debounce_ms: state.config().debounce_ms(),
            diets: options(DIETS, |value| view.diet.as_deref() == Some(value)),
            difficulties: options(DIFFICULTIES, |value| {
                view.difficulty.as_deref() == Some(value)
            }),
            ingredients: options(INGREDIENTS, |value| {
                view.ingredients.iter().any(|item| item == value)
            }),
            equipment: options(EQUIPMENT, |value| {
                view.equipment.iter().any(|item| item == value)
            }),
            recipe: view.recipe,
            step: view.step,
            show_homepage,
            popular,
            categories,
            articles: ARTICLES,
            results: browser
                .results()
                .into_iter()
                .map(|recipe| RecipeCard::new(recipe, &view))
                .collect(),
            detail: DetailView::from_browser(browser),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the browser for the state in the query string.
///
/// Once the catalog has loaded, a non-canonical query string (unknown
/// recipe, out-of-range step, empty form fields) is redirected to its
/// canonical URL. While loading, the query is kept as is.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, RawQuery(query): RawQuery) -> Result<Response> {
    let query = query.unwrap_or_default();
    let snapshot = state.catalog().snapshot()?;
    let browser = RecipeBrowser::new(
        BrowseState::from_query(&query),
        snapshot,
        state.config().search_debounce,
    );

    if !browser.is_loading() {
        let canonical = browser.state().to_query();
        if canonical != query {
            let url = browser.state().to_url(INDEX_PATH);
            tracing::debug!(%url, "redirecting to canonical URL");
            return Ok(Redirect::to(&url).into_response());
        }
    }

    Ok(IndexTemplate::new(&state, &browser).into_response())
}
