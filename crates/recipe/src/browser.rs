//! Recipe browser state.
//!
//! [`BrowseState`] is the URL-serializable part of the page: committed
//! search, filters, selected recipe and step. [`RecipeBrowser`] owns one
//! of those together with the loaded catalog and the raw search input,
//! whose commits go through a [`Debouncer`].
//!
//! # Query Parameters
//!
//! | param | meaning |
//! |---|---|
//! | `q` | committed search text |
//! | `diet` | diet type |
//! | `difficulty` | difficulty level |
//! | `ingredients` | comma list (or repeated) of required ingredients |
//! | `equipment` | comma list (or repeated) of required equipment |
//! | `recipe` | selected recipe id |
//! | `step` | zero-based instruction step |
//!
//! Unknown or malformed values are dropped. For single-valued parameters
//! the first occurrence wins.

use std::collections::HashSet;
use std::time::Duration;

use url::form_urlencoded;
use webenv_core::RecipeId;

use crate::catalog::Snapshot;
use crate::debounce::Debouncer;
use crate::filter::{self, DIETS, DIFFICULTIES, EQUIPMENT, INGREDIENTS, RecipeFilters};
use crate::recipe::Recipe;
use crate::steps::StepCursor;

/// URL-serializable browser state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub search: String,
    pub diet: Option<String>,
    pub difficulty: Option<String>,
    pub ingredients: Vec<String>,
    pub equipment: Vec<String>,
    pub recipe: Option<RecipeId>,
    pub step: usize,
}

impl BrowseState {
    /// Parse a query string. Never fails; bad values are ignored.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        let mut seen = HashSet::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let repeatable = matches!(key.as_ref(), "ingredients" | "equipment");
            if !repeatable && !seen.insert(key.clone()) {
                continue;
            }
            match key.as_ref() {
                "q" => state.search = value.into_owned(),
                "diet" => state.diet = known_option(DIETS, &value),
                "difficulty" => state.difficulty = known_option(DIFFICULTIES, &value),
                "ingredients" => extend_list(&mut state.ingredients, INGREDIENTS, &value),
                "equipment" => extend_list(&mut state.equipment, EQUIPMENT, &value),
                "recipe" => state.recipe = value.parse().ok(),
                "step" => state.step = value.trim().parse().unwrap_or(0),
                _ => {}
            }
        }

        if state.recipe.is_none() {
            state.step = 0;
        }
        state
    }

    /// Serialize to a query string, omitting defaults.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            query.append_pair("q", &self.search);
        }
        if let Some(diet) = &self.diet {
            query.append_pair("diet", diet);
        }
        if let Some(difficulty) = &self.difficulty {
            query.append_pair("difficulty", difficulty);
        }
        if !self.ingredients.is_empty() {
            query.append_pair("ingredients", &self.ingredients.join(","));
        }
        if !self.equipment.is_empty() {
            query.append_pair("equipment", &self.equipment.join(","));
        }
        if let Some(recipe) = self.recipe {
            query.append_pair("recipe", &recipe.to_string());
            if self.step > 0 {
                query.append_pair("step", &self.step.to_string());
            }
        }

        query.finish()
    }

    /// `path` followed by the query string, if any.
    #[must_use]
    pub fn to_url(&self, path: &str) -> String {
        let query = self.to_query();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }

    /// Active filters.
    #[must_use]
    pub fn filters(&self) -> RecipeFilters {
        RecipeFilters {
            search: self.search.clone(),
            diet: self.diet.clone(),
            difficulty: self.difficulty.clone(),
            ingredients: self.ingredients.clone(),
            equipment: self.equipment.clone(),
        }
    }

    /// Select a recipe. Switching to another recipe starts at its first step.
    pub fn select_recipe(&mut self, id: RecipeId) {
        if self.recipe != Some(id) {
            self.recipe = Some(id);
            self.step = 0;
        }
    }

    /// Add or remove an ingredient filter.
    pub fn toggle_ingredient(&mut self, ingredient: &str) {
        toggle(&mut self.ingredients, INGREDIENTS, ingredient);
    }

    /// Add or remove an equipment filter.
    pub fn toggle_equipment(&mut self, equipment: &str) {
        toggle(&mut self.equipment, EQUIPMENT, equipment);
    }
}

/// Canonical spelling of `value` among `options`.
fn known_option(options: &[&str], value: &str) -> Option<String> {
    let value = value.trim();
    options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(value))
        .map(ToString::to_string)
}

fn extend_list(list: &mut Vec<String>, options: &[&str], value: &str) {
    for item in value.split(',') {
        if let Some(item) = known_option(options, item)
            && !list.contains(&item)
        {
            list.push(item);
        }
    }
}

fn toggle(list: &mut Vec<String>, options: &[&str], value: &str) {
    let Some(value) = known_option(options, value) else {
        return;
    };
    if let Some(position) = list.iter().position(|item| *item == value) {
        list.remove(position);
    } else {
        list.push(value);
    }
}

/// Browser model: state, loaded catalog and debounced search input.
///
/// The server never drives a browser across requests; the rendered page
/// applies the same quiet period in its own script before submitting.
#[derive(Debug)]
pub struct RecipeBrowser {
    state: BrowseState,
    input: String,
    search: Debouncer<String>,
    catalog: Snapshot,
}

impl RecipeBrowser {
    /// Create a browser showing `state`. The raw input starts equal to the
    /// committed search.
    #[must_use]
    pub fn new(state: BrowseState, catalog: Snapshot, debounce: Duration) -> Self {
        let mut browser = Self {
            input: state.search.clone(),
            search: Debouncer::new(state.search.clone(), debounce),
            state,
            catalog,
        };
        browser.clamp_step();
        browser
    }

    /// Current state, with the committed search.
    #[must_use]
    pub fn state(&self) -> BrowseState {
        BrowseState {
            search: self.search.committed(),
            ..self.state.clone()
        }
    }

    /// Text currently in the search box, committed or not.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.catalog.loading
    }

    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.catalog.recipes
    }

    /// A keystroke in the search box. The filter follows once typing pauses.
    pub fn type_search(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.search.push(self.input.clone());
    }

    /// Receiver notified whenever the search query is committed.
    #[must_use]
    pub fn search_commits(&self) -> tokio::sync::watch::Receiver<String> {
        self.search.subscribe()
    }

    pub fn set_diet(&mut self, diet: Option<&str>) {
        self.state.diet = diet.and_then(|diet| known_option(DIETS, diet));
    }

    pub fn set_difficulty(&mut self, difficulty: Option<&str>) {
        self.state.difficulty = difficulty.and_then(|level| known_option(DIFFICULTIES, level));
    }

    pub fn toggle_ingredient(&mut self, ingredient: &str) {
        self.state.toggle_ingredient(ingredient);
    }

    pub fn toggle_equipment(&mut self, equipment: &str) {
        self.state.toggle_equipment(equipment);
    }

    /// Select a recipe by id. Unknown ids are ignored once loading is done.
    pub fn select_recipe(&mut self, id: RecipeId) {
        if self.is_loading() || self.find(id).is_some() {
            self.state.select_recipe(id);
        }
    }

    pub fn next_step(&mut self) {
        if let Some(cursor) = self.step_cursor() {
            self.state.step = cursor.next().index();
        }
    }

    pub fn previous_step(&mut self) {
        if let Some(cursor) = self.step_cursor() {
            self.state.step = cursor.previous().index();
        }
    }

    /// Recipes matching the committed search and filters.
    #[must_use]
    pub fn results(&self) -> Vec<&Recipe> {
        self.state().filters().apply(self.recipes())
    }

    /// Whether the landing content replaces the results list.
    #[must_use]
    pub fn show_homepage(&self) -> bool {
        filter::show_homepage(
            &self.input,
            &self.state().filters(),
            self.is_loading(),
            self.recipes().len(),
        )
    }

    #[must_use]
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.find(self.state.recipe?)
    }

    /// Cursor over the selected recipe's steps.
    #[must_use]
    pub fn step_cursor(&self) -> Option<StepCursor> {
        self.selected_recipe()
            .map(|recipe| StepCursor::at(self.state.step, recipe.steps.len()))
    }

    /// Text of the current step.
    #[must_use]
    pub fn current_step(&self) -> Option<&str> {
        let recipe = self.selected_recipe()?;
        let cursor = self.step_cursor()?;
        recipe.steps.get(cursor.index()).map(String::as_str)
    }

    fn find(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes().iter().find(|recipe| recipe.id == id)
    }

    /// Drop an unknown recipe and clamp the step, once the catalog is known.
    fn clamp_step(&mut self) {
        if self.is_loading() {
            return;
        }
        match self.step_cursor() {
            Some(cursor) => self.state.step = cursor.index(),
            None => {
                self.state.recipe = None;
                self.state.step = 0;
            }
        }
    }
}
