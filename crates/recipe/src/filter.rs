//! Recipe filters.
//!
//! Filters are applied in sequence and all comparisons are case-insensitive.

use crate::recipe::Recipe;

/// Diet types offered by the filter panel.
pub const DIETS: &[&str] = &["vegetarian", "non-vegetarian"];

/// Difficulty levels offered by the filter panel.
pub const DIFFICULTIES: &[&str] = &["novice", "simple", "intermediate", "hard"];

/// Ingredients offered by the filter panel.
pub const INGREDIENTS: &[&str] = &["Bread", "Egg", "Apple", "Lettuce", "Potato", "Tomato"];

/// Equipment offered by the filter panel.
pub const EQUIPMENT: &[&str] = &[
    "Bowl",
    "Pan",
    "Knife",
    "Toaster",
    "StoveBurner",
    "Microwave",
    "Plate",
];

/// Active recipe filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    /// Committed search text.
    pub search: String,
    pub diet: Option<String>,
    pub difficulty: Option<String>,
    /// Every selected ingredient must be used by the recipe.
    pub ingredients: Vec<String>,
    /// Every selected piece of equipment must be used by the recipe.
    pub equipment: Vec<String>,
}

impl RecipeFilters {
    /// No filter restricts the list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.diet.is_none()
            && self.difficulty.is_none()
            && self.ingredients.is_empty()
            && self.equipment.is_empty()
    }

    /// Check if a recipe passes every active filter.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() && !recipe.name.to_lowercase().contains(&search) {
            return false;
        }

        if let Some(diet) = &self.diet
            && !recipe.diet_type.eq_ignore_ascii_case(diet)
        {
            return false;
        }

        if let Some(difficulty) = &self.difficulty
            && !recipe.difficulty.eq_ignore_ascii_case(difficulty)
        {
            return false;
        }

        contains_all(&recipe.ingredients, &self.ingredients)
            && contains_all(&recipe.equipment, &self.equipment)
    }

    /// Recipes passing every active filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|recipe| self.matches(recipe)).collect()
    }
}

fn contains_all(available: &[String], selected: &[String]) -> bool {
    selected.iter().all(|wanted| {
        available
            .iter()
            .any(|item| item.eq_ignore_ascii_case(wanted))
    })
}

/// Whether the landing content replaces the results list.
///
/// Only when nothing is typed or filtered and the catalog has loaded with
/// at least one recipe.
#[must_use]
pub fn show_homepage(input: &str, filters: &RecipeFilters, loading: bool, count: usize) -> bool {
    input.trim().is_empty() && filters.is_empty() && !loading && count > 0
}
