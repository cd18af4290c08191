//! Recipe records and their image paths.

use serde::Deserialize;
use webenv_core::RecipeId;

/// Image used when a recipe has no name or no image file.
pub const PLACEHOLDER_IMAGE: &str = "/imgs/placeholder.jpg";

/// One recipe as stored in `recipes.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// File name inside the recipe's image directory.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub diet_type: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Instruction steps, in order.
    #[serde(default, rename = "recipe")]
    pub steps: Vec<String>,
}

impl Recipe {
    /// URL of the recipe image, `/imgs/{name}/{image}`.
    #[must_use]
    pub fn image_url(&self) -> String {
        image_path(&self.name, &self.image)
    }
}

/// `/imgs/{dir}/{file}` with both segments percent-encoded, or the
/// placeholder when either is empty.
#[must_use]
pub fn image_path(dir: &str, file: &str) -> String {
    if dir.is_empty() || file.is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }
    format!(
        "/imgs/{}/{}",
        urlencoding::encode(dir),
        urlencoding::encode(file)
    )
}
