//! Static landing content: recipe categories and featured articles.

use crate::recipe::image_path;

/// Recipe category tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Recipe whose image illustrates the tile.
    pub recipe: &'static str,
    pub image: &'static str,
}

impl Category {
    #[must_use]
    pub fn image_url(&self) -> String {
        image_path(self.recipe, self.image)
    }
}

/// Featured article card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Breakfast",
        recipe: "Apple and Egg Breakfast Bowl",
        image: "Apple_Egg_Cheese_Bake1Logo-1.jpg",
    },
    Category {
        name: "Lunch",
        recipe: "Veggie Medley Plate",
        image: "0B88C201-D67F-4FC4-9F3F-978F52FB2FE2.jpg",
    },
    Category {
        name: "Dinner",
        recipe: "Simple Apple and Potato Mash",
        image: "96d793ce15728203d9521a6f763c0edc.jpg",
    },
    Category {
        name: "Desserts",
        recipe: "Sautéed Apple and Tomato Salad",
        image: "5456742.jpg",
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        title: "5 Quick Breakfast Ideas",
        summary: "Start your day right with these quick and healthy breakfast recipes.",
    },
    Article {
        title: "Meal Prep 101",
        summary: "Learn the basics of meal prepping to save time during your busy week.",
    },
    Article {
        title: "Decadent Desserts",
        summary: "Indulge in our favorite dessert recipes for a sweet ending to any meal.",
    },
];
