//! Recipe lookup.
//!
//! The shopping list generator resolves meal slots through the
//! [`RecipeSource`] trait, so callers can hand it whatever collection they
//! already hold: a [`RecipeBook`], a `HashMap` keyed by id, or a plain
//! slice of recipes.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::Recipe;

/// Resolves recipe ids to recipes.
pub trait RecipeSource {
    /// Returns the recipe with `id`, if known.
    fn recipe(&self, id: &str) -> Option<&Recipe>;
}

impl RecipeSource for HashMap<String, Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}

impl RecipeSource for [Recipe] {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.iter().find(|recipe| recipe.id == id)
    }
}

impl RecipeSource for Vec<Recipe> {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.as_slice().recipe(id)
    }
}

impl<T: RecipeSource + ?Sized> RecipeSource for &T {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        (**self).recipe(id)
    }
}

/// In-memory recipe collection indexed by id.
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Recipe>,
}

impl RecipeBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from recipes. Later duplicates replace earlier ones.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut book = Self::new();
        for recipe in recipes {
            book.insert(recipe);
        }
        book
    }

    /// Parses a JSON array of recipes.
    pub fn from_json(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Ok(Self::from_recipes(recipes))
    }

    /// Adds or replaces a recipe, returning the previous one with that id.
    pub fn insert(&mut self, recipe: Recipe) -> Option<Recipe> {
        if self.recipes.contains_key(&recipe.id) {
            tracing::debug!(recipe_id = %recipe.id, "Replacing duplicate recipe");
        }
        self.recipes.insert(recipe.id.clone(), recipe)
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if the book holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeSource for RecipeBook {
    fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.get(id)
    }
}
