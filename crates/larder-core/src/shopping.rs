//! Shopping list generation from a weekly meal plan.
//!
//! For each populated meal slot the generator resolves the recipe, scales
//! every required ingredient by `requested servings / recipe servings`,
//! consolidates the scaled lines and tags each entry with its grocery
//! category.
//!
//! Bad data never aborts generation. A slot pointing at an unknown recipe,
//! or at a recipe with zero base servings, is logged and skipped; the rest
//! of the plan still produces a list. Ingredient lines whose quantity is
//! zero, negative or not finite are dropped the same way.
//!
//! ```rust
//! use chrono::Weekday;
//! use larder_core::{
//!     DayPlan, MealSlot, Recipe, RecipeBook, RecipeIngredient, WeeklyPlan,
//!     generate_from_plan,
//! };
//!
//! let book = RecipeBook::from_recipes([Recipe::new("r1", "Omelette", 2)
//!     .with_ingredient(RecipeIngredient::new("eggs", 2.0, "piece"))]);
//! let plan = WeeklyPlan::new()
//!     .with_day(DayPlan::new(Weekday::Mon).with_breakfast(MealSlot::new("r1", 4)));
//!
//! let items = generate_from_plan(&plan, &book);
//! assert_eq!(items[0].quantity, 4.0);
//! ```

use crate::category::CategoryClassifier;
use crate::consolidate::{IngredientLine, consolidate};
use crate::error::{Error, Result};
use crate::recipes::RecipeSource;
use crate::types::{DEFAULT_LANGUAGE, MealSlot, Recipe, ShoppingListItem, WeeklyPlan};

/// Resolves a slot to its recipe and scale factor.
///
/// Fails with [`Error::RecipeNotFound`] for dangling references and
/// [`Error::InvalidServings`] when the recipe's base servings are zero.
pub fn resolve_slot<'r, R>(slot: &MealSlot, recipes: &'r R) -> Result<(&'r Recipe, f64)>
where
    R: RecipeSource + ?Sized,
{
    let recipe = recipes
        .recipe(&slot.recipe_id)
        .ok_or_else(|| Error::recipe_not_found(&slot.recipe_id))?;

    if recipe.servings == 0 {
        return Err(Error::InvalidServings {
            recipe_id: recipe.id.clone(),
            servings: recipe.servings,
        });
    }

    let scale = f64::from(slot.servings) / f64::from(recipe.servings);
    Ok((recipe, scale))
}

/// Builds shopping lists from meal plans.
#[derive(Debug, Clone)]
pub struct ShoppingListGenerator {
    language: String,
    classifier: &'static CategoryClassifier,
}

impl Default for ShoppingListGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingListGenerator {
    /// Creates a generator using English recipe names and the standard classifier.
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            classifier: CategoryClassifier::standard(),
        }
    }

    /// Uses recipe names in `language` for the "used in" labels.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Uses a custom category classifier.
    pub fn with_classifier(mut self, classifier: &'static CategoryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Collects the scaled, required ingredient lines of every resolvable slot.
    ///
    /// Units are left exactly as the recipe wrote them.
    pub fn scaled_lines<R>(&self, plan: &WeeklyPlan, recipes: &R) -> Vec<IngredientLine>
    where
        R: RecipeSource + ?Sized,
    {
        let mut lines = Vec::new();

        for day in &plan.days {
            for (meal, slot) in day.slots() {
                if slot.servings == 0 {
                    tracing::debug!(day = %day.day, meal = %meal, "Skipping slot with zero servings");
                    continue;
                }

                let (recipe, scale) = match resolve_slot(slot, recipes) {
                    Ok(resolved) => resolved,
                    Err(e) => {
                        tracing::warn!(
                            day = %day.day,
                            meal = %meal,
                            recipe_id = %slot.recipe_id,
                            error = %e,
                            "Skipping meal slot"
                        );
                        continue;
                    }
                };

                tracing::debug!(
                    day = %day.day,
                    meal = %meal,
                    recipe_id = %recipe.id,
                    scale,
                    "Scaling recipe"
                );

                let label = recipe.display_name(&self.language);
                for ingredient in recipe.required_ingredients() {
                    if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
                        tracing::warn!(
                            day = %day.day,
                            meal = %meal,
                            recipe_id = %recipe.id,
                            ingredient_id = %ingredient.ingredient_id,
                            quantity = ingredient.quantity,
                            "Skipping ingredient without a positive quantity"
                        );
                        continue;
                    }
                    lines.push(IngredientLine::new(
                        ingredient.ingredient_id.clone(),
                        ingredient.quantity * scale,
                        ingredient.unit.clone(),
                        label,
                    ));
                }
            }
        }

        lines
    }

    /// Generates categorized shopping list items for `plan`.
    pub fn generate<R>(&self, plan: &WeeklyPlan, recipes: &R) -> Vec<ShoppingListItem>
    where
        R: RecipeSource + ?Sized,
    {
        let lines = self.scaled_lines(plan, recipes);
        let items: Vec<ShoppingListItem> = consolidate(&lines)
            .into_iter()
            .map(|entry| {
                let category = self.classifier.classify(&entry.ingredient_id);
                ShoppingListItem::from_entry(entry, category)
            })
            .collect();

        tracing::info!(
            slots = plan.slot_count(),
            lines = lines.len(),
            items = items.len(),
            "Generated shopping list"
        );

        items
    }
}

/// Generates a shopping list with default settings.
pub fn generate_from_plan<R>(plan: &WeeklyPlan, recipes: &R) -> Vec<ShoppingListItem>
where
    R: RecipeSource + ?Sized,
{
    ShoppingListGenerator::new().generate(plan, recipes)
}
