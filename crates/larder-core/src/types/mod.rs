//! Data model for recipes, meal plans and shopping lists.

mod plan;
mod recipe;
mod shopping_list;

pub use plan::{DayPlan, MealKind, MealSlot, WeeklyPlan};
pub use recipe::{DEFAULT_LANGUAGE, LocalizedText, Recipe, RecipeIngredient};
pub use shopping_list::{ShoppingList, ShoppingListItem};
