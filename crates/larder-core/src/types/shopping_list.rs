//! Shopping list items and the list container.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::category::Category;
use crate::config::ShoppingConfig;
use crate::consolidate::ConsolidatedEntry;
use crate::recipes::RecipeSource;
use crate::shopping::ShoppingListGenerator;
use crate::types::WeeklyPlan;

/// A consolidated ingredient on the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Ingredient identifier.
    pub ingredient_id: String,
    /// Total quantity in `unit`.
    pub quantity: f64,
    /// Base unit.
    pub unit: String,
    /// Recipes that need this ingredient.
    pub used_in: Vec<String>,
    /// Grocery aisle.
    pub category: Category,
    /// Ticked off by the shopper.
    #[serde(default)]
    pub checked: bool,
    /// Free-text note from the shopper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShoppingListItem {
    /// Wraps a consolidated entry as an unchecked item.
    pub fn from_entry(entry: ConsolidatedEntry, category: Category) -> Self {
        Self {
            ingredient_id: entry.ingredient_id,
            quantity: entry.quantity,
            unit: entry.unit,
            used_in: entry.used_in,
            category,
            checked: false,
            note: None,
        }
    }

    /// Returns `true` if this item is the `(ingredient_id, unit)` entry.
    pub fn matches(&self, ingredient_id: &str, unit: &str) -> bool {
        self.ingredient_id == ingredient_id && self.unit == unit
    }
}

/// A generated shopping list plus the shopper's progress on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Items, in generation order.
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    /// Wraps existing items.
    pub fn new(items: Vec<ShoppingListItem>) -> Self {
        Self { items }
    }

    /// Generates a list for `plan` and drops items already on hand.
    pub fn generate<R>(plan: &WeeklyPlan, recipes: &R, config: &ShoppingConfig) -> Self
    where
        R: RecipeSource + ?Sized,
    {
        let generator = ShoppingListGenerator::new().with_language(config.language.clone());
        let mut list = Self::new(generator.generate(plan, recipes));
        list.remove_on_hand(&config.on_hand);
        list
    }

    /// Flips the checked state of an item. Returns `false` if no item matched.
    pub fn toggle(&mut self, ingredient_id: &str, unit: &str) -> bool {
        match self.find_mut(ingredient_id, unit) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Sets or clears the note on an item. Returns `false` if no item matched.
    pub fn set_note(&mut self, ingredient_id: &str, unit: &str, note: Option<String>) -> bool {
        match self.find_mut(ingredient_id, unit) {
            Some(item) => {
                item.note = note.filter(|n| !n.trim().is_empty());
                true
            }
            None => false,
        }
    }

    /// Copies checked state and notes from a previous list onto matching items.
    ///
    /// Items are matched on `(ingredient_id, unit)`, so re-planning keeps
    /// the shopper's progress on everything still needed.
    pub fn carry_over_from(&mut self, previous: &ShoppingList) {
        let state: HashMap<(&str, &str), &ShoppingListItem> = previous
            .items
            .iter()
            .map(|item| ((item.ingredient_id.as_str(), item.unit.as_str()), item))
            .collect();

        for item in &mut self.items {
            if let Some(old) = state.get(&(item.ingredient_id.as_str(), item.unit.as_str())) {
                item.checked = old.checked;
                item.note = old.note.clone();
            }
        }
    }

    /// Drops items whose ingredient id is in `on_hand` (case-insensitive).
    pub fn remove_on_hand(&mut self, on_hand: &[String]) {
        if on_hand.is_empty() {
            return;
        }
        let pantry: HashSet<String> = on_hand.iter().map(|id| id.to_lowercase()).collect();
        let before = self.items.len();
        self.items
            .retain(|item| !pantry.contains(&item.ingredient_id.to_lowercase()));
        tracing::debug!(removed = before - self.items.len(), "Removed on-hand items");
    }

    /// Number of checked items.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, ingredient_id: &str, unit: &str) -> Option<&mut ShoppingListItem> {
        self.items
            .iter_mut()
            .find(|item| item.matches(ingredient_id, unit))
    }
}
