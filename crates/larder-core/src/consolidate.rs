//! Ingredient consolidation.
//!
//! Merges ingredient lines that refer to the same ingredient once their
//! quantities are expressed in a common base unit (see
//! [`to_base_unit`](crate::units::to_base_unit)). Lines for the same
//! ingredient whose units land in different families stay separate: two
//! cloves of garlic and a tablespoon of minced garlic are two entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::fraction::round2;
use crate::units::to_base_unit;

/// One ingredient contribution waiting to be consolidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Grouping key.
    pub ingredient_id: String,
    /// Amount, in `unit`.
    pub quantity: f64,
    /// Unit as written in the recipe.
    pub unit: String,
    /// Where the line came from, usually a recipe name.
    pub source_label: String,
}

impl IngredientLine {
    /// Creates a new line.
    pub fn new(
        ingredient_id: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
            unit: unit.into(),
            source_label: source_label.into(),
        }
    }
}

/// Total amount of one ingredient in one base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedEntry {
    /// Ingredient identifier.
    pub ingredient_id: String,
    /// Summed quantity in `unit`, rounded to two decimals.
    pub quantity: f64,
    /// Base unit of the group.
    pub unit: String,
    /// Distinct source labels, in first-seen order.
    pub used_in: Vec<String>,
}

/// Sums lines sharing an ingredient id and base unit.
///
/// Entries come back in the order their group was first seen. Callers
/// needing a particular order should sort.
///
/// # Example
///
/// ```rust
/// use larder_core::consolidate::{consolidate, IngredientLine};
///
/// let entries = consolidate(&[
///     IngredientLine::new("olive oil", 1.0, "tbsp", "Salad"),
///     IngredientLine::new("olive oil", 3.0, "tsp", "Soup"),
/// ]);
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].quantity, 2.0);
/// assert_eq!(entries[0].unit, "tbsp");
/// assert_eq!(entries[0].used_in, vec!["Salad", "Soup"]);
/// ```
pub fn consolidate(lines: &[IngredientLine]) -> Vec<ConsolidatedEntry> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut groups: Vec<ConsolidatedEntry> = Vec::new();

    for line in lines {
        let (quantity, base_unit) = to_base_unit(line.quantity, &line.unit);
        let key = (line.ingredient_id.clone(), base_unit);

        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push(ConsolidatedEntry {
                    ingredient_id: line.ingredient_id.clone(),
                    quantity: 0.0,
                    unit: key.1.clone(),
                    used_in: Vec::new(),
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };

        let entry = &mut groups[slot];
        entry.quantity += quantity;
        if !entry.used_in.contains(&line.source_label) {
            entry.used_in.push(line.source_label.clone());
        }
    }

    for entry in &mut groups {
        entry.quantity = round2(entry.quantity);
    }

    tracing::debug!(
        lines = lines.len(),
        entries = groups.len(),
        "Consolidated ingredient lines"
    );

    groups
}
