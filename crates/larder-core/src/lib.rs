#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Larder Core Library
//!
//! Turns a weekly meal plan into a consolidated, categorized shopping list.
//!
//! # Pipeline
//!
//! ```text
//! WeeklyPlan ──► ShoppingListGenerator ──► IngredientLine (scaled)
//!                     │                          │
//!               RecipeSource                consolidate
//!                                                │
//!                                  units::to_base_unit + sum
//!                                                │
//!                                        ConsolidatedEntry
//!                                                │
//!                                     CategoryClassifier
//!                                                │
//!                                       ShoppingListItem ──► export
//! ```
//!
//! # Modules
//!
//! - [`units`]: conversion table, base-unit normalization
//! - [`fraction`]: kitchen-friendly rounding and display
//! - [`consolidate`]: merging ingredient lines
//! - [`category`]: grocery aisle classification
//! - [`shopping`]: shopping list generation
//! - [`export`]: text, CSV and WhatsApp renderings
//! - [`config`]: TOML configuration
//!
//! All operations are synchronous and pure over in-memory data.

pub mod category;
pub mod config;
pub mod consolidate;
pub mod error;
pub mod export;
pub mod fraction;
mod proptests;
pub mod recipes;
pub mod shopping;
pub mod types;
pub mod units;

// Re-exports for convenience
pub use category::{Category, CategoryClassifier, classify};
pub use config::ShoppingConfig;
pub use consolidate::{ConsolidatedEntry, IngredientLine, consolidate};
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use fraction::{format_quantity, round_to_useful_fraction};
pub use recipes::{RecipeBook, RecipeSource};
pub use shopping::{ShoppingListGenerator, generate_from_plan};
pub use types::{
    DayPlan, LocalizedText, MealKind, MealSlot, Recipe, RecipeIngredient, ShoppingList,
    ShoppingListItem, WeeklyPlan,
};
pub use units::{ConversionTable, convert, to_base_unit};
