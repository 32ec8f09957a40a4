//! Recipe data as authored in the recipe content files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Language used when a requested translation is missing.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Text that is either a single string or a per-language map.
///
/// Deserializes from either form:
///
/// ```rust
/// use larder_core::LocalizedText;
///
/// let plain: LocalizedText = serde_json::from_str(r#""Pancakes""#).unwrap();
/// assert_eq!(plain.display("fr"), Some("Pancakes"));
///
/// let map: LocalizedText =
///     serde_json::from_str(r#"{"en": "Pancakes", "fr": "Crêpes"}"#).unwrap();
/// assert_eq!(map.display("fr"), Some("Crêpes"));
/// assert_eq!(map.display("de"), Some("Pancakes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Same text in every language.
    Plain(String),
    /// Language code -> text.
    Translations(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Text for `language`, falling back to English, then to any entry.
    pub fn display(&self, language: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Translations(map) => map
                .get(language)
                .or_else(|| map.get(DEFAULT_LANGUAGE))
                .or_else(|| map.values().next())
                .map(String::as_str),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        Self::Translations(BTreeMap::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredient {
    /// Opaque ingredient identifier, used as the grouping key.
    pub ingredient_id: String,
    /// Amount for the recipe's base servings.
    pub quantity: f64,
    /// Unit key, e.g. "cup" or "piece".
    pub unit: String,
    /// Optional lines never reach the shopping list.
    #[serde(default)]
    pub optional: bool,
    /// Free-form preparation note ("finely chopped").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

impl RecipeIngredient {
    /// Creates a required ingredient line.
    pub fn new(ingredient_id: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
            unit: unit.into(),
            optional: false,
            preparation: None,
        }
    }

    /// Marks the line as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attaches a preparation note.
    pub fn with_preparation(mut self, preparation: impl Into<String>) -> Self {
        self.preparation = Some(preparation.into());
        self
    }
}

/// A recipe as loaded from content data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier referenced by meal slots.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: LocalizedText,
    /// Servings the ingredient quantities are written for. Zero is invalid.
    #[serde(default)]
    pub servings: u32,
    /// Ingredient lines.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Creates a recipe with no ingredients.
    pub fn new(id: impl Into<String>, name: impl Into<LocalizedText>, servings: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            servings,
            ingredients: Vec::new(),
        }
    }

    /// Adds an ingredient line.
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Name in `language`, or the recipe id when no name is present.
    pub fn display_name(&self, language: &str) -> &str {
        self.name.display(language).unwrap_or(&self.id)
    }

    /// Lines that belong on a shopping list.
    pub fn required_ingredients(&self) -> impl Iterator<Item = &RecipeIngredient> {
        self.ingredients.iter().filter(|line| !line.optional)
    }
}
