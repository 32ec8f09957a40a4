//! Grocery aisle classification.
//!
//! Ingredients are classified by scanning an ordered keyword list and
//! taking the first keyword that occurs anywhere in the lowercased
//! ingredient id. Order matters: `"bell pepper"` resolves through `"bell"`
//! and `"peanut butter"` lands in dairy through `"butter"`. The list is
//! kept exactly as ordered below so existing categorizations stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grocery aisle category.
///
/// Variants are declared in aisle order, which is also the order used when
/// exports group items by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Fresh fruit and vegetables.
    #[serde(rename = "Produce")]
    Produce,
    /// Chicken, beef, pork.
    #[serde(rename = "Meat & Poultry")]
    MeatPoultry,
    /// Fish and shellfish.
    #[serde(rename = "Seafood")]
    Seafood,
    /// Eggs, milk, cheese and friends.
    #[serde(rename = "Dairy & Eggs")]
    DairyEggs,
    /// Plant proteins.
    #[serde(rename = "Protein")]
    Protein,
    /// Bread and tortillas.
    #[serde(rename = "Bakery")]
    Bakery,
    /// Rice and pasta.
    #[serde(rename = "Grains & Pasta")]
    GrainsPasta,
    /// Flour and sugar.
    #[serde(rename = "Baking")]
    Baking,
    /// Oils, vinegars, sauces.
    #[serde(rename = "Oils & Condiments")]
    OilsCondiments,
    /// Salt and spices.
    #[serde(rename = "Spices & Seasonings")]
    SpicesSeasonings,
    /// Anything unmatched.
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::MeatPoultry => "Meat & Poultry",
            Self::Seafood => "Seafood",
            Self::DairyEggs => "Dairy & Eggs",
            Self::Protein => "Protein",
            Self::Bakery => "Bakery",
            Self::GrainsPasta => "Grains & Pasta",
            Self::Baking => "Baking",
            Self::OilsCondiments => "Oils & Condiments",
            Self::SpicesSeasonings => "Spices & Seasonings",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Keyword table
// ============================================================================

/// Ordered keyword rules. First substring match wins.
const KEYWORD_RULES: &[(&str, Category)] = &[
    // Proteins
    ("chicken", Category::MeatPoultry),
    ("beef", Category::MeatPoultry),
    ("pork", Category::MeatPoultry),
    ("fish", Category::Seafood),
    ("salmon", Category::Seafood),
    ("shrimp", Category::Seafood),
    ("eggs", Category::DairyEggs),
    ("milk", Category::DairyEggs),
    ("cheese", Category::DairyEggs),
    ("yogurt", Category::DairyEggs),
    ("butter", Category::DairyEggs),
    ("cream", Category::DairyEggs),
    ("tofu", Category::Protein),
    // Produce
    ("tomato", Category::Produce),
    ("onion", Category::Produce),
    ("garlic", Category::Produce),
    ("lettuce", Category::Produce),
    ("carrot", Category::Produce),
    ("potato", Category::Produce),
    ("bell", Category::Produce),
    ("pepper", Category::Produce),
    ("spinach", Category::Produce),
    ("broccoli", Category::Produce),
    // Grains and bakery
    ("bread", Category::Bakery),
    ("tortilla", Category::Bakery),
    ("rice", Category::GrainsPasta),
    ("pasta", Category::GrainsPasta),
    ("flour", Category::Baking),
    // Pantry
    ("oil", Category::OilsCondiments),
    ("olive", Category::OilsCondiments),
    ("vinegar", Category::OilsCondiments),
    ("soy", Category::OilsCondiments),
    ("salt", Category::SpicesSeasonings),
    ("sugar", Category::Baking),
];

/// Keyword-substring ingredient classifier.
#[derive(Debug, Clone, Copy)]
pub struct CategoryClassifier {
    rules: &'static [(&'static str, Category)],
}

static STANDARD: CategoryClassifier = CategoryClassifier {
    rules: KEYWORD_RULES,
};

impl CategoryClassifier {
    /// Builds a classifier over custom ordered rules. Keywords must be lowercase.
    pub const fn with_rules(rules: &'static [(&'static str, Category)]) -> Self {
        Self { rules }
    }

    /// The shared grocery classifier.
    pub fn standard() -> &'static CategoryClassifier {
        &STANDARD
    }

    /// Category of the first keyword found in the lowercased id.
    pub fn classify(&self, ingredient_id: &str) -> Category {
        let normalized = ingredient_id.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| normalized.contains(*keyword))
            .map(|&(_, category)| category)
            .unwrap_or(Category::Other)
    }

    /// Number of keyword rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Classifies with the standard rules. See [`CategoryClassifier::classify`].
pub fn classify(ingredient_id: &str) -> Category {
    CategoryClassifier::standard().classify(ingredient_id)
}
