//! Shared fixtures for Larder integration tests.

#![allow(dead_code)]

use larder_core::{RecipeBook, WeeklyPlan};

/// Recipe data in the shape the content files use.
pub const RECIPES_JSON: &str = r#"[
    {
        "id": "r1",
        "name": {"en": "R1", "es": "Huevos"},
        "servings": 2,
        "ingredients": [
            {"ingredientId": "eggs", "quantity": 2, "unit": "piece"},
            {"ingredientId": "salsa", "quantity": 1, "unit": "tbsp", "optional": true}
        ]
    },
    {
        "id": "r2",
        "name": "R2",
        "servings": 2,
        "ingredients": [
            {"ingredientId": "eggs", "quantity": 2, "unit": "piece"}
        ]
    },
    {
        "id": "pasta-night",
        "name": "Pasta Night",
        "servings": 4,
        "ingredients": [
            {"ingredientId": "spaghetti pasta", "quantity": 1, "unit": "lb"},
            {"ingredientId": "olive oil", "quantity": 2, "unit": "tbsp"},
            {"ingredientId": "garlic", "quantity": 3, "unit": "clove", "preparation": "minced"},
            {"ingredientId": "parmesan cheese", "quantity": 0.5, "unit": "cup"},
            {"ingredientId": "basil", "quantity": 1, "unit": "to taste", "optional": true}
        ]
    },
    {
        "id": "garlic-bread",
        "name": "Garlic Bread",
        "servings": 4,
        "ingredients": [
            {"ingredientId": "bread", "quantity": 1, "unit": "piece"},
            {"ingredientId": "garlic", "quantity": 1, "unit": "tbsp"},
            {"ingredientId": "olive oil", "quantity": 6, "unit": "tsp"}
        ]
    },
    {
        "id": "no-servings",
        "name": "Mystery",
        "ingredients": [
            {"ingredientId": "saffron", "quantity": 1, "unit": "pinch"}
        ]
    }
]"#;

/// A plan exercising main meals, snacks, bad references and scaling.
pub const PLAN_JSON: &str = r#"{
    "days": [
        {
            "day": "Monday",
            "breakfast": {"recipeId": "r1", "servings": 4},
            "lunch": {"recipeId": "r2", "servings": 2},
            "dinner": {"recipeId": "pasta-night", "servings": 2}
        },
        {
            "day": "Tuesday",
            "dinner": {"recipeId": "garlic-bread", "servings": 8},
            "snacks": [
                {"recipeId": "deleted-recipe", "servings": 1},
                {"recipeId": "no-servings", "servings": 2}
            ]
        }
    ]
}"#;

/// Recipe book parsed from [`RECIPES_JSON`].
pub fn fixture_book() -> RecipeBook {
    RecipeBook::from_json(RECIPES_JSON).expect("fixture recipes should parse")
}

/// Plan parsed from [`PLAN_JSON`].
pub fn fixture_plan() -> WeeklyPlan {
    WeeklyPlan::from_json(PLAN_JSON).expect("fixture plan should parse")
}
