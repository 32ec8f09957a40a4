//! Error handling and non-fatal degradation coverage.

use larder_core::shopping::resolve_slot;
use larder_core::units::try_convert;
use larder_core::{
    Error, MealSlot, Recipe, RecipeBook, ShoppingConfig, WeeklyPlan, consolidate, convert,
};

#[test]
fn test_unsupported_conversion_error() {
    let err = try_convert(5.0, "cup", "bogus").unwrap_err();
    assert_eq!(err.to_string(), "No conversion from 'cup' to 'bogus'");
    assert!(err.is_data_error());
}

#[test]
fn test_convert_degrades_to_passthrough() {
    assert_eq!(convert(5.0, "cup", "bogus"), 5.0);
    assert_eq!(convert(5.0, "pinch", "g"), 5.0);
}

#[test]
fn test_recipe_not_found_error() {
    let book = RecipeBook::new();
    let err = resolve_slot(&MealSlot::new("ghost", 2), &book).unwrap_err();
    match &err {
        Error::RecipeNotFound { id } => assert_eq!(id, "ghost"),
        _ => unreachable!("Expected RecipeNotFound"),
    }
    assert_eq!(err.to_string(), "Recipe not found: ghost");
}

#[test]
fn test_invalid_servings_error() {
    let book = RecipeBook::from_recipes([Recipe::new("zero", "Zero", 0)]);
    let err = resolve_slot(&MealSlot::new("zero", 2), &book).unwrap_err();
    assert!(matches!(err, Error::InvalidServings { .. }));
    assert!(err.is_data_error());
}

#[test]
fn test_consolidate_handles_unknown_units() {
    let entries = consolidate(&[
        larder_core::IngredientLine::new("herbs", 1.0, "bunch", "A"),
        larder_core::IngredientLine::new("herbs", 2.0, "bunch", "B"),
    ]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].quantity, 3.0);
    assert_eq!(entries[0].unit, "bunch");
}

#[test]
fn test_bad_plan_json() {
    let err = WeeklyPlan::from_json("not json").unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_bad_recipe_json() {
    let err = RecipeBook::from_json(r#"[{"name": "no id"}]"#).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}

#[test]
fn test_config_errors_are_not_data_errors() {
    let err = ShoppingConfig::from_toml_str("language = \"\"").unwrap_err();
    assert_eq!(err.to_string(), "Configuration error: language must not be empty");
    assert!(!err.is_data_error());
}
