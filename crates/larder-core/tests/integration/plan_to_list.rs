//! End-to-end tests: plan + recipes -> shopping list items.

use chrono::Weekday;
use larder_core::{
    Category, DayPlan, MealSlot, Recipe, RecipeIngredient, ShoppingConfig, ShoppingList,
    ShoppingListGenerator, ShoppingListItem, WeeklyPlan, generate_from_plan,
};

use crate::common::{fixture_book, fixture_plan};

fn find<'a>(items: &'a [ShoppingListItem], id: &str, unit: &str) -> &'a ShoppingListItem {
    items
        .iter()
        .find(|item| item.matches(id, unit))
        .expect("item should be on the list")
}

#[test]
fn test_fixture_plan_consolidates() {
    let items = generate_from_plan(&fixture_plan(), &fixture_book());
    assert_eq!(items.len(), 7);

    let eggs = find(&items, "eggs", "piece");
    assert_eq!(eggs.quantity, 6.0);
    assert_eq!(eggs.used_in, vec!["R1", "R2"]);
    assert_eq!(eggs.category, Category::DairyEggs);

    let oil = find(&items, "olive oil", "tbsp");
    assert_eq!(oil.quantity, 5.0);
    assert_eq!(oil.used_in, vec!["Pasta Night", "Garlic Bread"]);
    assert_eq!(oil.category, Category::OilsCondiments);

    let pasta = find(&items, "spaghetti pasta", "lb");
    assert_eq!(pasta.quantity, 0.5);
    assert_eq!(pasta.category, Category::GrainsPasta);

    assert_eq!(find(&items, "bread", "piece").category, Category::Bakery);
    assert_eq!(find(&items, "parmesan cheese", "cup").quantity, 0.25);
}

#[test]
fn test_garlic_in_two_families_stays_split() {
    let items = generate_from_plan(&fixture_plan(), &fixture_book());
    let garlic: Vec<&ShoppingListItem> = items
        .iter()
        .filter(|item| item.ingredient_id == "garlic")
        .collect();
    assert_eq!(garlic.len(), 2);
    assert_eq!(find(&items, "garlic", "clove").quantity, 1.5);
    assert_eq!(find(&items, "garlic", "tbsp").quantity, 2.0);
}

#[test]
fn test_optional_and_broken_slots_absent() {
    let items = generate_from_plan(&fixture_plan(), &fixture_book());
    for missing in ["salsa", "basil", "saffron"] {
        assert!(
            items.iter().all(|item| item.ingredient_id != missing),
            "{missing} should not be on the list"
        );
    }
    assert!(items.iter().all(|item| !item.checked));
}

#[test]
fn test_end_to_end_scenario() {
    let recipes = vec![
        Recipe::new("R1", "R1", 2)
            .with_ingredient(RecipeIngredient::new("eggs", 2.0, "piece"))
            .with_ingredient(RecipeIngredient::new("salsa", 1.0, "tbsp").optional()),
        Recipe::new("R2", "R2", 2).with_ingredient(RecipeIngredient::new("eggs", 2.0, "piece")),
    ];
    let plan = WeeklyPlan::new().with_day(
        DayPlan::new(Weekday::Mon)
            .with_breakfast(MealSlot::new("R1", 4))
            .with_lunch(MealSlot::new("R2", 2)),
    );

    let items = generate_from_plan(&plan, &recipes);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ingredient_id, "eggs");
    assert_eq!(items[0].quantity, 6.0);
    assert_eq!(items[0].unit, "piece");
    assert_eq!(items[0].used_in, vec!["R1", "R2"]);
}

#[test]
fn test_scaling_before_consolidation() {
    let recipes = vec![
        Recipe::new("soup", "Soup", 4).with_ingredient(RecipeIngredient::new("stock", 2.0, "cup")),
    ];
    let plan = WeeklyPlan::new()
        .with_day(DayPlan::new(Weekday::Wed).with_dinner(MealSlot::new("soup", 8)));

    let lines = ShoppingListGenerator::new().scaled_lines(&plan, &recipes);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 4.0);
    assert_eq!(lines[0].unit, "cup");
}

#[test]
fn test_empty_plan_yields_empty_list() {
    assert!(generate_from_plan(&WeeklyPlan::new(), &fixture_book()).is_empty());
}

#[test]
fn test_generation_is_repeatable() {
    let book = fixture_book();
    let plan = fixture_plan();
    assert_eq!(generate_from_plan(&plan, &book), generate_from_plan(&plan, &book));
}

#[test]
fn test_shopping_list_with_config() {
    let config = ShoppingConfig {
        language: "es".to_string(),
        on_hand: vec!["Olive Oil".to_string(), "bread".to_string()],
        ..Default::default()
    };
    let list = ShoppingList::generate(&fixture_plan(), &fixture_book(), &config);

    assert_eq!(list.len(), 5);
    assert!(list.items.iter().all(|item| item.ingredient_id != "olive oil"));
    let eggs = find(&list.items, "eggs", "piece");
    assert_eq!(eggs.used_in, vec!["Huevos", "R2"]);
}

#[test]
fn test_regeneration_keeps_progress() {
    let config = ShoppingConfig::default();
    let book = fixture_book();

    let mut first = ShoppingList::generate(&fixture_plan(), &book, &config);
    assert!(first.toggle("eggs", "piece"));
    assert!(first.set_note("bread", "piece", Some("sourdough".to_string())));

    let edited_plan = fixture_plan().with_day(
        DayPlan::new(Weekday::Fri).with_lunch(MealSlot::new("r2", 4)),
    );
    let mut second = ShoppingList::generate(&edited_plan, &book, &config);
    second.carry_over_from(&first);

    let eggs = find(&second.items, "eggs", "piece");
    assert_eq!(eggs.quantity, 10.0);
    assert!(eggs.checked);
    assert_eq!(
        find(&second.items, "bread", "piece").note.as_deref(),
        Some("sourdough")
    );
    assert_eq!(second.checked_count(), 1);
}
