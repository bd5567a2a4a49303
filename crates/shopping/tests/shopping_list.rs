use chrono::NaiveDate;
use mealweek_mealplan::{Meal, MealSlot, WeekPlan};
use mealweek_shopping::{ShoppingItem, build_shopping_list, render_clipboard_text};

fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
}

fn meal(id: &str, slot: MealSlot, ingredients: &[&str]) -> Meal {
    Meal {
        id: id.to_string(),
        name: format!("meal-{id}"),
        slot,
        calories: None,
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
    }
}

/// A week with one meal per listed ingredient set, spread over days/slots.
fn week_with(ingredient_sets: &[&[&str]]) -> WeekPlan {
    let mut plan = WeekPlan::new(sunday());
    for (i, ingredients) in ingredient_sets.iter().enumerate() {
        let date = sunday() + chrono::Duration::days((i / 3) as i64);
        let slot = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner][i % 3];
        plan = plan.add_meal(date, meal(&format!("m{i}"), slot, ingredients));
    }
    plan
}

fn item(name: &str, count: u32) -> ShoppingItem {
    ShoppingItem {
        display_name: name.to_string(),
        count,
    }
}

#[test]
fn empty_week_yields_an_empty_list() {
    let plan = WeekPlan::new(sunday());
    assert!(build_shopping_list(&plan.days).is_empty());
}

#[test]
fn meals_without_ingredients_yield_an_empty_list() {
    let plan = week_with(&[&[], &[]]);
    assert!(build_shopping_list(&plan.days).is_empty());
}

#[test]
fn ingredients_merge_case_insensitively() {
    // three meals: "eggs", "Eggs", "EGGS" -> one entry, count 3. "Eggs" is
    // capitalized while the first-seen "eggs" is not, so it takes over the
    // display name; "EGGS" arrives when the name is already capitalized.
    let plan = week_with(&[&["eggs"], &["Eggs"], &["EGGS"]]);
    assert_eq!(build_shopping_list(&plan.days), vec![item("Eggs", 3)]);
}

#[test]
fn first_capitalized_variant_wins_over_lowercase_first() {
    let plan = week_with(&[&["milk"], &["Milk"]]);
    assert_eq!(build_shopping_list(&plan.days), vec![item("Milk", 2)]);
}

#[test]
fn capitalized_first_seen_is_never_replaced() {
    let plan = week_with(&[&["Milk"], &["milk"]]);
    assert_eq!(build_shopping_list(&plan.days), vec![item("Milk", 2)]);
}

#[test]
fn repeats_within_one_meal_count_separately() {
    let plan = week_with(&[&["garlic", "garlic", "onion"]]);
    assert_eq!(
        build_shopping_list(&plan.days),
        vec![item("garlic", 2), item("onion", 1)]
    );
}

#[test]
fn output_is_sorted_case_insensitively() {
    let plan = week_with(&[&["banana"], &["Apple"], &["cherry"]]);
    assert_eq!(
        build_shopping_list(&plan.days),
        vec![item("Apple", 1), item("banana", 1), item("cherry", 1)]
    );
}

#[test]
fn aggregates_across_all_days_and_slots() {
    let mut plan = WeekPlan::new(sunday());
    plan = plan.add_meal(
        sunday(),
        meal("b", MealSlot::Breakfast, &["Eggs", "butter"]),
    );
    plan = plan.add_meal(
        sunday() + chrono::Duration::days(3),
        meal("l", MealSlot::Lunch, &["eggs", "lettuce"]),
    );
    plan = plan.add_meal(
        sunday() + chrono::Duration::days(6),
        meal("d", MealSlot::Dinner, &["Butter", "rice"]),
    );

    assert_eq!(
        build_shopping_list(&plan.days),
        vec![
            item("Butter", 2),
            item("Eggs", 2),
            item("lettuce", 1),
            item("rice", 1),
        ]
    );
}

#[test]
fn clipboard_text_matches_the_sorted_list() {
    let plan = week_with(&[&["banana", "Apple"], &["banana"]]);
    let items = build_shopping_list(&plan.days);

    assert_eq!(render_clipboard_text(&items), "Apple (1x)\nbanana (2x)");
}
