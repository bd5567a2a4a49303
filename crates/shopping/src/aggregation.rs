use std::collections::HashMap;

use mealweek_mealplan::DayPlan;
use serde::Serialize;

/// One line of the shopping list: a grouped ingredient and how many times it
/// occurs across the week's meals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub display_name: String,
    pub count: u32,
}

/// Aggregate every ingredient of every present meal across `days` into a
/// deduplicated, sorted shopping list.
///
/// Grouping is case-insensitive: occurrences are keyed by the lowercase form
/// of the ingredient string, so "Eggs" and "eggs" land in one group. Each
/// occurrence counts, including repeats within a single meal.
///
/// The display name of a group is the first original string seen for it. A
/// later variant replaces it only when the later variant starts with an
/// uppercase letter and the current name starts with a lowercase one.
///
/// The result is ordered ascending by the case-insensitive form of the name.
/// Recomputed from scratch on every call; no state is kept between calls.
pub fn build_shopping_list(days: &[DayPlan]) -> Vec<ShoppingItem> {
    struct Group {
        display_name: String,
        count: u32,
    }

    let mut groups: HashMap<String, Group> = HashMap::new();

    for day in days {
        for meal in day.meals() {
            for ingredient in &meal.ingredients {
                let key = ingredient.to_lowercase();
                match groups.get_mut(&key) {
                    None => {
                        groups.insert(
                            key,
                            Group {
                                display_name: ingredient.clone(),
                                count: 1,
                            },
                        );
                    }
                    Some(group) => {
                        group.count += 1;
                        if starts_uppercase(ingredient) && starts_lowercase(&group.display_name) {
                            group.display_name = ingredient.clone();
                        }
                    }
                }
            }
        }
    }

    let mut entries: Vec<(String, Group)> = groups.into_iter().collect();
    // keys are the lowercase forms, so this is a case-insensitive ordering
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    entries
        .into_iter()
        .map(|(_, group)| ShoppingItem {
            display_name: group.display_name,
            count: group.count,
        })
        .collect()
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letter_classification() {
        assert!(starts_uppercase("Eggs"));
        assert!(!starts_uppercase("eggs"));
        assert!(starts_lowercase("eggs"));
        // digits and symbols are neither
        assert!(!starts_uppercase("1% milk"));
        assert!(!starts_lowercase("1% milk"));
        assert!(!starts_uppercase(""));
        assert!(!starts_lowercase(""));
    }
}
