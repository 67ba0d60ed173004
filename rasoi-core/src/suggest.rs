//! Ingredient-based dish suggestion.

use std::collections::HashSet;

use crate::model::DishRecord;

/// Splits a stored comma-separated ingredient string into a normalized set:
/// tokens trimmed, lowercased, empty tokens dropped.
pub fn ingredient_set(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Returns every dish whose full ingredient set is contained in `available`.
///
/// Matching is exact-token and case-insensitive; there is no fuzzy or
/// partial-token matching. A dish whose ingredient string parses to an empty
/// set qualifies against any pantry (vacuous subset).
pub fn suggest(available: &[String], dishes: &[DishRecord]) -> Vec<DishRecord> {
    let pantry: HashSet<String> = available.iter().map(|item| item.to_lowercase()).collect();
    dishes
        .iter()
        .filter(|dish| ingredient_set(&dish.ingredients).is_subset(&pantry))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, ingredients: &str) -> DishRecord {
        DishRecord {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            diet: "vegetarian".to_string(),
            prep_time: 0,
            cook_time: 0,
            flavor_profile: String::new(),
            course: String::new(),
            state: String::new(),
            region: String::new(),
        }
    }

    fn pantry(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ingredient_set_trims_lowercases_and_drops_empties() {
        let set = ingredient_set(" Rice ,  SUGAR,, ghee ,");
        let expected: HashSet<String> = ["rice", "sugar", "ghee"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_subset_match_includes_and_excludes() {
        let dishes = vec![
            dish("Kheer", "rice, sugar, milk"),
            dish("Ghee rice", "rice, ghee"),
            dish("Sugar rice", "Rice, Sugar"),
        ];

        let matched = suggest(&pantry(&["rice", "sugar", "ghee"]), &dishes);
        let names: Vec<_> = matched.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Ghee rice", "Sugar rice"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let dishes = vec![dish("Ghee rice", "RICE, Ghee")];
        let matched = suggest(&pantry(&["Rice", "GHEE"]), &dishes);
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_partial_tokens_do_not_match() {
        let dishes = vec![dish("Kheer", "basmati rice, sugar")];
        let matched = suggest(&pantry(&["rice", "sugar"]), &dishes);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_ingredient_string_matches_vacuously() {
        let dishes = vec![dish("Mystery", ""), dish("Kheer", "rice, milk")];
        let matched = suggest(&pantry(&["water"]), &dishes);
        let names: Vec<_> = matched.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Mystery"]);
    }
}
