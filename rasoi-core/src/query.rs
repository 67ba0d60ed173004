//! Query interpretation for dish listings.
//!
//! Raw string parameters resolve into a [`ListQuery`] in one step, then
//! [`run_query`] applies the fixed pipeline: search filter, diet filter,
//! sort, paginate. The pipeline is a pure function of its inputs.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{diet_key, DishRecord};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Raw query-string parameters, exactly as they arrive on the wire.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListParams {
    /// Case-insensitive substring matched against name or ingredients
    pub search: Option<String>,
    /// Diet label; comparison ignores case, whitespace, and hyphens
    pub diet: Option<String>,
    /// 1-indexed page number (default: 1)
    pub page: Option<String>,
    /// Page size (default: 10)
    pub limit: Option<String>,
    /// Record field to sort by
    pub sort: Option<String>,
    /// Sort direction: "asc" (default) or "desc"
    #[serde(rename = "sortDir")]
    pub sort_dir: Option<String>,
}

impl ListParams {
    /// Resolves the raw parameters into typed options. Unparsable page or
    /// limit values fall back to their defaults; values below 1 are clamped.
    pub fn resolve(self) -> ListQuery {
        ListQuery {
            search: self.search.filter(|s| !s.is_empty()),
            diet: self.diet.filter(|s| !s.is_empty()),
            sort: self
                .sort
                .filter(|s| !s.is_empty())
                .map(|s| SortKey::parse(&s)),
            direction: match self.sort_dir.as_deref() {
                Some("desc") => Direction::Desc,
                _ => Direction::Asc,
            },
            page: parse_or(self.page.as_deref(), DEFAULT_PAGE).max(1),
            limit: parse_or(self.limit.as_deref(), DEFAULT_LIMIT).max(1),
        }
    }
}

fn parse_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

/// Sort key resolved from the raw `sort` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Ingredients,
    Diet,
    PrepTime,
    CookTime,
    FlavorProfile,
    Course,
    State,
    Region,
    /// Unrecognized field; every record compares equal, so the stable sort
    /// leaves the order unchanged
    Unknown,
}

impl SortKey {
    fn parse(raw: &str) -> Self {
        match raw {
            "name" => SortKey::Name,
            "ingredients" => SortKey::Ingredients,
            "diet" => SortKey::Diet,
            "prep_time" => SortKey::PrepTime,
            "cook_time" => SortKey::CookTime,
            "flavor_profile" => SortKey::FlavorProfile,
            "course" => SortKey::Course,
            "state" => SortKey::State,
            "region" => SortKey::Region,
            _ => SortKey::Unknown,
        }
    }
}

/// Sort direction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Fully-resolved listing options.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub search: Option<String>,
    pub diet: Option<String>,
    pub sort: Option<SortKey>,
    pub direction: Direction,
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        ListParams::default().resolve()
    }
}

/// One page of results plus the metadata the listing endpoint returns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageResult {
    /// Matching records after filtering, before pagination
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<DishRecord>,
}

/// Applies the pipeline to a snapshot of the collection. Filtering always
/// precedes sorting, and sorting always precedes pagination.
pub fn run_query(mut dishes: Vec<DishRecord>, query: &ListQuery) -> PageResult {
    if let Some(term) = &query.search {
        let term = term.to_lowercase();
        dishes.retain(|dish| {
            dish.name.to_lowercase().contains(&term)
                || dish.ingredients.to_lowercase().contains(&term)
        });
    }

    if let Some(diet) = &query.diet {
        let wanted = diet_key(diet);
        dishes.retain(|dish| diet_key(&dish.diet) == wanted);
    }

    if let Some(key) = query.sort {
        sort_dishes(&mut dishes, key, query.direction);
    }

    let total = dishes.len();
    let start = (query.page - 1).saturating_mul(query.limit).min(total);
    let end = start.saturating_add(query.limit).min(total);

    PageResult {
        total,
        page: query.page,
        limit: query.limit,
        data: dishes[start..end].to_vec(),
    }
}

fn sort_dishes(dishes: &mut [DishRecord], key: SortKey, direction: Direction) {
    dishes.sort_by(|a, b| {
        let ordering = match key {
            SortKey::PrepTime => a.prep_time.cmp(&b.prep_time),
            SortKey::CookTime => a.cook_time.cmp(&b.cook_time),
            _ => text_key(a, key).cmp(&text_key(b, key)),
        };
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

/// Lowercased comparison key for the text fields. Numeric and unknown keys
/// yield an empty string, which compares equal everywhere.
fn text_key(dish: &DishRecord, key: SortKey) -> String {
    let value = match key {
        SortKey::Name => &dish.name,
        SortKey::Ingredients => &dish.ingredients,
        SortKey::Diet => &dish.diet,
        SortKey::FlavorProfile => &dish.flavor_profile,
        SortKey::Course => &dish.course,
        SortKey::State => &dish.state,
        SortKey::Region => &dish.region,
        SortKey::PrepTime | SortKey::CookTime | SortKey::Unknown => "",
    };
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, ingredients: &str, diet: &str, prep: u32) -> DishRecord {
        DishRecord {
            name: name.to_string(),
            ingredients: ingredients.to_string(),
            diet: diet.to_string(),
            prep_time: prep,
            cook_time: 0,
            flavor_profile: String::new(),
            course: String::new(),
            state: String::new(),
            region: String::new(),
        }
    }

    fn catalog() -> Vec<DishRecord> {
        vec![
            dish("Jalebi", "maida, sugar, ghee", "vegetarian", 10),
            dish("Chicken Tikka", "chicken, yogurt, spices", "non vegetarian", 30),
            dish("poha", "flattened rice, onion", "Vegetarian", 5),
            dish("Biryani", "rice, chicken, saffron", "Non-Vegetarian", 60),
        ]
    }

    #[test]
    fn test_resolve_defaults() {
        let query = ListParams::default().resolve();
        assert_eq!(query.page, DEFAULT_PAGE);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.direction, Direction::Asc);
        assert!(query.search.is_none());
        assert!(query.sort.is_none());
    }

    #[test]
    fn test_resolve_unparsable_page_and_limit_fall_back() {
        let query = ListParams {
            page: Some("three".to_string()),
            limit: Some("".to_string()),
            ..ListParams::default()
        }
        .resolve();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_resolve_clamps_zero_page() {
        let query = ListParams {
            page: Some("0".to_string()),
            ..ListParams::default()
        }
        .resolve();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_search_matches_name_or_ingredients() {
        let query = ListQuery {
            search: Some("CHICKEN".to_string()),
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        assert_eq!(result.total, 2);
        let names: Vec<_> = result.data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Chicken Tikka", "Biryani"]);
    }

    #[test]
    fn test_diet_filter_ignores_spacing_and_hyphens() {
        let query = ListQuery {
            diet: Some("non-vegetarian".to_string()),
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        assert_eq!(result.total, 2);
        assert!(result
            .data
            .iter()
            .all(|d| d.diet == "non vegetarian" || d.diet == "Non-Vegetarian"));
    }

    #[test]
    fn test_no_match_is_empty_not_an_error() {
        let query = ListQuery {
            search: Some("pasta".to_string()),
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        assert_eq!(result.total, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_numeric_sort_desc_reverses_asc() {
        let asc = ListQuery {
            sort: Some(SortKey::PrepTime),
            ..ListQuery::default()
        };
        let desc = ListQuery {
            direction: Direction::Desc,
            ..asc.clone()
        };

        let up = run_query(catalog(), &asc).data;
        let mut down = run_query(catalog(), &desc).data;
        down.reverse();
        assert_eq!(up, down);

        let times: Vec<_> = up.iter().map(|d| d.prep_time).collect();
        assert_eq!(times, vec![5, 10, 30, 60]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let query = ListQuery {
            sort: Some(SortKey::Name),
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        let names: Vec<_> = result.data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Biryani", "Chicken Tikka", "Jalebi", "poha"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_order() {
        let query = ListQuery {
            sort: Some(SortKey::parse("calories")),
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        let names: Vec<_> = result.data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Jalebi", "Chicken Tikka", "poha", "Biryani"]);
    }

    #[test]
    fn test_pagination_window_and_bounds() {
        let query = ListQuery {
            limit: 3,
            ..ListQuery::default()
        };
        let first = run_query(catalog(), &query);
        assert_eq!(first.total, 4);
        assert_eq!(first.data.len(), 3);

        let second = run_query(
            catalog(),
            &ListQuery {
                page: 2,
                ..query.clone()
            },
        );
        assert_eq!(second.data.len(), 1);

        let beyond = run_query(
            catalog(),
            &ListQuery {
                page: 5,
                ..query.clone()
            },
        );
        assert_eq!(beyond.total, 4);
        assert!(beyond.data.is_empty());
    }

    #[test]
    fn test_filter_applies_before_pagination() {
        let query = ListQuery {
            diet: Some("vegetarian".to_string()),
            limit: 1,
            ..ListQuery::default()
        };
        let result = run_query(catalog(), &query);
        assert_eq!(result.total, 2);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].name, "Jalebi");
    }
}
