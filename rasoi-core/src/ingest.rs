//! CSV ingestion for the startup dish catalog.
//!
//! The catalog file carries the columns `name, ingredients, diet, prep_time,
//! cook_time, flavor_profile, course, state, region` with a required header
//! row. Columns are matched by header name, so their order in the file is
//! free. Rows normalize exactly like create input; bulk load trusts the file
//! and does not enforce name uniqueness.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{error, info, warn};

use crate::model::{parse_minutes, DishRecord};

/// Loads the dish catalog from `path`.
///
/// A missing or unreadable file is logged at error level and yields an empty
/// catalog; startup never aborts over it. Rows that fail to decode are
/// logged and skipped.
pub fn load_dishes(path: &Path) -> Vec<DishRecord> {
    let mut reader = match ReaderBuilder::new().flexible(true).from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Dish catalog not readable at {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            error!("Dish catalog {} has no header row: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut dishes = Vec::new();
    for (index, row) in reader.records().enumerate() {
        match row {
            Ok(record) => dishes.push(record_from_row(&headers, &record)),
            // +2: one for the header row, one for 1-indexing
            Err(e) => warn!("Skipping dish catalog line {}: {}", index + 2, e),
        }
    }

    info!("Loaded {} dishes from {}", dishes.len(), path.display());
    dishes
}

fn record_from_row(headers: &StringRecord, row: &StringRecord) -> DishRecord {
    let field = |name: &str| -> &str {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|index| row.get(index))
            .unwrap_or("")
    };

    DishRecord {
        name: field("name").trim().to_string(),
        ingredients: field("ingredients").trim().to_string(),
        diet: field("diet").trim().to_string(),
        prep_time: parse_minutes(field("prep_time")),
        cook_time: parse_minutes(field("cook_time")),
        flavor_profile: field("flavor_profile").trim().to_string(),
        course: field("course").trim().to_string(),
        state: field("state").trim().to_string(),
        region: field("region").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_from(headers: &[&str], values: &[&str]) -> DishRecord {
        let headers = StringRecord::from(headers.to_vec());
        let row = StringRecord::from(values.to_vec());
        record_from_row(&headers, &row)
    }

    #[test]
    fn test_row_normalization() {
        let dish = row_from(
            &[
                "name",
                "ingredients",
                "diet",
                "prep_time",
                "cook_time",
                "flavor_profile",
                "course",
                "state",
                "region",
            ],
            &[
                " Gajar ka halwa ",
                "Carrots, milk, sugar",
                "vegetarian",
                "15",
                "60",
                "sweet",
                "dessert",
                "Punjab",
                "North",
            ],
        );

        assert_eq!(dish.name, "Gajar ka halwa");
        assert_eq!(dish.prep_time, 15);
        assert_eq!(dish.cook_time, 60);
    }

    #[test]
    fn test_missing_columns_default() {
        // The dataset marks unknown times as -1; the non-negative invariant
        // turns those into 0
        let dish = row_from(
            &["name", "prep_time", "cook_time"],
            &["Kaju katli", "-1", "abc"],
        );

        assert_eq!(dish.name, "Kaju katli");
        assert_eq!(dish.prep_time, 0);
        assert_eq!(dish.cook_time, 0);
        assert_eq!(dish.ingredients, "");
        assert_eq!(dish.region, "");
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let dishes = load_dishes(Path::new("/nonexistent/indian_food.csv"));
        assert!(dishes.is_empty());
    }
}
