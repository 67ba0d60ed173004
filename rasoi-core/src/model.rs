//! Dish record model and field normalization rules.
//!
//! All string fields are stored trimmed; missing input becomes an empty
//! string, never a null. The two time fields are minutes and coerce to 0
//! whenever the input is absent, negative, or unparsable.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One dish in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishRecord {
    /// Identity key; uniqueness is case-insensitive and trim-insensitive
    pub name: String,
    /// Comma-separated ingredient names
    pub ingredients: String,
    /// Free-form diet label, e.g. "vegetarian" or "non vegetarian"
    pub diet: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    pub flavor_profile: String,
    pub course: String,
    pub state: String,
    pub region: String,
}

/// Creation input. Every field is optional; normalization happens when the
/// record is stored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewDish {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    /// Accepts a number or a numeric string; anything else becomes 0
    #[serde(default, deserialize_with = "minutes")]
    #[schema(value_type = u32)]
    pub prep_time: u32,
    #[serde(default, deserialize_with = "minutes")]
    #[schema(value_type = u32)]
    pub cook_time: u32,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

impl NewDish {
    /// Normalizes the input into a storable record: strings trimmed, missing
    /// strings empty, times already coerced during deserialization.
    pub fn into_record(self) -> DishRecord {
        DishRecord {
            name: trimmed(self.name),
            ingredients: trimmed(self.ingredients),
            diet: trimmed(self.diet),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            flavor_profile: trimmed(self.flavor_profile),
            course: trimmed(self.course),
            state: trimmed(self.state),
            region: trimmed(self.region),
        }
    }
}

/// Partial update. A string field only applies when present and non-empty; a
/// time field applies whenever present, coercing bad input to 0. Absent
/// fields always keep their prior value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DishPatch {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    #[serde(default, deserialize_with = "minutes_opt")]
    #[schema(value_type = Option<u32>)]
    pub prep_time: Option<u32>,
    #[serde(default, deserialize_with = "minutes_opt")]
    #[schema(value_type = Option<u32>)]
    pub cook_time: Option<u32>,
    pub flavor_profile: Option<String>,
    pub course: Option<String>,
    pub state: Option<String>,
    pub region: Option<String>,
}

impl DishPatch {
    pub fn apply_to(&self, dish: &mut DishRecord) {
        apply_string(&self.name, &mut dish.name);
        apply_string(&self.ingredients, &mut dish.ingredients);
        apply_string(&self.diet, &mut dish.diet);
        if let Some(minutes) = self.prep_time {
            dish.prep_time = minutes;
        }
        if let Some(minutes) = self.cook_time {
            dish.cook_time = minutes;
        }
        apply_string(&self.flavor_profile, &mut dish.flavor_profile);
        apply_string(&self.course, &mut dish.course);
        apply_string(&self.state, &mut dish.state);
        apply_string(&self.region, &mut dish.region);
    }
}

fn apply_string(patch: &Option<String>, target: &mut String) {
    if let Some(value) = patch {
        if !value.is_empty() {
            *target = value.trim().to_string();
        }
    }
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_string()
}

/// Key used for case-insensitive, trim-insensitive name comparison.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Diet labels compare lowercased with whitespace and hyphens stripped, so
/// "non vegetarian", "Non-Vegetarian", and "nonvegetarian" are all equal.
pub fn diet_key(diet: &str) -> String {
    diet.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Coerces free-form minute input to a non-negative integer. Numbers
/// truncate toward zero, numeric strings parse their leading digits
/// ("30 min" is 30), and everything else, including negatives, is 0.
pub fn parse_minutes(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn coerce_minutes(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                u32::try_from(i).unwrap_or(0)
            } else {
                // Negative or fractional; fractional truncates, negative is 0
                n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u32).unwrap_or(0)
            }
        }
        Value::String(s) => parse_minutes(s),
        _ => 0,
    }
}

fn minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(coerce_minutes(&Value::deserialize(deserializer)?))
}

fn minutes_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(coerce_minutes(&Value::deserialize(deserializer)?)))
}
