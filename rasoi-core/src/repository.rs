//! In-memory dish collection. All reads and writes go through
//! [`DishRepository`]; nothing else holds a lasting reference to the records.

use crate::error::RepoError;
use crate::model::{name_key, DishPatch, DishRecord, NewDish};

/// Sole owner of the dish collection.
///
/// Insertion order is preserved, so an unsorted listing reflects ingestion
/// order followed by creation order.
#[derive(Debug, Default)]
pub struct DishRepository {
    dishes: Vec<DishRecord>,
}

impl DishRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from bulk-ingested records. Rows are assumed to be
    /// normalized already; bulk load does not enforce name uniqueness.
    pub fn from_records(dishes: Vec<DishRecord>) -> Self {
        Self { dishes }
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Snapshot of the collection. Callers may reorder or drop entries in the
    /// returned list without affecting internal state.
    pub fn list_all(&self) -> Vec<DishRecord> {
        self.dishes.clone()
    }

    /// Case-insensitive, trim-insensitive lookup. First match wins; created
    /// records are unique under this comparison so at most one exists.
    pub fn find_by_name(&self, name: &str) -> Option<&DishRecord> {
        let key = name_key(name);
        self.dishes.iter().find(|dish| name_key(&dish.name) == key)
    }

    /// Normalizes and appends a new record. Rejects an empty name and any
    /// name already present under normalized comparison.
    pub fn create(&mut self, input: NewDish) -> Result<DishRecord, RepoError> {
        let dish = input.into_record();
        if dish.name.is_empty() {
            return Err(RepoError::MissingName);
        }
        if self.find_by_name(&dish.name).is_some() {
            return Err(RepoError::DuplicateName);
        }
        self.dishes.push(dish.clone());
        Ok(dish)
    }

    /// Applies a partial patch to the record matching `name`. Fields absent
    /// from the patch keep their prior values.
    pub fn update(&mut self, name: &str, patch: DishPatch) -> Result<DishRecord, RepoError> {
        let key = name_key(name);
        let dish = self
            .dishes
            .iter_mut()
            .find(|dish| name_key(&dish.name) == key)
            .ok_or(RepoError::NotFound)?;
        patch.apply_to(dish);
        Ok(dish.clone())
    }

    /// Removes the record matching `name`; reports whether one was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let key = name_key(name);
        let before = self.dishes.len();
        self.dishes.retain(|dish| name_key(&dish.name) != key);
        self.dishes.len() < before
    }
}
