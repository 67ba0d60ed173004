use thiserror::Error;

/// Errors produced by repository mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Create was called without a usable name
    #[error("Dish name is required")]
    MissingName,

    /// Create would collide with an existing name (compared case- and
    /// trim-insensitively)
    #[error("Dish already exists")]
    DuplicateName,

    /// No record matches the requested name
    #[error("Dish not found")]
    NotFound,
}
