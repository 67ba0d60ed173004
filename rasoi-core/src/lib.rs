//! Core engine for the rasoi dish catalog: the record model, the in-memory
//! repository, query interpretation (search/filter/sort/pagination), and
//! ingredient-based suggestion. HTTP concerns live in the server crate.

pub mod error;
pub mod ingest;
pub mod model;
pub mod query;
pub mod repository;
pub mod suggest;

pub use error::RepoError;
pub use ingest::load_dishes;
pub use model::{DishPatch, DishRecord, NewDish};
pub use query::{run_query, ListParams, ListQuery, PageResult};
pub use repository::DishRepository;
pub use suggest::{ingredient_set, suggest};
