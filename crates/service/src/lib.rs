//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (normalization, lookup order, error
//!   classification) from data access.
//! - Storage sits behind the `PokemonRepository` trait; a JSON-file-backed
//!   document store ships as the default implementation.

pub mod errors;
pub mod pagination;
pub mod pokemon;
pub mod storage;
