use async_trait::async_trait;
use uuid::Uuid;

use models::pokemon::{CreatePokemon, Pokemon, UpdatePokemon};

use crate::storage::StoreError;

/// Operations the service needs from the backing document store.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Insert a new entry, assigning its identifier. A `no` or `name`
    /// collision is rejected with `StoreError::DuplicateKey`.
    async fn insert(&self, new: CreatePokemon) -> Result<Pokemon, StoreError>;

    async fn find_by_no(&self, no: i64) -> Result<Option<Pokemon>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError>;

    /// Lookup by canonical (lower-cased, trimmed) name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError>;

    /// Entries ordered ascending by `no`, skipping `offset`, at most `limit`.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Pokemon>, StoreError>;

    /// Partial merge onto an existing entry; same uniqueness rules as insert.
    async fn update_one(&self, id: Uuid, patch: &UpdatePokemon) -> Result<(), StoreError>;

    /// Returns the number of deleted records (0 or 1).
    async fn delete_one(&self, id: Uuid) -> Result<u64, StoreError>;
}
