use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::pokemon::{self, CreatePokemon, Pokemon, UpdatePokemon};

use crate::errors::ServiceError;
use crate::pagination::Page;
use crate::pokemon::lookup::{self, LookupKey};
use crate::pokemon::repository::PokemonRepository;

const DEFAULT_MAX_LIMIT: u64 = 100;

/// Application service encapsulating catalog business rules: name
/// normalization, lookup disambiguation and store error classification.
/// All state lives in the repository; the service keeps none of its own.
pub struct PokemonService<R: PokemonRepository> {
    repo: Arc<R>,
    max_limit: u64,
}

impl<R: PokemonRepository> PokemonService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo, max_limit: DEFAULT_MAX_LIMIT }
    }

    /// Like `new`, with the page-size ceiling taken from config.
    pub fn with_pagination(repo: Arc<R>, cfg: &configs::PaginationConfig) -> Self {
        Self { repo, max_limit: cfg.max_limit }
    }

    #[instrument(skip(self, req), fields(no = req.no))]
    pub async fn create(&self, mut req: CreatePokemon) -> Result<Pokemon, ServiceError> {
        req.name = pokemon::normalize_name(&req.name);
        pokemon::validate_new(&req)?;
        let created = self.repo.insert(req).await?;
        info!(id = %created.id, name = %created.name, "pokemon_created");
        Ok(created)
    }

    /// Entries ordered ascending by `no`, windowed by the page. No total
    /// count is reported.
    pub async fn find_all(&self, page: Page) -> Result<Vec<Pokemon>, ServiceError> {
        let (offset, limit) = page.normalize(self.max_limit);
        Ok(self.repo.list(offset, limit).await?)
    }

    /// Flexible lookup: catalog number, then store identifier, then name;
    /// first match wins. No match is a `NotFound` error.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, ServiceError> {
        for key in lookup::candidates(term) {
            let found = match key {
                LookupKey::No(no) => self.repo.find_by_no(no).await?,
                LookupKey::Id(id) => self.repo.find_by_id(id).await?,
                LookupKey::Name(name) => self.repo.find_by_name(&name).await?,
            };
            if let Some(entry) = found {
                return Ok(entry);
            }
        }
        Err(ServiceError::not_found_term(term))
    }

    /// Resolve `term`, persist the partial merge and return the resolved
    /// entry with the changes applied (no re-fetch from the store).
    #[instrument(skip(self, patch))]
    pub async fn update(&self, term: &str, patch: UpdatePokemon) -> Result<Pokemon, ServiceError> {
        let current = self.find_one(term).await?;
        let patch = patch.normalized();
        self.repo.update_one(current.id, &patch).await?;
        info!(id = %current.id, "pokemon_updated");
        Ok(patch.apply_to(current))
    }

    /// Delete by identifier only; no flexible term resolution here.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        let deleted = self.repo.delete_one(id).await?;
        if deleted == 0 {
            return Err(ServiceError::not_found_id(id));
        }
        info!(%id, "pokemon_removed");
        Ok(())
    }
}
