use std::{collections::HashMap, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use models::pokemon::{CreatePokemon, Pokemon, UpdatePokemon};

use crate::pokemon::repository::PokemonRepository;
use crate::storage::StoreError;

/// JSON file-backed document store for catalog entries.
///
/// Keeps the whole collection in memory behind an `RwLock` and persists it
/// to a single JSON file after every mutation. Uniqueness of `no` and
/// `name` is enforced here and surfaced as `StoreError::DuplicateKey`;
/// concurrent writers race inside the write lock and the loser gets the
/// duplicate-key error.
pub struct JsonDocumentStore {
    inner: RwLock<HashMap<Uuid, Pokemon>>,
    file_path: Option<PathBuf>,
}

impl JsonDocumentStore {
    /// Open the store at the configured path. Creates the file with an
    /// empty collection if missing.
    pub async fn open(cfg: &configs::StorageConfig) -> Result<Arc<Self>, StoreError> {
        let file_path = PathBuf::from(&cfg.data_file);
        common::env::ensure_parent_dir(&file_path)
            .await
            .map_err(|e| StoreError::Io(e.to_string()))?;

        let map: HashMap<Uuid, Pokemon> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Serde(e.to_string()))?,
            Err(_) => {
                let empty = HashMap::new();
                let data = serde_json::to_vec(&empty).map_err(|e| StoreError::Serde(e.to_string()))?;
                fs::write(&file_path, data).await.map_err(|e| StoreError::Io(e.to_string()))?;
                empty
            }
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path: Some(file_path) }))
    }

    /// Store that never touches the filesystem. Intended for tests.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(HashMap::new()), file_path: None })
    }

    async fn save(&self, map: &HashMap<Uuid, Pokemon>) -> Result<(), StoreError> {
        let Some(path) = &self.file_path else { return Ok(()) };
        let data = serde_json::to_vec(map).map_err(|e| StoreError::Serde(e.to_string()))?;
        fs::write(path, data).await.map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }

    fn check_unique(
        map: &HashMap<Uuid, Pokemon>,
        skip: Option<Uuid>,
        no: Option<i64>,
        name: Option<&str>,
    ) -> Result<(), StoreError> {
        for entry in map.values() {
            if Some(entry.id) == skip {
                continue;
            }
            if no == Some(entry.no) {
                return Err(StoreError::DuplicateKey { field: "no", value: entry.no.to_string() });
            }
            if name == Some(entry.name.as_str()) {
                return Err(StoreError::DuplicateKey { field: "name", value: entry.name.clone() });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PokemonRepository for JsonDocumentStore {
    async fn insert(&self, new: CreatePokemon) -> Result<Pokemon, StoreError> {
        let mut map = self.inner.write().await;
        Self::check_unique(&map, None, Some(new.no), Some(new.name.as_str()))?;
        let entry = Pokemon { id: Uuid::new_v4(), no: new.no, name: new.name, extra: new.extra };
        map.insert(entry.id, entry.clone());
        self.save(&map).await?;
        Ok(entry)
    }

    async fn find_by_no(&self, no: i64) -> Result<Option<Pokemon>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.values().find(|p| p.no == no).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StoreError> {
        let map = self.inner.read().await;
        Ok(map.values().find(|p| p.name == name).cloned())
    }

    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Pokemon>, StoreError> {
        let map = self.inner.read().await;
        let mut entries: Vec<Pokemon> = map.values().cloned().collect();
        entries.sort_by_key(|p| p.no);
        Ok(entries.into_iter().skip(offset as usize).take(limit as usize).collect())
    }

    async fn update_one(&self, id: Uuid, patch: &UpdatePokemon) -> Result<(), StoreError> {
        let mut map = self.inner.write().await;
        // Absent id acks as a no-op, matching document-store updateOne
        // semantics; callers resolve existence beforehand.
        let Some(current) = map.get(&id) else { return Ok(()) };
        Self::check_unique(&map, Some(id), patch.no, patch.name.as_deref())?;
        let updated = patch.apply_to(current.clone());
        map.insert(id, updated);
        self.save(&map).await
    }

    async fn delete_one(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut map = self.inner.write().await;
        if map.remove(&id).is_none() {
            return Ok(0);
        }
        self.save(&map).await?;
        Ok(1)
    }
}
