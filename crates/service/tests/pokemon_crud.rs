use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use models::pokemon::{CreatePokemon, UpdatePokemon};
use service::errors::ServiceError;
use service::pagination::Page;
use service::pokemon::PokemonService;
use service::storage::JsonDocumentStore;

fn entry(no: i64, name: &str) -> CreatePokemon {
    CreatePokemon { no, name: name.into(), extra: Map::new() }
}

async fn file_backed_service() -> (PokemonService<JsonDocumentStore>, PathBuf) {
    common::utils::logging::init_logging_default();
    let path = std::env::temp_dir().join(format!("pokedex_crud_{}.json", Uuid::new_v4()));
    let cfg = configs::StorageConfig { data_file: path.display().to_string() };
    let store = JsonDocumentStore::open(&cfg).await.expect("open store");
    (PokemonService::with_pagination(store, &configs::PaginationConfig::default()), path)
}

#[tokio::test]
async fn full_crud_lifecycle() -> Result<(), anyhow::Error> {
    let (svc, path) = file_backed_service().await;

    let mut extra = Map::new();
    extra.insert("type".into(), Value::String("electric".into()));
    let created = svc
        .create(CreatePokemon { no: 25, name: " Pikachu ".into(), extra })
        .await?;
    assert_eq!(created.name, "pikachu");

    // all three lookup keys resolve the same entry
    assert_eq!(svc.find_one("25").await?.id, created.id);
    assert_eq!(svc.find_one(&created.id.to_string()).await?.id, created.id);
    assert_eq!(svc.find_one(" PIKACHU ").await?.id, created.id);

    // partial update by numeric term: name changes, extra untouched
    let patch = UpdatePokemon { name: Some(" Raichu ".into()), ..Default::default() };
    let merged = svc.update("25", patch).await?;
    assert_eq!(merged.name, "raichu");
    assert_eq!(merged.extra["type"], Value::String("electric".into()));

    svc.remove(created.id).await?;
    for term in ["25", &created.id.to_string(), "raichu"] {
        assert!(matches!(svc.find_one(term).await, Err(ServiceError::NotFound(_))));
    }

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn duplicate_names_differing_by_case_are_rejected() -> Result<(), anyhow::Error> {
    let (svc, path) = file_backed_service().await;

    svc.create(entry(1, "Bulbasaur")).await?;
    let second = svc.create(entry(2, "BULBASAUR")).await;
    assert!(matches!(second, Err(ServiceError::DuplicateEntry { field: "name", .. })));

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn find_all_windows_in_no_order() -> Result<(), anyhow::Error> {
    let (svc, path) = file_backed_service().await;

    for (no, name) in [(7, "squirtle"), (1, "bulbasaur"), (4, "charmander"), (2, "ivysaur"), (5, "charmeleon")] {
        svc.create(entry(no, name)).await?;
    }

    let page = svc.find_all(Page { limit: Some(2), offset: Some(1) }).await?;
    let nos: Vec<i64> = page.iter().map(|p| p.no).collect();
    assert_eq!(nos, vec![2, 4]);

    // defaults: limit 10, offset 0
    let all = svc.find_all(Page::default()).await?;
    let nos: Vec<i64> = all.iter().map(|p| p.no).collect();
    assert_eq!(nos, vec![1, 2, 4, 5, 7]);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn remove_requires_an_identifier_match() -> Result<(), anyhow::Error> {
    let (svc, path) = file_backed_service().await;

    svc.create(entry(150, "mewtwo")).await?;
    let res = svc.remove(Uuid::new_v4()).await;
    assert!(matches!(res, Err(ServiceError::NotFound(_))));
    // nothing was deleted
    assert_eq!(svc.find_one("150").await?.name, "mewtwo");

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}

#[tokio::test]
async fn entries_survive_a_store_reopen() -> Result<(), anyhow::Error> {
    let (svc, path) = file_backed_service().await;
    let created = svc.create(entry(133, "Eevee")).await?;
    drop(svc);

    let cfg = configs::StorageConfig { data_file: path.display().to_string() };
    let store: Arc<JsonDocumentStore> = JsonDocumentStore::open(&cfg).await?;
    let svc = PokemonService::new(store);
    assert_eq!(svc.find_one("eevee").await?.id, created.id);

    let _ = tokio::fs::remove_file(&path).await;
    Ok(())
}
