//! Tenpista store - cached reads and invalidating mutations

use crate::api::{ApiError, TenpistaApi};
use crate::core::{CacheKey, CollectionCache};
use crate::entities::{CreateTenpistaDto, Tenpista, UpdateTenpistaDto};

/// Capability to create tenpistas, injected into the transaction form so it
/// can offer inline creation without depending on this module's internals
pub trait TenpistaCreator {
    fn create_tenpista(&self, dto: &CreateTenpistaDto) -> Result<Tenpista, ApiError>;
}

pub struct TenpistaStore<A: TenpistaApi> {
    api: A,
    cache: CollectionCache,
}

impl<A: TenpistaApi> TenpistaStore<A> {
    pub fn new(api: A, cache: CollectionCache) -> Self {
        Self { api, cache }
    }

    /// The collection, sorted by name ascending. Served from the cache when
    /// a fresh snapshot exists, fetched and cached otherwise.
    pub fn list(&self) -> Result<Vec<Tenpista>, ApiError> {
        if let Some(items) = self.cache.load(CacheKey::TENPISTAS) {
            return Ok(sorted(items));
        }
        self.refresh()
    }

    /// Fetch unconditionally and replace the cached snapshot
    pub fn refresh(&self) -> Result<Vec<Tenpista>, ApiError> {
        let items = self.api.get_all()?;
        self.cache.store(CacheKey::TENPISTAS, &items);
        Ok(sorted(items))
    }

    /// Whether `list` would be answered without a network round trip
    pub fn is_warm(&self) -> bool {
        self.cache.contains(CacheKey::TENPISTAS)
    }

    /// Single-entity read; never cached
    pub fn get(&self, id: i64) -> Result<Tenpista, ApiError> {
        self.api.get_by_id(id)
    }

    pub fn create(&self, dto: &CreateTenpistaDto) -> Result<Tenpista, ApiError> {
        let created = self.api.create(dto)?;
        self.cache.invalidate(CacheKey::TENPISTAS);
        Ok(created)
    }

    pub fn update(&self, id: i64, dto: &UpdateTenpistaDto) -> Result<Tenpista, ApiError> {
        let updated = self.api.update(id, dto)?;
        self.cache.invalidate(CacheKey::TENPISTAS);
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(id)?;
        self.cache.invalidate(CacheKey::TENPISTAS);
        Ok(())
    }
}

impl<A: TenpistaApi> TenpistaCreator for TenpistaStore<A> {
    fn create_tenpista(&self, dto: &CreateTenpistaDto) -> Result<Tenpista, ApiError> {
        self.create(dto)
    }
}

/// Name sort, case-insensitive (closest stdlib analogue of a locale-aware
/// comparison)
fn sorted(mut items: Vec<Tenpista>) -> Vec<Tenpista> {
    items.sort_by_cached_key(|t| t.name.to_lowercase());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tenpistas::MockTenpistaApi;
    use tempfile::TempDir;

    fn tenpista(id: i64, name: &str) -> Tenpista {
        Tenpista {
            id,
            name: name.to_string(),
            rut: format!("{0}{0}{0}{0}{0}{0}{0}{0}-{0}", id),
        }
    }

    fn store_with(api: MockTenpistaApi, tmp: &TempDir) -> TenpistaStore<MockTenpistaApi> {
        TenpistaStore::new(api, CollectionCache::new(tmp.path().to_path_buf(), 60))
    }

    #[test]
    fn test_list_fetches_once_then_serves_from_cache() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_all()
            .times(1)
            .returning(|| Ok(vec![tenpista(2, "maria"), tenpista(1, "Ana")]));

        let store = store_with(api, &tmp);
        let first = store.list().unwrap();
        let second = store.list().unwrap();

        // sorted by name regardless of source, fetch happened exactly once
        assert_eq!(first.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(first, second);
        assert!(store.is_warm());
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_all().returning(|| {
            Ok(vec![
                tenpista(1, "benito"),
                tenpista(2, "Alicia"),
                tenpista(3, "carla"),
            ])
        });

        let store = store_with(api, &tmp);
        let names: Vec<String> = store.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Alicia", "benito", "carla"]);
    }

    #[test]
    fn test_create_invalidates_the_list() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_all()
            .times(2)
            .returning(|| Ok(vec![tenpista(1, "Ana")]));
        api.expect_create()
            .times(1)
            .returning(|dto| {
                Ok(Tenpista {
                    id: 9,
                    name: dto.name.clone(),
                    rut: dto.rut.clone(),
                })
            });

        let store = store_with(api, &tmp);
        store.list().unwrap();

        let created = store
            .create(&CreateTenpistaDto {
                name: "New Tenpista".to_string(),
                rut: "12345678-9".to_string(),
            })
            .unwrap();
        assert_eq!(created.id, 9);

        // snapshot was dropped, so this list refetches
        assert!(!store.is_warm());
        store.list().unwrap();
    }

    #[test]
    fn test_failed_mutation_leaves_cache_untouched() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_all()
            .times(1)
            .returning(|| Ok(vec![tenpista(1, "Ana")]));
        api.expect_delete().returning(|_| {
            Err(ApiError::Status {
                status: 409,
                detail: Some("El tenpista tiene transacciones".to_string()),
            })
        });

        let store = store_with(api, &tmp);
        store.list().unwrap();

        let err = store.delete(1).unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(store.is_warm());
    }

    #[test]
    fn test_update_and_delete_invalidate() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_all()
            .returning(|| Ok(vec![tenpista(1, "Ana")]));
        api.expect_update().returning(|id, _| Ok(tenpista(id, "Ana B")));
        api.expect_delete().returning(|_| Ok(()));

        let store = store_with(api, &tmp);

        store.list().unwrap();
        store
            .update(1, &UpdateTenpistaDto::from(CreateTenpistaDto {
                name: "Ana B".to_string(),
                rut: "11111111-1".to_string(),
            }))
            .unwrap();
        assert!(!store.is_warm());

        store.list().unwrap();
        store.delete(1).unwrap();
        assert!(!store.is_warm());
    }

    #[test]
    fn test_get_bypasses_the_cache() {
        let tmp = TempDir::new().unwrap();
        let mut api = MockTenpistaApi::new();
        api.expect_get_by_id()
            .times(2)
            .returning(|id| Ok(tenpista(id, "Ana")));

        let store = store_with(api, &tmp);
        store.get(1).unwrap();
        store.get(1).unwrap();
        assert!(!store.is_warm());
    }
}
