//! Transaction store - cached reads and invalidating mutations

use crate::api::{ApiError, TransactionApi};
use crate::core::{CacheKey, CollectionCache};
use crate::entities::{CreateTransactionDto, Transaction, UpdateTransactionDto};

pub struct TransactionStore<A: TransactionApi> {
    api: A,
    cache: CollectionCache,
}

impl<A: TransactionApi> TransactionStore<A> {
    pub fn new(api: A, cache: CollectionCache) -> Self {
        Self { api, cache }
    }

    /// The collection, sorted by owner name ascending and date descending
    /// within the same owner. Served from the cache when a fresh snapshot
    /// exists, fetched and cached otherwise.
    pub fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        if let Some(items) = self.cache.load(CacheKey::TRANSACTIONS) {
            return Ok(sorted(items));
        }
        self.refresh()
    }

    /// Fetch unconditionally and replace the cached snapshot
    pub fn refresh(&self) -> Result<Vec<Transaction>, ApiError> {
        let items = self.api.get_all()?;
        self.cache.store(CacheKey::TRANSACTIONS, &items);
        Ok(sorted(items))
    }

    /// Whether `list` would be answered without a network round trip
    pub fn is_warm(&self) -> bool {
        self.cache.contains(CacheKey::TRANSACTIONS)
    }

    /// Single-entity read; never cached
    pub fn get(&self, id: i64) -> Result<Transaction, ApiError> {
        self.api.get_by_id(id)
    }

    pub fn create(&self, dto: &CreateTransactionDto) -> Result<Transaction, ApiError> {
        let created = self.api.create(dto)?;
        self.cache.invalidate(CacheKey::TRANSACTIONS);
        Ok(created)
    }

    pub fn update(&self, id: i64, dto: &UpdateTransactionDto) -> Result<Transaction, ApiError> {
        let updated = self.api.update(id, dto)?;
        self.cache.invalidate(CacheKey::TRANSACTIONS);
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete(id)?;
        self.cache.invalidate(CacheKey::TRANSACTIONS);
        Ok(())
    }
}

fn sorted(mut items: Vec<Transaction>) -> Vec<Transaction> {
    items.sort_by(|a, b| {
        a.tenpista_name
            .to_lowercase()
            .cmp(&b.tenpista_name.to_lowercase())
            .then_with(|| b.date.cmp(&a.date))
    });
    items
}
