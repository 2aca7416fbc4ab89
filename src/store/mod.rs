//! Data-synchronization stores
//!
//! One store per entity, wrapping its API client and the collection cache.
//! Reads serve a fresh cached snapshot when one exists; every successful
//! mutation invalidates the entity's key so the next read refetches. A
//! failed mutation leaves the cache untouched.

pub mod tenpistas;
pub mod transactions;

pub use tenpistas::{TenpistaCreator, TenpistaStore};
pub use transactions::TransactionStore;
