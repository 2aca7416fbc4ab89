//! Core module - configuration and the collection cache

pub mod cache;
pub mod config;

pub use cache::{CacheKey, CollectionCache};
pub use config::Config;
