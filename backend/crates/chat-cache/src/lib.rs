pub mod cache_layer;
pub mod cache_lookup;
pub mod cache_store;
pub mod error;
pub mod memory_store;
pub mod redis_store;

pub use cache_layer::CacheLayer;
pub use cache_lookup::CacheLookup;
pub use cache_store::CacheStore;
pub use error::{CacheError, Result};
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

#[cfg(test)]
mod tests;
